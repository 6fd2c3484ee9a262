use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::games::{MatchOutcome, MatchingSession};
use crate::questions::MatchPair;

/// Keys for the left column; the right column uses digits.
pub const ENGLISH_KEYS: &str = "abcdefghi";

fn entry_style(
    pair: &MatchPair,
    index: usize,
    selected: Option<usize>,
    pending_outcome: Option<MatchOutcome>,
) -> Style {
    let selected_here = selected == Some(index);
    match (pair.matched, selected_here, pending_outcome) {
        (true, _, _) => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
        (false, true, Some(MatchOutcome::Correct)) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (false, true, Some(MatchOutcome::Wrong)) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (false, true, None) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        _ => Style::default(),
    }
}

fn column<'a>(
    title: &'a str,
    pairs: &'a [MatchPair],
    selected: Option<usize>,
    pending_outcome: Option<MatchOutcome>,
    keys: impl Iterator<Item = String>,
    text_of: impl Fn(&MatchPair) -> &str,
) -> List<'a> {
    let items: Vec<ListItem> = pairs
        .iter()
        .zip(keys)
        .enumerate()
        .map(|(i, (pair, key))| {
            let marker = if pair.matched { "✓" } else { key.as_str() };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {marker}) "),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::styled(
                    text_of(pair).to_string(),
                    entry_style(pair, i, selected, pending_outcome),
                ),
            ]))
        })
        .collect();

    List::new(items).block(Block::default().borders(Borders::ALL).title(title))
}

pub fn render(session: &MatchingSession, f: &mut Frame) {
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let bold_style = Style::default().add_modifier(Modifier::BOLD);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(super::VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(vec![
        Span::raw("Matched: "),
        Span::styled(
            format!("{}", session.matched_count()),
            bold_style.fg(Color::Green),
        ),
        Span::raw(format!(" / {}    Attempts: ", session.total())),
        Span::styled(format!("{}", session.attempts), bold_style),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let pending_outcome = session.pending.map(|p| p.outcome);
    f.render_widget(
        column(
            "English",
            &session.english,
            session.selected_english,
            pending_outcome,
            ENGLISH_KEYS.chars().map(String::from),
            |p| p.word.english.as_str(),
        ),
        columns[0],
    );
    f.render_widget(
        column(
            "Uzbek",
            &session.uzbek,
            session.selected_uzbek,
            pending_outcome,
            (1..).map(|n: u32| n.to_string()),
            |p| p.word.uzbek.as_str(),
        ),
        columns[1],
    );

    let status = match pending_outcome {
        Some(MatchOutcome::Correct) => {
            Span::styled("Correct!", bold_style.fg(Color::Green))
        }
        Some(MatchOutcome::Wrong) => Span::styled("Not a match", bold_style.fg(Color::Red)),
        None if session.selected_english.is_some() => {
            Span::styled("Now pick the Uzbek translation", dim_style)
        }
        None => Span::styled("Pick an English word", dim_style),
    };
    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[2],
    );

    let n = session.total();
    let footer = Paragraph::new(Span::styled(
        format!(
            "(a-{}) pick English | (1-{}) pick Uzbek | (esc) back",
            ENGLISH_KEYS
                .chars()
                .nth(n.saturating_sub(1))
                .unwrap_or('i'),
            n.min(9)
        ),
        dim_style,
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}
