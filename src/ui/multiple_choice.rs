use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::games::MultipleChoiceSession;

pub fn render(session: &MultipleChoiceSession, f: &mut Frame) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(super::HORIZONTAL_MARGIN)
        .vertical_margin(super::VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(f.area());

    let total = session.total().max(1);
    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((session.current_index + 1) as f64 / total as f64)
        .label(format!(
            "Question {}/{}  ·  Score: {}",
            session.current_index + 1,
            session.total(),
            session.score
        ));
    f.render_widget(progress, chunks[0]);

    let Some(question) = session.current() else {
        return;
    };

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled("What is the Uzbek translation of", dim_style)),
        Line::from(Span::styled(
            question.word.english.clone(),
            bold_style.fg(Color::Cyan),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(prompt, chunks[1]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if session.revealed {
                if i == question.correct_index {
                    bold_style.fg(Color::Green)
                } else if session.selected == Some(i) {
                    bold_style.fg(Color::Red)
                } else {
                    dim_style
                }
            } else {
                Style::default()
            };
            let marker = if session.revealed && i == question.correct_index {
                "✓"
            } else if session.revealed && session.selected == Some(i) {
                "✗"
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {}) ", i + 1), dim_style),
                Span::styled(option.clone(), style),
                Span::styled(format!(" {marker}"), style),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    let hint = if !session.revealed {
        format!("(1-{}) answer | (esc) back", question.options.len())
    } else if session.current_index + 1 < session.total() {
        "(enter) next question | (esc) back".to_string()
    } else {
        "(enter) see results | (esc) back".to_string()
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, dim_style)).alignment(Alignment::Center),
        chunks[3],
    );
}
