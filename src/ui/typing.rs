use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::games::TypingSession;

pub fn render(session: &TypingSession, f: &mut Frame) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(super::HORIZONTAL_MARGIN)
        .vertical_margin(super::VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    let total = session.total().max(1);
    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((session.current_index + 1) as f64 / total as f64)
        .label(format!(
            "Word {}/{}  ·  Score: {}",
            session.current_index + 1,
            session.total(),
            session.score
        ));
    f.render_widget(progress, chunks[0]);

    let Some(word) = session.current() else {
        return;
    };

    let prompt = Paragraph::new(vec![
        Line::from(Span::styled("Type the English word for", dim_style)),
        Line::from(Span::styled(
            word.uzbek.clone(),
            bold_style.fg(Color::Magenta),
        )),
    ])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    f.render_widget(prompt, chunks[1]);

    let input_color = match session.last_correct {
        Some(true) => Color::Green,
        Some(false) => Color::Red,
        None => Color::Cyan,
    };
    let cursor = if session.revealed { "" } else { "▎" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(session.input.clone(), bold_style),
        Span::styled(cursor, dim_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(input_color)),
    );
    f.render_widget(input, chunks[2]);

    if session.revealed {
        let feedback = match session.last_correct {
            Some(true) => vec![Line::from(Span::styled(
                "Correct!",
                bold_style.fg(Color::Green),
            ))],
            _ => {
                let mut lines = vec![Line::from(vec![
                    Span::styled("Wrong. ", bold_style.fg(Color::Red)),
                    Span::styled("The answer is ", dim_style),
                    Span::styled(word.english.clone(), bold_style),
                ])];
                if session.last_lenient == Some(true) {
                    lines.push(Line::from(Span::styled(
                        "close: what you typed is part of the answer",
                        dim_style,
                    )));
                }
                lines
            }
        };
        f.render_widget(
            Paragraph::new(feedback).alignment(Alignment::Center),
            chunks[3],
        );
    }

    let hint = if session.revealed {
        "(enter) next | (esc) back"
    } else {
        "(enter) check | (esc) back"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, dim_style)).alignment(Alignment::Center),
        chunks[4],
    );
}
