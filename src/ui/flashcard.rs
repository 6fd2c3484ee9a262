use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::games::FlashcardSession;

pub fn render(session: &FlashcardSession, f: &mut Frame) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(super::VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(2),
        ])
        .split(f.area());

    let position = Paragraph::new(Span::styled(
        format!("{} / {}", session.current_index + 1, session.total()),
        dim_style,
    ))
    .alignment(Alignment::Center);
    f.render_widget(position, chunks[0]);

    if let Some(word) = session.current() {
        let (face, text, color) = if session.is_flipped {
            ("Uzbek", word.uzbek.as_str(), Color::Magenta)
        } else {
            ("English", word.english.as_str(), Color::Cyan)
        };

        // Card sized to its word so short and long entries both look like a card.
        let card_width = (text.width() as u16 + 10).max(30);
        let card_area = super::centered_rect(card_width, 7, chunks[1]);
        let card = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(text, bold_style.fg(color))),
            Line::default(),
            Line::from(Span::styled("press space to flip", dim_style)),
        ])
        .block(Block::default().borders(Borders::ALL).title(face))
        .alignment(Alignment::Center);
        f.render_widget(card, card_area);
    }

    let footer = Paragraph::new(Span::styled(
        "(space) flip | (←/→) prev/next | (esc) back",
        dim_style,
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}
