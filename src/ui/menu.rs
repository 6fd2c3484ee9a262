use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::vocabulary::Unit;

pub fn render(unit: &Unit, f: &mut Frame) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(super::VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} · {} words", unit.title, unit.words.len()),
            bold_style.fg(Color::Cyan),
        )),
        Line::from(Span::styled("pick a game", dim_style)),
    ])
    .block(Block::default().borders(Borders::ALL).title("lugat"))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = [
        ("1", "Flashcards", "flip through the cards"),
        ("2", "Matching", "pair English words with translations"),
        ("3", "Multiple choice", "pick the right translation"),
        ("4", "Typing", "type the English term"),
    ]
    .iter()
    .map(|(key, name, hint)| {
        ListItem::new(Line::from(vec![
            Span::styled(format!("  {key}  "), bold_style.fg(Color::Yellow)),
            Span::styled(format!("{name:<18}"), bold_style),
            Span::styled(*hint, dim_style),
        ]))
    })
    .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    f.render_widget(list, chunks[1]);

    let footer = Paragraph::new(Span::styled("(1-4) choose | (esc) quit", dim_style))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}
