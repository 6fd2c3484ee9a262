use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::games::{GameSummary, Grade};

pub fn render(mode: &str, summary: &GameSummary, attempts: Option<usize>, f: &mut Frame) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let (message, color) = match summary.grade() {
        Grade::Excellent => ("Excellent work! 🎉", Color::Green),
        Grade::KeepPracticing => ("Keep practicing! 💪", Color::Yellow),
    };

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{}%", summary.percentage()),
            bold_style.fg(color),
        )),
        Line::default(),
        Line::from(Span::styled(message, bold_style)),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "You got {} of {} right",
                summary.score, summary.total
            ),
            Style::default(),
        )),
    ];
    if let Some(attempts) = attempts {
        lines.push(Line::from(Span::styled(
            format!("in {attempts} attempts"),
            dim_style,
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(r) play again | (esc) back to menu | (q) quit",
        dim_style,
    )));

    let title = if mode.is_empty() {
        "Results".to_string()
    } else {
        format!("Results · {mode}")
    };
    let height = lines.len() as u16 + 2;
    let area = super::centered_rect(52, height, f.area());
    let card = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .alignment(Alignment::Center);
    f.render_widget(card, area);
}
