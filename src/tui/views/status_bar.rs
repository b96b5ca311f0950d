//! Status bar view
//!
//! Shows the current step, outstanding validation problems, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let step = app.controller.step();

    let mut spans = vec![
        Span::styled(" Etapa ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}/3", step.index()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(step.short_title(), Style::default().fg(Color::Cyan)),
    ];

    let error_count = app.controller.errors().error_count();
    if error_count > 0 {
        spans.push(Span::raw(" │ "));
        let noun = if error_count == 1 {
            "campo inválido"
        } else {
            "campos inválidos"
        };
        spans.push(Span::styled(
            format!("{} {}", error_count, noun),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " Tab:Campo  Enter:Avançar  Esc:Sair ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints_len);
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
