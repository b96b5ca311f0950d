//! Step indicator strip
//!
//! The `1. Informações Pessoais / 2. Contato e Responsáveis /
//! 3. Documentação e Saúde` header, with the active step highlighted.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::FormStep;
use crate::tui::app::App;

/// Render the step indicator
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.controller.step();

    let mut spans: Vec<Span> = Vec::new();
    for (i, step) in FormStep::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }

        let style = if *step == current {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step.index() < current.index() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(step.to_string(), style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
