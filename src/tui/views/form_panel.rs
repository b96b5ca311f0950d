//! Step panel
//!
//! Renders the inputs of the step on screen: label with required marker,
//! value with cursor, and the inline validation message under each field.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::form::{FormInput, InputTarget};

/// Width of the label column, in characters
const LABEL_WIDTH: usize = 26;

/// Render the active step panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let step = app.controller.step();

    let block = Block::default()
        .title(format!(" {} ", step.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = vec![Line::from("")];
    for form_input in app.form.inputs() {
        lines.push(input_line(form_input));
        lines.push(detail_line(app, form_input));
    }

    lines.push(Line::from(""));
    lines.push(hint_line(app));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One input: padded label, required marker, value with cursor
fn input_line(form_input: &FormInput) -> Line<'static> {
    let input = &form_input.input;

    let pad = LABEL_WIDTH.saturating_sub(input.label.chars().count());
    let mut spans = vec![
        Span::raw(" ".repeat(pad + 1)),
        Span::styled(
            input.label.clone(),
            if input.focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            },
        ),
        Span::styled(
            if input.required { " *" } else { "  " },
            Style::default().fg(Color::Red),
        ),
        Span::raw(": "),
    ];

    let value_style = Style::default().fg(if input.focused {
        Color::White
    } else {
        Color::Yellow
    });

    if input.focused {
        let (before, at, after) = input.split_at_cursor();
        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            at.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else if input.content.is_empty() {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(input.content.clone(), value_style));
    }

    Line::from(spans)
}

/// The line under an input: validation message or attachment state
fn detail_line(app: &App, form_input: &FormInput) -> Line<'static> {
    let indent = " ".repeat(LABEL_WIDTH + 5);

    match form_input.target {
        InputTarget::Text(field) => {
            if let Some(error) = app.controller.errors().error(field) {
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(error.to_string(), Style::default().fg(Color::Red)),
                ])
            } else {
                Line::from("")
            }
        }
        // Date-parse failures are swallowed upstream; nothing to show
        InputTarget::Date(_) => Line::from(""),
        InputTarget::Attachment(slot) => {
            if let Some(attachment) = app.controller.attachments().get(slot) {
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(
                        format!("anexado: {}", attachment.file_name()),
                        Style::default().fg(Color::Green),
                    ),
                ])
            } else {
                Line::from("")
            }
        }
    }
}

/// Key hints, with the advance action dimmed while unavailable
fn hint_line(app: &App) -> Line<'static> {
    let advance_label = if app.controller.step().is_final() {
        "[Enter] Enviar"
    } else {
        "[Enter] Próximo"
    };
    let advance_style = if app.controller.can_advance() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Próximo campo  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Campo anterior  "),
        Span::styled(advance_label, advance_style),
        Span::raw("  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Sair"),
    ])
}
