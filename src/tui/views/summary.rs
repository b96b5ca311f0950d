//! Post-submission summary
//!
//! Shown once the registration has been handed to the sink: the key fields of
//! the record and the attached documents.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::validation::DATE_FORMAT;
use crate::models::AttachmentSlot;
use crate::tui::app::App;

/// Render the summary screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let record = app.controller.record();

    let block = Block::default()
        .title(" Inscrição Concluída ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let birth_date = record
        .birth_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    let mut lines = vec![
        Line::from(""),
        field_line("Nome", &record.name),
        field_line("CPF", &record.cpf),
        field_line("RG", &record.rg),
        field_line("Data de Nascimento", &birth_date),
        field_line("Telefone", &record.phone_number),
        field_line("Email", &record.email),
        field_line("Responsável", &record.responsible_name),
        field_line("Email do Responsável", &record.responsible_email),
        Line::from(""),
    ];

    for slot in AttachmentSlot::ALL {
        if let Some(attachment) = app.controller.attachments().get(slot) {
            lines.push(field_line(slot.label(), &attachment.file_name()));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Sair"),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ])
}
