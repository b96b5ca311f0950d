//! Blocking alert dialog
//!
//! Modal notification raised when the user tries to advance with an
//! incomplete step. Input is captured until the alert is dismissed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// A blocking modal alert
pub struct Alert<'a> {
    message: &'a str,
}

impl<'a> Alert<'a> {
    /// Create an alert with the given message
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Height needed to show `message` inside a `width`-wide dialog
    pub fn height_for(message: &str, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        let lines = message.chars().count().div_ceil(inner).max(1) as u16;
        // borders + padding + message + padding + hint
        lines + 5
    }
}

impl<'a> Widget for Alert<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Atenção ")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Green)),
                Span::raw(" OK"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_grows_with_message() {
        let short = Alert::height_for("curto", 50);
        let long = Alert::height_for(&"palavra ".repeat(30), 50);
        assert!(long > short);
    }

    #[test]
    fn test_minimum_height() {
        assert!(Alert::height_for("", 50) >= 6);
    }
}
