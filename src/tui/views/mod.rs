//! TUI views module
//!
//! The registration screen: step indicator strip, the active step panel (or
//! the post-submission summary), the status bar, and the alert overlay.

pub mod form_panel;
pub mod status_bar;
pub mod steps;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::Alert;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    steps::render(frame, app, layout.steps);

    if app.controller.is_submitted() {
        summary::render(frame, app, layout.panel);
    } else {
        form_panel::render(frame, app, layout.panel);
    }

    status_bar::render(frame, app, layout.status_bar);

    if let ActiveDialog::Alert(ref message) = app.active_dialog {
        let width = 60u16.min(frame.area().width.saturating_sub(4)).max(20);
        let height = Alert::height_for(message, width);
        let area = centered_rect_fixed(width, height, frame.area());
        frame.render_widget(Alert::new(message), area);
    }
}
