//! Layout definitions for the TUI
//!
//! The registration screen stacks the step indicator, the active step panel,
//! and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the registration screen
pub struct AppLayout {
    /// Step indicator strip at the top
    pub steps: Rect,
    /// The active step panel
    pub panel: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Step indicator
                Constraint::Min(10),   // Step panel
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            steps: vertical[0],
            panel: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
