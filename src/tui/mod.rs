//! Terminal User Interface module
//!
//! The interactive registration flow, built with ratatui: three step panels
//! bound to the form controller, a step indicator, inline validation
//! messages, and the blocking alert raised on a refused advance.

pub mod app;
pub mod event;
pub mod form;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
