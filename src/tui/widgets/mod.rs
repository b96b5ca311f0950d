//! Reusable TUI widgets

pub mod alert;
pub mod input;

pub use alert::Alert;
pub use input::TextInput;
