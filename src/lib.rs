//! matricula - Terminal-based athlete registration for sports clubs
//!
//! This library implements the three-step athlete registration flow: personal
//! information, contact and guardians, documents and health. Field-level
//! validation runs on every edit; step progression is gated by per-step
//! completion predicates; a completed registration is handed to a pluggable
//! submission sink.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths, and the validation message catalog
//! - `error`: Custom error types
//! - `models`: The athlete record and its document attachments
//! - `form`: The form state machine and validation engine (no UI dependency)
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive registration interface

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod tui;

pub use error::{MatriculaError, MatriculaResult};
