//! Core data models for matricula
//!
//! This module contains the data structures that represent the registration
//! domain: the athlete record under construction and its document attachments.

pub mod athlete;
pub mod attachment;

pub use athlete::{AthleteId, AthleteRecord, Attendance, Modality};
pub use attachment::{Attachment, AttachmentSlot, Attachments};
