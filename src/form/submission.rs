//! Submission seam
//!
//! The controller hands the finished registration to a `SubmissionSink`.
//! Whatever system eventually persists or transmits records plugs in here;
//! the default sink logs the assembled record so operators can see exactly
//! what would have been sent.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{MatriculaError, MatriculaResult};
use crate::models::{AttachmentSlot, Attachments, AthleteRecord};

/// A completed registration: the record plus its three documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// The fully populated record
    pub record: AthleteRecord,
    /// The three attached documents
    pub attachments: Attachments,
}

/// Receives completed registrations.
///
/// Contract: called exactly once per registration, only after every step has
/// passed its gating, with a fully populated record.
pub trait SubmissionSink {
    /// Take ownership of the completed registration
    fn deliver(&mut self, submission: &Submission) -> MatriculaResult<()>;
}

/// Default sink: logs the assembled record as pretty JSON
#[derive(Debug, Default, Clone)]
pub struct DiagnosticSink;

impl DiagnosticSink {
    /// Create a new diagnostic sink
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for DiagnosticSink {
    fn deliver(&mut self, submission: &Submission) -> MatriculaResult<()> {
        let json = serde_json::to_string_pretty(&submission.record)
            .map_err(|e| MatriculaError::Json(e.to_string()))?;

        info!(athlete = %submission.record, "registration assembled:\n{}", json);
        for slot in AttachmentSlot::ALL {
            if let Some(attachment) = submission.attachments.get(slot) {
                info!("  {}: {}", slot.label(), attachment.path().display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attachment;

    #[test]
    fn test_diagnostic_sink_accepts_a_submission() {
        let mut attachments = Attachments::new();
        for slot in AttachmentSlot::ALL {
            attachments.set(slot, Some(Attachment::new("/docs/arquivo.jpg")));
        }

        let submission = Submission {
            record: AthleteRecord::new(),
            attachments,
        };

        let mut sink = DiagnosticSink::new();
        assert!(sink.deliver(&submission).is_ok());
    }

    #[test]
    fn test_submission_serializes() {
        let submission = Submission {
            record: AthleteRecord::new(),
            attachments: Attachments::new(),
        };
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"record\""));
        assert!(json.contains("\"attachments\""));
    }
}
