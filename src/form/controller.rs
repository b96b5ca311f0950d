//! Form controller
//!
//! Owns the record under construction, the attachment slots, the current
//! step, and the per-field error map. Every mutation goes through an explicit
//! operation so the whole flow is testable without a rendering surface.

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::MessageCatalog;
use crate::models::{Attachment, AttachmentSlot, Attachments, AthleteRecord};

use super::fields::FieldKey;
use super::step::FormStep;
use super::submission::{Submission, SubmissionSink};
use super::validation::{validate_field, DATE_FORMAT};

/// Errors for misuse of the controller API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The field is not text-backed and cannot be written from text input
    #[error("field '{0}' cannot be set from text input")]
    NotTextField(FieldKey),

    /// The field is not date-backed
    #[error("field '{0}' is not a date field")]
    NotDateField(FieldKey),

    /// Submission attempted before the final step was reached and complete
    #[error("submission is only available on the final step with all documents attached")]
    SubmitUnavailable,

    /// The record was already handed to the submission sink
    #[error("the registration was already submitted")]
    AlreadySubmitted,

    /// The submission sink refused the record
    #[error("submission failed: {0}")]
    Sink(String),
}

/// Per-field validation message storage.
///
/// An empty string means the field passed its rule on the last edit; a
/// missing entry means the field was never validated. Entries are only ever
/// overwritten, never cleared.
#[derive(Debug, Clone, Default)]
pub struct ErrorMap {
    entries: HashMap<FieldKey, String>,
}

impl ErrorMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a rule for one field, overwriting any prior entry
    pub fn record(&mut self, field: FieldKey, message: String) {
        self.entries.insert(field, message);
    }

    /// The raw entry for a field, if one was ever recorded
    pub fn entry(&self, field: FieldKey) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// The current error for a field, if any (empty entries are not errors)
    pub fn error(&self, field: FieldKey) -> Option<&str> {
        self.entries
            .get(&field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// True when none of the given fields carries a non-empty error
    pub fn is_clean(&self, fields: &[FieldKey]) -> bool {
        fields.iter().all(|f| self.error(*f).is_none())
    }

    /// Number of fields currently carrying a non-empty error
    pub fn error_count(&self) -> usize {
        self.entries.values().filter(|m| !m.is_empty()).count()
    }
}

/// Outcome of a step-advance request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum StepAdvance {
    /// The step was complete; the controller moved to the given step
    Advanced(FormStep),
    /// The current step is incomplete; a blocking notification should be
    /// raised and nothing changed
    Blocked,
    /// Already on the final step, whose action is submission
    AtFinalStep,
}

/// The registration form state machine
#[derive(Debug, Clone)]
pub struct FormController {
    record: AthleteRecord,
    attachments: Attachments,
    step: FormStep,
    errors: ErrorMap,
    messages: MessageCatalog,
    submitted: bool,
}

impl FormController {
    /// Create a controller for a fresh registration
    pub fn new(messages: MessageCatalog) -> Self {
        Self {
            record: AthleteRecord::new(),
            attachments: Attachments::new(),
            step: FormStep::default(),
            errors: ErrorMap::new(),
            messages,
            submitted: false,
        }
    }

    /// The record under construction
    pub fn record(&self) -> &AthleteRecord {
        &self.record
    }

    /// The attachment slots
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    /// The current step
    pub fn step(&self) -> FormStep {
        self.step
    }

    /// The per-field error map
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The message catalog in use
    pub fn messages(&self) -> &MessageCatalog {
        &self.messages
    }

    /// Whether the record was already handed to a sink
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Write raw text into a field and re-validate that field only.
    ///
    /// Every keystroke funnels through here; the error map entry for `field`
    /// is overwritten on each call and no other entry is touched.
    pub fn set_field(&mut self, field: FieldKey, value: &str) -> Result<(), FormError> {
        if !field.write_text(&mut self.record, value) {
            return Err(FormError::NotTextField(field));
        }

        let message = validate_field(field, value, &self.messages);
        self.errors.record(field, message);
        Ok(())
    }

    /// Parse raw text as a date and write the result unconditionally.
    ///
    /// Unparseable input clears the date and surfaces no error; the original
    /// flow swallows date-parse failures and this preserves that behavior.
    pub fn set_date_field(&mut self, field: FieldKey, raw: &str) -> Result<(), FormError> {
        if field != FieldKey::BirthDate {
            return Err(FormError::NotDateField(field));
        }

        self.record.birth_date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok();
        Ok(())
    }

    /// Assign or clear one of the three attachment slots.
    ///
    /// Presence is the only thing ever checked; no error map entry exists for
    /// attachments.
    pub fn set_attachment(&mut self, slot: AttachmentSlot, attachment: Option<Attachment>) {
        self.attachments.set(slot, attachment);
    }

    /// Step-completion predicate, recomputed on demand.
    pub fn is_step_complete(&self, step: FormStep) -> bool {
        match step {
            FormStep::PersonalInfo => {
                !self.record.name.is_empty()
                    && self.record.cpf.chars().count() == 11
                    && !self.record.rg.is_empty()
                    && self.record.birth_date.is_some()
            }
            FormStep::ContactGuardians => {
                !self.record.phone_number.is_empty()
                    && !self.record.email.is_empty()
                    && !self.record.responsible_name.is_empty()
                    && !self.record.responsible_email.is_empty()
            }
            FormStep::DocumentsHealth => self.attachments.is_complete(),
        }
    }

    /// Whether the advance/submit control should be enabled right now.
    ///
    /// Steps 1 and 2 additionally require their gated fields to be free of
    /// errors; the documents step gates on attachment presence alone.
    pub fn can_advance(&self) -> bool {
        self.is_step_complete(self.step) && self.errors.is_clean(self.step.gated_fields())
    }

    /// Try to move to the next step.
    pub fn advance_step(&mut self) -> StepAdvance {
        if !self.is_step_complete(self.step) {
            return StepAdvance::Blocked;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                StepAdvance::Advanced(next)
            }
            None => StepAdvance::AtFinalStep,
        }
    }

    /// Assemble the finished record and hand it to the sink.
    ///
    /// Available exactly once, on the final step, with all three attachments
    /// present. No field re-validation happens here; step gating already did.
    pub fn submit(&mut self, sink: &mut dyn SubmissionSink) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        if !self.step.is_final() || !self.is_step_complete(self.step) {
            return Err(FormError::SubmitUnavailable);
        }

        let submission = Submission {
            record: self.record.clone(),
            attachments: self.attachments.clone(),
        };
        sink.deliver(&submission)
            .map_err(|e| FormError::Sink(e.to_string()))?;

        self.submitted = true;
        Ok(())
    }
}
