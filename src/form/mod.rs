//! Registration form core
//!
//! The form state machine and validation engine, independent of any rendering
//! surface: field keys, the rule table, the step enum, the controller that
//! owns the record under construction, and the submission seam.

pub mod controller;
pub mod fields;
pub mod step;
pub mod submission;
pub mod validation;

pub use controller::{ErrorMap, FormController, FormError, StepAdvance};
pub use fields::{FieldKey, FieldKind};
pub use step::FormStep;
pub use submission::{DiagnosticSink, Submission, SubmissionSink};
pub use validation::validate_field;
