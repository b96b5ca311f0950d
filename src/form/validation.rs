//! Field validation rules
//!
//! The rule table of the registration form: one rule per field key, applied
//! on every edit. A rule produces either an empty string (valid) or a message
//! from the catalog. Fields without a rule always pass.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::MessageCatalog;

use super::fields::FieldKey;

lazy_static! {
    static ref CPF_RE: Regex = Regex::new(r"^\d{11}$").unwrap();
    static ref RG_RE: Regex = Regex::new(r"^\d+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\d{10,11}$").unwrap();
}

/// Date format accepted by the birth-date input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Apply the rule for `field` to `value`.
///
/// Returns the empty string when the value passes, or the catalog message for
/// the violated rule. Fields with no rule always return the empty string.
pub fn validate_field(field: FieldKey, value: &str, messages: &MessageCatalog) -> String {
    match field {
        FieldKey::Name => {
            if value.trim().is_empty() {
                messages.name_required.clone()
            } else {
                String::new()
            }
        }
        FieldKey::Cpf => {
            if !CPF_RE.is_match(value) {
                messages.cpf_length.clone()
            } else {
                String::new()
            }
        }
        FieldKey::Rg => {
            if !RG_RE.is_match(value) || value.trim().is_empty() {
                messages.rg_digits.clone()
            } else {
                String::new()
            }
        }
        FieldKey::Email => {
            if !EMAIL_RE.is_match(value) {
                messages.email_invalid.clone()
            } else {
                String::new()
            }
        }
        FieldKey::PhoneNumber => {
            if !PHONE_RE.is_match(value) {
                messages.phone_length.clone()
            } else {
                String::new()
            }
        }
        FieldKey::Password => {
            if value.chars().count() < 8 {
                messages.password_min.clone()
            } else {
                String::new()
            }
        }
        FieldKey::BirthDate => validate_birth_date(value, Local::now().date_naive(), messages),
        FieldKey::ResponsibleName => {
            if value.trim().is_empty() {
                messages.responsible_name_required.clone()
            } else {
                String::new()
            }
        }
        FieldKey::ResponsibleEmail => {
            if !EMAIL_RE.is_match(value) {
                messages.responsible_email_invalid.clone()
            } else {
                String::new()
            }
        }
        FieldKey::MotherPhoneNumber => {
            if !PHONE_RE.is_match(value) {
                messages.mother_phone_length.clone()
            } else {
                String::new()
            }
        }
        FieldKey::FatherPhoneNumber => {
            if !PHONE_RE.is_match(value) {
                messages.father_phone_length.clone()
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

/// Birth-date rule against a reference "today".
///
/// An unparseable value passes: the date-change path never surfaces parse
/// errors, and the rule mirrors that. A pre-1900 date wins over the future
/// check.
fn validate_birth_date(value: &str, today: NaiveDate, messages: &MessageCatalog) -> String {
    let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return String::new();
    };

    let mut error = String::new();
    if date > today {
        error = messages.birth_date_future.clone();
    }
    if date.year() < 1900 {
        error = messages.birth_date_min.clone();
    }
    error
}
