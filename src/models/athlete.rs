//! Athlete record model
//!
//! The in-progress registration record collected across the three form steps.
//! Every field is free-form text until the validation rules flag it; nothing
//! is enforced on write.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an athlete registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AthleteId(Uuid);

impl AthleteId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AthleteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AthleteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atl-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for AthleteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("atl-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Attendance entry carried on the record.
///
/// Populated by the club system after enrollment; the form carries the
/// collection through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {}

/// Modality membership carried on the record.
///
/// Populated by the club system after enrollment; the form carries the
/// collection through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modality {}

/// The registration record under construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
    /// Unique identifier
    #[serde(default)]
    pub id: AthleteId,

    /// Athlete's full name
    #[serde(default)]
    pub name: String,

    /// CPF (Brazilian individual taxpayer number), digits only
    #[serde(default)]
    pub cpf: String,

    /// RG (identity card number), digits only
    #[serde(default)]
    pub rg: String,

    /// Street address
    #[serde(default)]
    pub address: String,

    /// Father's full name
    #[serde(default)]
    pub father_name: String,

    /// Mother's full name
    #[serde(default)]
    pub mother_name: String,

    /// Date of birth; unset until the user enters a parseable date
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,

    /// Athlete's phone number, digits only
    #[serde(default)]
    pub phone_number: String,

    /// Attendance history, opaque to the form
    #[serde(default)]
    pub attendances: Vec<Attendance>,

    /// Modality memberships, opaque to the form
    #[serde(default)]
    pub modalities: Vec<Modality>,

    /// Account password
    #[serde(default)]
    pub password: String,

    /// Athlete's email address
    #[serde(default)]
    pub email: String,

    /// Legal guardian's full name
    #[serde(default)]
    pub responsible_name: String,

    /// Legal guardian's email address
    #[serde(default)]
    pub responsible_email: String,

    /// Mother's phone number, digits only
    #[serde(default)]
    pub mother_phone_number: String,

    /// Father's phone number, digits only
    #[serde(default)]
    pub father_phone_number: String,

    /// Blood type (free text, e.g. "O+")
    #[serde(default)]
    pub blood_type: String,

    /// Placeholder URL for the front of the ID document
    #[serde(default)]
    pub front_id_photo_url: String,

    /// Placeholder URL for the back of the ID document
    #[serde(default)]
    pub back_id_photo_url: String,

    /// Placeholder URL for the athlete portrait
    #[serde(default)]
    pub athlete_photo_url: String,

    /// Known food allergies (free text)
    #[serde(default)]
    pub food_allergies: String,
}

impl AthleteRecord {
    /// Create an empty record with a fresh ID
    pub fn new() -> Self {
        Self {
            id: AthleteId::new(),
            name: String::new(),
            cpf: String::new(),
            rg: String::new(),
            address: String::new(),
            father_name: String::new(),
            mother_name: String::new(),
            birth_date: None,
            phone_number: String::new(),
            attendances: Vec::new(),
            modalities: Vec::new(),
            password: String::new(),
            email: String::new(),
            responsible_name: String::new(),
            responsible_email: String::new(),
            mother_phone_number: String::new(),
            father_phone_number: String::new(),
            blood_type: String::new(),
            front_id_photo_url: String::new(),
            back_id_photo_url: String::new(),
            athlete_photo_url: String::new(),
            food_allergies: String::new(),
        }
    }
}

impl Default for AthleteRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AthleteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} ({})", self.name, self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = AthleteRecord::new();
        assert!(record.name.is_empty());
        assert!(record.cpf.is_empty());
        assert!(record.birth_date.is_none());
        assert!(record.attendances.is_empty());
        assert!(record.modalities.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(AthleteId::new(), AthleteId::new());
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = AthleteId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("atl-"));

        let full = id.as_uuid().to_string();
        let parsed: AthleteId = full.parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let mut record = AthleteRecord::new();
        record.responsible_email = "tutor@clube.com.br".into();
        record.birth_date = NaiveDate::from_ymd_opt(2010, 3, 14);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"responsibleEmail\""));
        assert!(json.contains("\"birthDate\""));
        assert!(json.contains("\"foodAllergies\""));

        let back: AthleteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.responsible_email, record.responsible_email);
        assert_eq!(back.birth_date, record.birth_date);
    }

    #[test]
    fn test_deserialize_partial_record() {
        // A check file only needs the fields it wants to exercise.
        let record: AthleteRecord =
            serde_json::from_str(r#"{"name": "Ana", "cpf": "12345678901"}"#).unwrap();
        assert_eq!(record.name, "Ana");
        assert_eq!(record.cpf, "12345678901");
        assert!(record.rg.is_empty());
    }

    #[test]
    fn test_display() {
        let mut record = AthleteRecord::new();
        assert!(format!("{}", record).starts_with("atl-"));
        record.name = "Ana Souza".into();
        assert!(format!("{}", record).starts_with("Ana Souza (atl-"));
    }
}
