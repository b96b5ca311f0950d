//! Field table for the registration form
//!
//! `FieldKey` names the 21 record keys the form knows about. Everything the
//! rendering surface and the rule table need to know about a field — wire
//! name, display label, required marker, which step it belongs to, how it is
//! backed — lives here, so panels and validators stay data-driven.

use std::fmt;

use crate::models::AthleteRecord;

use super::step::FormStep;

/// How a field is backed on the record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, written through `set_field`
    Text,
    /// A date, written through `set_date_field`
    Date,
    /// An opaque collection the form never writes
    Collection,
}

/// The known keys of the registration record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Cpf,
    Rg,
    Address,
    FatherName,
    MotherName,
    BirthDate,
    PhoneNumber,
    Attendances,
    Modalities,
    Password,
    Email,
    ResponsibleName,
    ResponsibleEmail,
    MotherPhoneNumber,
    FatherPhoneNumber,
    BloodType,
    FrontIdPhotoUrl,
    BackIdPhotoUrl,
    AthletePhotoUrl,
    FoodAllergies,
}

impl FieldKey {
    /// Every known field key
    pub const ALL: [FieldKey; 21] = [
        Self::Name,
        Self::Cpf,
        Self::Rg,
        Self::Address,
        Self::FatherName,
        Self::MotherName,
        Self::BirthDate,
        Self::PhoneNumber,
        Self::Attendances,
        Self::Modalities,
        Self::Password,
        Self::Email,
        Self::ResponsibleName,
        Self::ResponsibleEmail,
        Self::MotherPhoneNumber,
        Self::FatherPhoneNumber,
        Self::BloodType,
        Self::FrontIdPhotoUrl,
        Self::BackIdPhotoUrl,
        Self::AthletePhotoUrl,
        Self::FoodAllergies,
    ];

    /// Wire name, matching the record's serialized field names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::Rg => "rg",
            Self::Address => "address",
            Self::FatherName => "fatherName",
            Self::MotherName => "motherName",
            Self::BirthDate => "birthDate",
            Self::PhoneNumber => "phoneNumber",
            Self::Attendances => "attendances",
            Self::Modalities => "modalities",
            Self::Password => "password",
            Self::Email => "email",
            Self::ResponsibleName => "responsibleName",
            Self::ResponsibleEmail => "responsibleEmail",
            Self::MotherPhoneNumber => "motherPhoneNumber",
            Self::FatherPhoneNumber => "fatherPhoneNumber",
            Self::BloodType => "bloodType",
            Self::FrontIdPhotoUrl => "frontIdPhotoUrl",
            Self::BackIdPhotoUrl => "backIdPhotoUrl",
            Self::AthletePhotoUrl => "athletePhotoUrl",
            Self::FoodAllergies => "foodAllergies",
        }
    }

    /// Parse a wire name back into a key
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Cpf => "CPF",
            Self::Rg => "RG",
            Self::Address => "Endereço",
            Self::FatherName => "Nome do Pai",
            Self::MotherName => "Nome da Mãe",
            Self::BirthDate => "Data de Nascimento",
            Self::PhoneNumber => "Telefone",
            Self::Attendances => "Presenças",
            Self::Modalities => "Modalidades",
            Self::Password => "Senha",
            Self::Email => "Email",
            Self::ResponsibleName => "Nome do Responsável",
            Self::ResponsibleEmail => "Email do Responsável",
            Self::MotherPhoneNumber => "Telefone da Mãe",
            Self::FatherPhoneNumber => "Telefone do Pai",
            Self::BloodType => "Tipo Sanguíneo",
            Self::FrontIdPhotoUrl => "URL da Foto do Documento Frente",
            Self::BackIdPhotoUrl => "URL da Foto do Documento Verso",
            Self::AthletePhotoUrl => "URL da Foto do Atleta",
            Self::FoodAllergies => "Alergias Alimentares",
        }
    }

    /// How the field is backed on the record
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::BirthDate => FieldKind::Date,
            Self::Attendances | Self::Modalities => FieldKind::Collection,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field carries a required marker on its panel
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Cpf
                | Self::Rg
                | Self::BirthDate
                | Self::PhoneNumber
                | Self::Email
                | Self::ResponsibleName
                | Self::ResponsibleEmail
                | Self::MotherPhoneNumber
                | Self::FatherPhoneNumber
        )
    }

    /// The step whose panel renders this field, if any
    pub fn step(&self) -> Option<FormStep> {
        match self {
            Self::Name | Self::Cpf | Self::Rg | Self::BirthDate | Self::Address | Self::Password => {
                Some(FormStep::PersonalInfo)
            }
            Self::PhoneNumber
            | Self::Email
            | Self::ResponsibleName
            | Self::ResponsibleEmail
            | Self::MotherName
            | Self::MotherPhoneNumber
            | Self::FatherName
            | Self::FatherPhoneNumber => Some(FormStep::ContactGuardians),
            Self::BloodType | Self::FoodAllergies => Some(FormStep::DocumentsHealth),
            Self::Attendances
            | Self::Modalities
            | Self::FrontIdPhotoUrl
            | Self::BackIdPhotoUrl
            | Self::AthletePhotoUrl => None,
        }
    }

    /// Read the field's text value off the record; None for non-text fields
    pub fn text_of<'a>(&self, record: &'a AthleteRecord) -> Option<&'a str> {
        let value = match self {
            Self::Name => &record.name,
            Self::Cpf => &record.cpf,
            Self::Rg => &record.rg,
            Self::Address => &record.address,
            Self::FatherName => &record.father_name,
            Self::MotherName => &record.mother_name,
            Self::PhoneNumber => &record.phone_number,
            Self::Password => &record.password,
            Self::Email => &record.email,
            Self::ResponsibleName => &record.responsible_name,
            Self::ResponsibleEmail => &record.responsible_email,
            Self::MotherPhoneNumber => &record.mother_phone_number,
            Self::FatherPhoneNumber => &record.father_phone_number,
            Self::BloodType => &record.blood_type,
            Self::FrontIdPhotoUrl => &record.front_id_photo_url,
            Self::BackIdPhotoUrl => &record.back_id_photo_url,
            Self::AthletePhotoUrl => &record.athlete_photo_url,
            Self::FoodAllergies => &record.food_allergies,
            Self::BirthDate | Self::Attendances | Self::Modalities => return None,
        };
        Some(value.as_str())
    }

    /// Write a text value onto the record; false for non-text fields
    pub fn write_text(&self, record: &mut AthleteRecord, value: &str) -> bool {
        let target = match self {
            Self::Name => &mut record.name,
            Self::Cpf => &mut record.cpf,
            Self::Rg => &mut record.rg,
            Self::Address => &mut record.address,
            Self::FatherName => &mut record.father_name,
            Self::MotherName => &mut record.mother_name,
            Self::PhoneNumber => &mut record.phone_number,
            Self::Password => &mut record.password,
            Self::Email => &mut record.email,
            Self::ResponsibleName => &mut record.responsible_name,
            Self::ResponsibleEmail => &mut record.responsible_email,
            Self::MotherPhoneNumber => &mut record.mother_phone_number,
            Self::FatherPhoneNumber => &mut record.father_phone_number,
            Self::BloodType => &mut record.blood_type,
            Self::FrontIdPhotoUrl => &mut record.front_id_photo_url,
            Self::BackIdPhotoUrl => &mut record.back_id_photo_url,
            Self::AthletePhotoUrl => &mut record.athlete_photo_url,
            Self::FoodAllergies => &mut record.food_allergies,
            Self::BirthDate | Self::Attendances | Self::Modalities => return false,
        };
        *target = value.to_string();
        true
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(FieldKey::parse("shoeSize"), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(FieldKey::BirthDate.kind(), FieldKind::Date);
        assert_eq!(FieldKey::Attendances.kind(), FieldKind::Collection);
        assert_eq!(FieldKey::Cpf.kind(), FieldKind::Text);
    }

    #[test]
    fn test_step_placement() {
        assert_eq!(FieldKey::Cpf.step(), Some(FormStep::PersonalInfo));
        assert_eq!(
            FieldKey::ResponsibleEmail.step(),
            Some(FormStep::ContactGuardians)
        );
        assert_eq!(FieldKey::FoodAllergies.step(), Some(FormStep::DocumentsHealth));
        assert_eq!(FieldKey::Attendances.step(), None);
        assert_eq!(FieldKey::FrontIdPhotoUrl.step(), None);
    }

    #[test]
    fn test_text_access() {
        let mut record = AthleteRecord::new();
        assert!(FieldKey::Cpf.write_text(&mut record, "12345678901"));
        assert_eq!(record.cpf, "12345678901");
        assert_eq!(FieldKey::Cpf.text_of(&record), Some("12345678901"));

        assert!(!FieldKey::BirthDate.write_text(&mut record, "2010-01-01"));
        assert!(FieldKey::BirthDate.text_of(&record).is_none());
        assert!(!FieldKey::Modalities.write_text(&mut record, "nope"));
    }

    #[test]
    fn test_required_markers() {
        assert!(FieldKey::Name.is_required());
        assert!(FieldKey::MotherPhoneNumber.is_required());
        assert!(!FieldKey::Address.is_required());
        assert!(!FieldKey::BloodType.is_required());
    }
}
