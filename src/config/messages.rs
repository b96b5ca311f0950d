//! Validation message catalog
//!
//! All user-facing validation and notification texts live in one serde-enabled
//! table so deployments can override the wording (or the language) from the
//! settings file. The defaults are the Portuguese strings the club uses.

use serde::{Deserialize, Serialize};

/// The configurable message table consulted by the validation rules and the
/// step-advance guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Shown when the athlete name is blank
    #[serde(default = "default_name_required")]
    pub name_required: String,

    /// Shown when the CPF is not exactly 11 digits
    #[serde(default = "default_cpf_length")]
    pub cpf_length: String,

    /// Shown when the RG contains anything but digits
    #[serde(default = "default_rg_digits")]
    pub rg_digits: String,

    /// Shown when the athlete email does not match the expected shape
    #[serde(default = "default_email_invalid")]
    pub email_invalid: String,

    /// Shown when the athlete phone number has the wrong digit count
    #[serde(default = "default_phone_length")]
    pub phone_length: String,

    /// Shown when the password is shorter than 8 characters
    #[serde(default = "default_password_min")]
    pub password_min: String,

    /// Shown when the birth date lies in the future
    #[serde(default = "default_birth_date_future")]
    pub birth_date_future: String,

    /// Shown when the birth date is before 1900
    #[serde(default = "default_birth_date_min")]
    pub birth_date_min: String,

    /// Shown when the guardian name is blank
    #[serde(default = "default_responsible_name_required")]
    pub responsible_name_required: String,

    /// Shown when the guardian email does not match the expected shape
    #[serde(default = "default_responsible_email_invalid")]
    pub responsible_email_invalid: String,

    /// Shown when the mother's phone number has the wrong digit count
    #[serde(default = "default_mother_phone_length")]
    pub mother_phone_length: String,

    /// Shown when the father's phone number has the wrong digit count
    #[serde(default = "default_father_phone_length")]
    pub father_phone_length: String,

    /// Blocking notification raised when the user tries to advance with an
    /// incomplete step
    #[serde(default = "default_step_incomplete")]
    pub step_incomplete: String,

    /// Status line shown once the registration has been handed off
    #[serde(default = "default_submitted")]
    pub submitted: String,
}

fn default_name_required() -> String {
    "Nome é obrigatório.".to_string()
}

fn default_cpf_length() -> String {
    "CPF deve ter exatamente 11 dígitos.".to_string()
}

fn default_rg_digits() -> String {
    "RG deve conter apenas números.".to_string()
}

fn default_email_invalid() -> String {
    "Email inválido.".to_string()
}

fn default_phone_length() -> String {
    "Telefone deve ter entre 10 e 11 dígitos.".to_string()
}

fn default_password_min() -> String {
    "Senha deve ter pelo menos 8 caracteres.".to_string()
}

fn default_birth_date_future() -> String {
    "Data de nascimento não pode ser no futuro.".to_string()
}

fn default_birth_date_min() -> String {
    "Data de nascimento não pode ser anterior a 1900.".to_string()
}

fn default_responsible_name_required() -> String {
    "Nome do responsável é obrigatório.".to_string()
}

fn default_responsible_email_invalid() -> String {
    "Email do responsável inválido.".to_string()
}

fn default_mother_phone_length() -> String {
    "Telefone da mãe deve ter entre 10 e 11 dígitos.".to_string()
}

fn default_father_phone_length() -> String {
    "Telefone do pai deve ter entre 10 e 11 dígitos.".to_string()
}

fn default_step_incomplete() -> String {
    "Por favor, preencha todos os campos obrigatórios corretamente antes de prosseguir."
        .to_string()
}

fn default_submitted() -> String {
    "Inscrição enviada com sucesso.".to_string()
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            name_required: default_name_required(),
            cpf_length: default_cpf_length(),
            rg_digits: default_rg_digits(),
            email_invalid: default_email_invalid(),
            phone_length: default_phone_length(),
            password_min: default_password_min(),
            birth_date_future: default_birth_date_future(),
            birth_date_min: default_birth_date_min(),
            responsible_name_required: default_responsible_name_required(),
            responsible_email_invalid: default_responsible_email_invalid(),
            mother_phone_length: default_mother_phone_length(),
            father_phone_length: default_father_phone_length(),
            step_incomplete: default_step_incomplete(),
            submitted: default_submitted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.cpf_length, "CPF deve ter exatamente 11 dígitos.");
        assert_eq!(catalog.email_invalid, "Email inválido.");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        // A settings file overriding one message must not blank the rest.
        let catalog: MessageCatalog =
            serde_json::from_str(r#"{"email_invalid": "E-mail malformado."}"#).unwrap();
        assert_eq!(catalog.email_invalid, "E-mail malformado.");
        assert_eq!(catalog.name_required, "Nome é obrigatório.");
    }

    #[test]
    fn test_round_trip() {
        let catalog = MessageCatalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: MessageCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
