//! Form steps
//!
//! The three screens of the registration flow as a proper enum, so an
//! out-of-range step is unrepresentable. The flow only ever moves forward;
//! the final step ends in submission, not another transition.

use std::fmt;

use super::fields::FieldKey;

/// The three sequential screens of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormStep {
    /// Screen 1: identity
    #[default]
    PersonalInfo,
    /// Screen 2: contact and guardians
    ContactGuardians,
    /// Screen 3: documents and health
    DocumentsHealth,
}

impl FormStep {
    /// All steps in order
    pub const ALL: [FormStep; 3] = [
        Self::PersonalInfo,
        Self::ContactGuardians,
        Self::DocumentsHealth,
    ];

    /// 1-based position, as shown in the step indicator
    pub fn index(&self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::ContactGuardians => 2,
            Self::DocumentsHealth => 3,
        }
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Informações Pessoais",
            Self::ContactGuardians => "Informações de Contato e Responsáveis",
            Self::DocumentsHealth => "Documentação e Saúde",
        }
    }

    /// Short title for the step indicator strip
    pub fn short_title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Informações Pessoais",
            Self::ContactGuardians => "Contato e Responsáveis",
            Self::DocumentsHealth => "Documentação e Saúde",
        }
    }

    /// The step after this one, if any
    pub fn next(&self) -> Option<FormStep> {
        match self {
            Self::PersonalInfo => Some(Self::ContactGuardians),
            Self::ContactGuardians => Some(Self::DocumentsHealth),
            Self::DocumentsHealth => None,
        }
    }

    /// True for the terminal step, whose action is submission
    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }

    /// The fields whose values and error entries gate advancement off this
    /// step. The documents step gates on attachment presence instead.
    pub fn gated_fields(&self) -> &'static [FieldKey] {
        match self {
            Self::PersonalInfo => &[
                FieldKey::Name,
                FieldKey::Cpf,
                FieldKey::Rg,
                FieldKey::BirthDate,
            ],
            Self::ContactGuardians => &[
                FieldKey::PhoneNumber,
                FieldKey::Email,
                FieldKey::ResponsibleName,
                FieldKey::ResponsibleEmail,
            ],
            Self::DocumentsHealth => &[],
        }
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index(), self.short_title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_step() {
        assert_eq!(FormStep::default(), FormStep::PersonalInfo);
    }

    #[test]
    fn test_transitions() {
        assert_eq!(
            FormStep::PersonalInfo.next(),
            Some(FormStep::ContactGuardians)
        );
        assert_eq!(
            FormStep::ContactGuardians.next(),
            Some(FormStep::DocumentsHealth)
        );
        assert_eq!(FormStep::DocumentsHealth.next(), None);
        assert!(FormStep::DocumentsHealth.is_final());
        assert!(!FormStep::PersonalInfo.is_final());
    }

    #[test]
    fn test_indices() {
        let indices: Vec<u8> = FormStep::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_gated_fields() {
        assert_eq!(FormStep::PersonalInfo.gated_fields().len(), 4);
        assert_eq!(FormStep::ContactGuardians.gated_fields().len(), 4);
        assert!(FormStep::DocumentsHealth.gated_fields().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FormStep::ContactGuardians.to_string(),
            "2. Contato e Responsáveis"
        );
    }
}
