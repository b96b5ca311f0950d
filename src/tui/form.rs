//! Per-step input collection
//!
//! A `StepForm` holds the ordered inputs of the panel currently on screen and
//! tracks which one is focused. Every edit is pushed straight into the
//! controller, which keeps the record and the error map current; the inputs
//! themselves are just the editing surface.

use crate::form::validation::DATE_FORMAT;
use crate::form::{FieldKey, FormController, FormStep};
use crate::models::AttachmentSlot;

use super::widgets::TextInput;

/// What an input writes into when edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    /// A text-backed record field
    Text(FieldKey),
    /// The date-backed birth-date field
    Date(FieldKey),
    /// An attachment slot, entered as a filesystem path
    Attachment(AttachmentSlot),
}

/// One input line of a step panel
#[derive(Debug, Clone)]
pub struct FormInput {
    /// Where edits land
    pub target: InputTarget,
    /// The editing surface
    pub input: TextInput,
}

/// The ordered inputs of the step currently on screen
#[derive(Debug, Clone)]
pub struct StepForm {
    step: FormStep,
    inputs: Vec<FormInput>,
    focused: usize,
}

impl StepForm {
    /// Build the input collection for a step, prefilled from the controller
    pub fn for_step(step: FormStep, controller: &FormController) -> Self {
        let inputs = match step {
            FormStep::PersonalInfo => vec![
                text_input(FieldKey::Name, controller),
                text_input(FieldKey::Cpf, controller),
                text_input(FieldKey::Rg, controller),
                date_input(controller),
                text_input(FieldKey::Address, controller),
                text_input(FieldKey::Password, controller),
            ],
            FormStep::ContactGuardians => vec![
                text_input(FieldKey::PhoneNumber, controller),
                text_input(FieldKey::Email, controller),
                text_input(FieldKey::ResponsibleName, controller),
                text_input(FieldKey::ResponsibleEmail, controller),
                text_input(FieldKey::MotherName, controller),
                text_input(FieldKey::MotherPhoneNumber, controller),
                text_input(FieldKey::FatherName, controller),
                text_input(FieldKey::FatherPhoneNumber, controller),
            ],
            FormStep::DocumentsHealth => vec![
                attachment_input(AttachmentSlot::FrontId, controller),
                attachment_input(AttachmentSlot::BackId, controller),
                attachment_input(AttachmentSlot::AthletePhoto, controller),
                text_input(FieldKey::BloodType, controller),
                text_input(FieldKey::FoodAllergies, controller),
            ],
        };

        // Every record-backed input must be placed on the step it belongs to
        debug_assert!(inputs.iter().all(|i| match i.target {
            InputTarget::Text(field) | InputTarget::Date(field) => field.step() == Some(step),
            InputTarget::Attachment(_) => step == FormStep::DocumentsHealth,
        }));

        let mut form = Self {
            step,
            inputs,
            focused: 0,
        };
        form.update_focus();
        form
    }

    /// The step this form belongs to
    pub fn step(&self) -> FormStep {
        self.step
    }

    /// All inputs in panel order
    pub fn inputs(&self) -> &[FormInput] {
        &self.inputs
    }

    /// The focused input
    pub fn focused(&self) -> &FormInput {
        &self.inputs[self.focused]
    }

    /// The focused input, mutably
    pub fn focused_mut(&mut self) -> &mut FormInput {
        &mut self.inputs[self.focused]
    }

    /// Move focus to the next input, wrapping around
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.inputs.len();
        self.update_focus();
    }

    /// Move focus to the previous input, wrapping around
    pub fn focus_prev(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.inputs.len() - 1);
        self.update_focus();
    }

    fn update_focus(&mut self) {
        for (i, field) in self.inputs.iter_mut().enumerate() {
            field.input.focused = i == self.focused;
        }
    }
}

fn text_input(field: FieldKey, controller: &FormController) -> FormInput {
    let value = field.text_of(controller.record()).unwrap_or_default();
    FormInput {
        target: InputTarget::Text(field),
        input: TextInput::new()
            .label(field.label())
            .required(field.is_required())
            .content(value),
    }
}

fn date_input(controller: &FormController) -> FormInput {
    let value = controller
        .record()
        .birth_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    FormInput {
        target: InputTarget::Date(FieldKey::BirthDate),
        input: TextInput::new()
            .label(FieldKey::BirthDate.label())
            .placeholder("AAAA-MM-DD")
            .required(true)
            .content(value),
    }
}

fn attachment_input(slot: AttachmentSlot, controller: &FormController) -> FormInput {
    let value = controller
        .attachments()
        .get(slot)
        .map(|a| a.path().display().to_string())
        .unwrap_or_default();
    FormInput {
        target: InputTarget::Attachment(slot),
        input: TextInput::new()
            .label(slot.label())
            .placeholder("caminho do arquivo")
            .required(true)
            .content(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageCatalog;
    use crate::models::Attachment;

    fn controller() -> FormController {
        FormController::new(MessageCatalog::default())
    }

    #[test]
    fn test_personal_info_inputs() {
        let form = StepForm::for_step(FormStep::PersonalInfo, &controller());
        assert_eq!(form.inputs().len(), 6);
        assert_eq!(form.focused().target, InputTarget::Text(FieldKey::Name));
        assert!(form.focused().input.focused);
    }

    #[test]
    fn test_documents_inputs_lead_with_attachments() {
        let form = StepForm::for_step(FormStep::DocumentsHealth, &controller());
        assert_eq!(
            form.inputs()[0].target,
            InputTarget::Attachment(AttachmentSlot::FrontId)
        );
        assert_eq!(form.inputs().len(), 5);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = StepForm::for_step(FormStep::PersonalInfo, &controller());
        for _ in 0..form.inputs().len() {
            form.focus_next();
        }
        assert_eq!(form.focused().target, InputTarget::Text(FieldKey::Name));

        form.focus_prev();
        assert_eq!(form.focused().target, InputTarget::Text(FieldKey::Password));
    }

    #[test]
    fn test_prefill_from_controller() {
        let mut c = controller();
        c.set_field(FieldKey::Name, "Ana Souza").unwrap();
        c.set_attachment(
            AttachmentSlot::FrontId,
            Some(Attachment::new("/docs/frente.jpg")),
        );

        let form = StepForm::for_step(FormStep::PersonalInfo, &c);
        assert_eq!(form.inputs()[0].input.value(), "Ana Souza");

        let docs = StepForm::for_step(FormStep::DocumentsHealth, &c);
        assert_eq!(docs.inputs()[0].input.value(), "/docs/frente.jpg");
    }
}
