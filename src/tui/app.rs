//! Application state for the TUI
//!
//! The App struct wires the form controller to the editing surface: it owns
//! the controller, the inputs of the step on screen, the active alert, and
//! the submission sink.

use tracing::warn;

use crate::config::Settings;
use crate::form::{DiagnosticSink, FormController, StepAdvance};
use crate::models::Attachment;

use super::form::{InputTarget, StepForm};

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking alert with a message
    Alert(String),
}

/// Main application state
pub struct App {
    /// The form state machine
    pub controller: FormController,

    /// Inputs of the step currently on screen
    pub form: StepForm,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Where completed registrations go
    pub sink: DiagnosticSink,
}

impl App {
    /// Create a new App instance
    pub fn new(settings: &Settings) -> Self {
        let controller = FormController::new(settings.messages.clone());
        let form = StepForm::for_step(controller.step(), &controller);

        Self {
            controller,
            form,
            active_dialog: ActiveDialog::default(),
            status_message: None,
            should_quit: false,
            sink: DiagnosticSink::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a dialog is currently capturing input
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Raise a blocking alert
    pub fn open_alert(&mut self, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Alert(message.into());
    }

    /// Dismiss the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Push the focused input's current value into the controller.
    ///
    /// Called after every edit, mirroring a change event per keystroke: text
    /// fields re-validate on each call, the date field parses silently, and a
    /// blank attachment path clears its slot.
    pub fn apply_focused_edit(&mut self) {
        let target = self.form.focused().target;
        let value = self.form.focused().input.value().to_string();

        match target {
            InputTarget::Text(field) => {
                if let Err(err) = self.controller.set_field(field, &value) {
                    warn!("ignoring edit on field '{}': {}", field, err);
                }
            }
            InputTarget::Date(field) => {
                if let Err(err) = self.controller.set_date_field(field, &value) {
                    warn!("ignoring edit on field '{}': {}", field, err);
                }
            }
            InputTarget::Attachment(slot) => {
                let trimmed = value.trim();
                let attachment = if trimmed.is_empty() {
                    None
                } else {
                    Some(Attachment::new(trimmed))
                };
                self.controller.set_attachment(slot, attachment);
            }
        }
    }

    /// Enter on a step panel: advance, or submit on the final step.
    ///
    /// A refused advance raises the blocking alert with the catalog's
    /// step-incomplete message and changes nothing else.
    pub fn advance_or_submit(&mut self) {
        if self.controller.step().is_final() {
            self.try_submit();
            return;
        }

        match self.controller.advance_step() {
            StepAdvance::Advanced(next) => {
                self.form = StepForm::for_step(next, &self.controller);
            }
            StepAdvance::Blocked => {
                let message = self.controller.messages().step_incomplete.clone();
                self.open_alert(message);
            }
            StepAdvance::AtFinalStep => {}
        }
    }

    fn try_submit(&mut self) {
        if !self.controller.can_advance() {
            let message = self.controller.messages().step_incomplete.clone();
            self.open_alert(message);
            return;
        }

        match self.controller.submit(&mut self.sink) {
            Ok(()) => {
                let message = self.controller.messages().submitted.clone();
                self.set_status(message);
            }
            Err(err) => {
                self.open_alert(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldKey, FormStep};
    use crate::models::AttachmentSlot;

    fn app() -> App {
        App::new(&Settings::default())
    }

    fn type_into_focused(app: &mut App, text: &str) {
        app.form.focused_mut().input.clear();
        for c in text.chars() {
            app.form.focused_mut().input.insert(c);
        }
        app.apply_focused_edit();
    }

    fn fill_personal_info(app: &mut App) {
        type_into_focused(app, "Ana Souza"); // name
        app.form.focus_next();
        type_into_focused(app, "12345678901"); // cpf
        app.form.focus_next();
        type_into_focused(app, "123456789"); // rg
        app.form.focus_next();
        type_into_focused(app, "2010-03-14"); // birth date
    }

    #[test]
    fn test_edits_flow_into_controller() {
        let mut app = app();
        type_into_focused(&mut app, "Ana Souza");
        assert_eq!(app.controller.record().name, "Ana Souza");

        app.form.focus_next();
        type_into_focused(&mut app, "123");
        assert_eq!(app.controller.record().cpf, "123");
        assert!(app.controller.errors().error(FieldKey::Cpf).is_some());
    }

    #[test]
    fn test_date_edit_parses_silently() {
        let mut app = app();
        for _ in 0..3 {
            app.form.focus_next();
        }
        type_into_focused(&mut app, "2010-03-14");
        assert!(app.controller.record().birth_date.is_some());

        type_into_focused(&mut app, "data inválida");
        assert!(app.controller.record().birth_date.is_none());
    }

    #[test]
    fn test_blocked_advance_raises_alert() {
        let mut app = app();
        app.advance_or_submit();

        assert!(app.has_dialog());
        assert_eq!(app.controller.step(), FormStep::PersonalInfo);
        assert!(matches!(app.active_dialog, ActiveDialog::Alert(_)));

        app.close_dialog();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_advance_rebuilds_form_for_next_step() {
        let mut app = app();
        fill_personal_info(&mut app);

        app.advance_or_submit();
        assert_eq!(app.controller.step(), FormStep::ContactGuardians);
        assert_eq!(app.form.step(), FormStep::ContactGuardians);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_attachment_edit_fills_and_clears_slot() {
        let mut app = app();
        fill_personal_info(&mut app);
        app.advance_or_submit();

        // step 2
        type_into_focused(&mut app, "11987654321");
        app.form.focus_next();
        type_into_focused(&mut app, "ana@clube.com.br");
        app.form.focus_next();
        type_into_focused(&mut app, "Carlos Souza");
        app.form.focus_next();
        type_into_focused(&mut app, "carlos@clube.com.br");
        app.advance_or_submit();
        assert_eq!(app.controller.step(), FormStep::DocumentsHealth);

        type_into_focused(&mut app, "/docs/frente.jpg");
        assert!(app
            .controller
            .attachments()
            .get(AttachmentSlot::FrontId)
            .is_some());

        type_into_focused(&mut app, "");
        assert!(app
            .controller
            .attachments()
            .get(AttachmentSlot::FrontId)
            .is_none());
    }

    #[test]
    fn test_submit_on_final_step() {
        let mut app = app();
        fill_personal_info(&mut app);
        app.advance_or_submit();

        type_into_focused(&mut app, "11987654321");
        app.form.focus_next();
        type_into_focused(&mut app, "ana@clube.com.br");
        app.form.focus_next();
        type_into_focused(&mut app, "Carlos Souza");
        app.form.focus_next();
        type_into_focused(&mut app, "carlos@clube.com.br");
        app.advance_or_submit();

        // Submit with no attachments: blocked by the alert.
        app.advance_or_submit();
        assert!(app.has_dialog());
        assert!(!app.controller.is_submitted());
        app.close_dialog();

        for _ in 0..3 {
            type_into_focused(&mut app, "/docs/arquivo.jpg");
            app.form.focus_next();
        }

        app.advance_or_submit();
        assert!(app.controller.is_submitted());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Inscrição enviada com sucesso.")
        );
    }
}
