//! Application state definitions

use super::forms::{ContactForm, ErrorField, FirmInputForm, FormError, FormStep};
use super::toast::ToastQueue;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    FirmInput,
    ContactDetails,
    Complete,
}

impl From<FormStep> for View {
    fn from(step: FormStep) -> Self {
        match step {
            FormStep::FirmInput => View::FirmInput,
            FormStep::ContactDetails => View::ContactDetails,
            FormStep::Complete => View::Complete,
        }
    }
}

/// UI-side state: inputs, the last rejection and toasts
#[derive(Debug, Default)]
pub struct AppState {
    pub firm_form: FirmInputForm,
    pub contact_form: ContactForm,
    /// Last rejected action, shown next to its field until the next edit
    pub form_error: Option<FormError>,
    pub toasts: ToastQueue,
    /// Feedback after copying the summary
    pub copy_message: Option<String>,
}

impl AppState {
    /// Error message for a field, if the last rejection belongs to it
    pub fn error_for(&self, field: ErrorField) -> Option<String> {
        self.form_error
            .as_ref()
            .filter(|err| err.field() == field)
            .map(ToString::to_string)
    }

    pub fn clear_error(&mut self) {
        self.form_error = None;
    }

    /// Blank inputs for a new submission
    pub fn reset_inputs(&mut self) {
        self.firm_form = FirmInputForm::new();
        self.contact_form = ContactForm::new();
        self.form_error = None;
        self.copy_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_step() {
        assert_eq!(View::from(FormStep::FirmInput), View::FirmInput);
        assert_eq!(View::from(FormStep::ContactDetails), View::ContactDetails);
        assert_eq!(View::from(FormStep::Complete), View::Complete);
    }

    #[test]
    fn test_error_for_matches_field() {
        let mut state = AppState {
            form_error: Some(FormError::EmailRequired),
            ..Default::default()
        };
        assert_eq!(
            state.error_for(ErrorField::Email),
            Some("Please enter your email address first".to_string())
        );
        assert_eq!(state.error_for(ErrorField::FirmName), None);
        state.clear_error();
        assert_eq!(state.error_for(ErrorField::Email), None);
    }

    #[test]
    fn test_reset_inputs() {
        let mut state = AppState::default();
        state.firm_form.email.set_text("a@b.com");
        state.contact_form.name.set_text("Jane");
        state.form_error = Some(FormError::InvalidEmail);
        state.reset_inputs();
        assert_eq!(state.firm_form.email.as_text(), "");
        assert_eq!(state.contact_form.name.as_text(), "");
        assert!(state.form_error.is_none());
    }
}
