//! Application state and core logic

use crate::ui::summary_text;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use firm_advisor::config::AdvisorConfig;
use firm_advisor::directory::FirmDirectory;
use firm_advisor::relay::{RelayClient, SubmissionClientTrait};
use firm_advisor::state::{
    AdvisorForm, AppState, FirmInputFocus, FirmSubmission, Form, SubmissionOutcome, View,
};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// UI-side state (inputs, errors, toasts)
    pub state: AppState,
    /// Advisor flow controller
    pub form: AdvisorForm,
    /// Receives the finished submission
    relay: Box<dyn SubmissionClientTrait>,
    /// Suggestions shown under the firm name field
    max_suggestions: usize,
    /// Set by Ctrl+S, handled after the next draw so "Submitting" is visible
    pub pending_submit: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from user configuration
    pub fn new(config: &AdvisorConfig) -> Result<Self> {
        let directory = Arc::new(config.load_directory()?);
        let relay = RelayClient::from_env_or(config.relay_url.as_deref());
        tracing::info!(
            "Loaded {} firms, relaying to {}",
            directory.len(),
            relay.url()
        );
        Ok(Self::with_client(
            directory,
            Box::new(relay),
            config.max_firms(),
            config.max_suggestions(),
        ))
    }

    pub fn with_client(
        directory: Arc<FirmDirectory>,
        relay: Box<dyn SubmissionClientTrait>,
        max_firms: usize,
        max_suggestions: usize,
    ) -> Self {
        let state = AppState::default();
        let form = AdvisorForm::new(directory, Box::new(state.toasts.clone()))
            .with_max_firms(max_firms);
        Self {
            state,
            form,
            relay,
            max_suggestions,
            pending_submit: false,
            quit: false,
        }
    }

    pub fn view(&self) -> View {
        View::from(self.form.step())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.view() {
            View::FirmInput => self.handle_firm_input_key(key),
            View::ContactDetails => self.handle_contact_key(key),
            View::Complete => self.handle_complete_key(key),
        }
    }

    /// Run a submission queued by Ctrl+S
    pub async fn process_pending_submit(&mut self) {
        if !self.pending_submit {
            return;
        }
        self.pending_submit = false;

        match self.form.finish(self.relay.as_ref()).await {
            Ok(SubmissionOutcome::Relayed) => {
                self.state.clear_error();
                self.state.toasts.push("Submission sent");
            }
            Ok(SubmissionOutcome::RelayFailed) => {
                // Logged by the form; the summary is shown regardless
                self.state.clear_error();
            }
            Err(err) => self.state.form_error = Some(err),
        }
    }

    fn handle_firm_input_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                if self.form.entered_firms().is_empty() {
                    self.state
                        .toasts
                        .push("Add at least one firm before submitting");
                } else {
                    self.pending_submit = true;
                }
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.state.firm_form.next_field();
                return;
            }
            KeyCode::BackTab => {
                self.state.firm_form.prev_field();
                return;
            }
            _ => {}
        }

        match self.state.firm_form.focus() {
            FirmInputFocus::Email => self.handle_email_key(key),
            FirmInputFocus::FirmName => self.handle_firm_name_key(key),
            FirmInputFocus::EnteredList => self.handle_entered_list_key(key),
        }
    }

    fn handle_email_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.firm_form.next_field(),
            KeyCode::Char(c) => {
                self.state.firm_form.email.push_char(c);
                self.sync_email();
            }
            KeyCode::Backspace => {
                self.state.firm_form.email.pop_char();
                self.sync_email();
            }
            _ => {}
        }
    }

    fn sync_email(&mut self) {
        self.form.set_email(self.state.firm_form.email.as_text());
        self.state.clear_error();
    }

    fn handle_firm_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_firm_name(),
            KeyCode::Down => self.state.firm_form.highlight_next(),
            KeyCode::Up => self.state.firm_form.highlight_prev(),
            KeyCode::Esc => self.state.firm_form.highlighted = None,
            KeyCode::Char(c) => {
                self.state.firm_form.firm_name.push_char(c);
                self.refresh_suggestions();
            }
            KeyCode::Backspace => {
                self.state.firm_form.firm_name.pop_char();
                self.refresh_suggestions();
            }
            _ => {}
        }
    }

    fn refresh_suggestions(&mut self) {
        self.state
            .firm_form
            .refresh_suggestions(self.form.directory(), self.max_suggestions);
        self.state.clear_error();
    }

    fn submit_firm_name(&mut self) {
        let candidate = self.state.firm_form.candidate();
        match self.form.submit_firm(&candidate) {
            Ok(FirmSubmission::NeedsContact { firm_name }) => {
                tracing::debug!("Collecting contact details for {firm_name}");
                self.state.firm_form.clear_firm_name();
                self.state.contact_form.reset();
                self.state.clear_error();
            }
            Ok(FirmSubmission::Added(_)) => {
                self.state.firm_form.clear_firm_name();
                self.state.clear_error();
            }
            Err(err) => self.state.form_error = Some(err),
        }
    }

    fn handle_entered_list_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Delete | KeyCode::Char('x')) {
            self.remove_selected_firm();
            return;
        }

        let count = self.form.entered_firms().len();
        let form = &mut self.state.firm_form;
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if form.selected_entry + 1 < count {
                    form.selected_entry += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                form.selected_entry = form.selected_entry.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn remove_selected_firm(&mut self) {
        let selected = self.state.firm_form.selected_entry;
        let Some(id) = self.form.entered_firms().get(selected).map(|e| e.id) else {
            return;
        };
        if let Some(removed) = self.form.remove_firm(id) {
            self.state
                .toasts
                .push(format!("{} removed", removed.firm_name));
        }
        self.state
            .firm_form
            .clamp_selection(self.form.entered_firms().len());
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_contact();
            }
            return;
        }

        if key.code == KeyCode::Esc {
            if self.form.cancel_contact().is_ok() {
                self.state.contact_form.reset();
                self.state.clear_error();
            }
            return;
        }

        if key.code == KeyCode::Enter && self.state.contact_form.is_last_field_active() {
            self.submit_contact();
            return;
        }

        let contact = &mut self.state.contact_form;
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => contact.prev_field(),
            KeyCode::Right if contact.is_choice_active() => contact.next_choice(),
            KeyCode::Left if contact.is_choice_active() => contact.prev_choice(),
            KeyCode::Char(c) => {
                if let Some(field) = contact.active_text_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = contact.active_text_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        let details = self.state.contact_form.to_details();
        match self.form.submit_contact(details) {
            Ok(_) => {
                self.state.contact_form.reset();
                self.state.clear_error();
            }
            Err(err) => self.state.form_error = Some(err),
        }
    }

    fn handle_complete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => {
                if self.form.start_new_submission().is_ok() {
                    self.state.reset_inputs();
                }
            }
            KeyCode::Char('y') => {
                let text = summary_text(&self.form);
                self.state.copy_message = Some(match copy_to_clipboard(&text) {
                    Ok(()) => "Summary copied".to_string(),
                    Err(err) => {
                        tracing::warn!("Clipboard unavailable: {err}");
                        "Copy failed".to_string()
                    }
                });
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use crossterm::event::KeyEventKind;
    use firm_advisor::relay::RelayAck;
    use firm_advisor::state::{FirmEntry, FormError};
    use std::sync::Mutex;

    /// Records submissions instead of sending them
    #[derive(Clone, Default)]
    struct RecordingRelay {
        calls: Arc<Mutex<Vec<(Vec<FirmEntry>, String)>>>,
        fail: bool,
    }

    #[async_trait]
    impl SubmissionClientTrait for RecordingRelay {
        async fn submit(&self, firms: &[FirmEntry], user_email: &str) -> Result<RelayAck> {
            self.calls
                .lock()
                .unwrap()
                .push((firms.to_vec(), user_email.to_string()));
            if self.fail {
                return Err(anyhow!("relay down"));
            }
            Ok(RelayAck {
                success: true,
                message: "Form submitted successfully".to_string(),
            })
        }
    }

    fn app_with(relay: RecordingRelay) -> App {
        let directory = Arc::new(
            FirmDirectory::new(["Allen & Overy", "Ashurst", "Linklaters"]).unwrap(),
        );
        App::with_client(directory, Box::new(relay), 5, 10)
    }

    fn app() -> App {
        app_with(RecordingRelay::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Type an email and move focus to the firm name field
    fn enter_email(app: &mut App, email: &str) {
        type_text(app, email);
        app.handle_key(key(KeyCode::Enter));
    }

    fn add_firm(app: &mut App, name: &str) {
        type_text(app, name);
        app.handle_key(key(KeyCode::Enter));
    }

    fn fill_contact(app: &mut App) {
        type_text(app, "Jane Doe");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Partner");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
    }

    mod firm_input {
        use super::*;

        #[test]
        fn test_starts_on_firm_input() {
            let app = app();
            assert_eq!(app.view(), View::FirmInput);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_email_is_synced_to_form() {
            let mut app = app();
            type_text(&mut app, "a@b.com");
            assert_eq!(app.form.user_email(), "a@b.com");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.user_email(), "a@b.co");
        }

        #[test]
        fn test_firm_without_email_shows_error() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab));
            add_firm(&mut app, "Unknown Law LLP");
            assert_eq!(app.state.form_error, Some(FormError::EmailRequired));
            assert!(app.form.entered_firms().is_empty());
            assert_eq!(app.state.firm_form.firm_name.as_text(), "Unknown Law LLP");
        }

        #[test]
        fn test_unmatched_firm_is_added_and_input_cleared() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");
            assert_eq!(app.form.entered_firms().len(), 1);
            assert_eq!(app.state.firm_form.firm_name.as_text(), "");
            assert_eq!(
                app.state.toasts.current(),
                Some("Unknown Law LLP added to your list".to_string())
            );
        }

        #[test]
        fn test_typing_updates_suggestions() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            type_text(&mut app, "a");
            assert_eq!(
                app.state.firm_form.suggestions,
                vec!["Allen & Overy", "Ashurst", "Linklaters"]
            );
        }

        #[test]
        fn test_highlighted_suggestion_is_submitted() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            type_text(&mut app, "ash");
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.view(), View::ContactDetails);
            assert_eq!(app.form.current_firm_name(), Some("Ashurst"));
        }

        #[test]
        fn test_remove_selected_firm() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "One LLP");
            add_firm(&mut app, "Two LLP");
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.firm_form.focus(), FirmInputFocus::EnteredList);

            app.handle_key(key(KeyCode::Char('j')));
            app.handle_key(key(KeyCode::Char('x')));

            let names: Vec<&str> = app
                .form
                .entered_firms()
                .iter()
                .map(|e| e.firm_name.as_str())
                .collect();
            assert_eq!(names, vec!["One LLP"]);
            assert_eq!(app.state.firm_form.selected_entry, 0);
        }

        #[test]
        fn test_submit_with_no_firms_is_not_queued() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            app.handle_key(ctrl('s'));
            assert!(!app.pending_submit);
            assert_eq!(
                app.state.toasts.current(),
                Some("Add at least one firm before submitting".to_string())
            );
        }
    }

    mod contact {
        use super::*;

        #[test]
        fn test_contact_flow_adds_matched_entry() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "allen & overy");
            assert_eq!(app.view(), View::ContactDetails);

            fill_contact(&mut app);
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.view(), View::FirmInput);
            let entry = &app.form.entered_firms()[0];
            assert_eq!(entry.firm_name, "Allen & Overy");
            assert!(entry.is_matched);
            assert_eq!(entry.contact_name.as_deref(), Some("Jane Doe"));
            assert_eq!(app.state.contact_form.name.as_text(), "");
        }

        #[test]
        fn test_incomplete_contact_shows_error() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Linklaters");
            type_text(&mut app, "Jane Doe");
            app.handle_key(ctrl('s'));

            assert_eq!(app.view(), View::ContactDetails);
            assert!(matches!(
                app.state.form_error,
                Some(FormError::IncompleteContact { .. })
            ));
        }

        #[test]
        fn test_escape_cancels_contact() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Linklaters");
            type_text(&mut app, "Jane");
            app.handle_key(key(KeyCode::Esc));

            assert_eq!(app.view(), View::FirmInput);
            assert!(app.form.entered_firms().is_empty());
            assert_eq!(app.state.contact_form.name.as_text(), "");
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_ctrl_s_submits_after_draw() {
            let relay = RecordingRelay::default();
            let mut app = app_with(relay.clone());
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");

            app.handle_key(ctrl('s'));
            assert!(app.pending_submit);
            assert_eq!(app.view(), View::FirmInput);

            app.process_pending_submit().await;

            assert!(!app.pending_submit);
            assert_eq!(app.view(), View::Complete);
            let calls = relay.calls.lock().unwrap();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].1, "a@b.com");
            assert_eq!(calls[0].0[0].firm_name, "Unknown Law LLP");
        }

        #[tokio::test]
        async fn test_relay_failure_still_shows_summary() {
            let relay = RecordingRelay {
                fail: true,
                ..Default::default()
            };
            let mut app = app_with(relay);
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");
            app.handle_key(ctrl('s'));
            app.process_pending_submit().await;

            assert_eq!(app.view(), View::Complete);
            assert!(app.state.form_error.is_none());
        }

        #[tokio::test]
        async fn test_invalid_email_blocks_submission() {
            let relay = RecordingRelay::default();
            let mut app = app_with(relay.clone());
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");
            app.handle_key(key(KeyCode::BackTab));
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Backspace));
            }

            app.handle_key(ctrl('s'));
            app.process_pending_submit().await;

            assert_eq!(app.view(), View::FirmInput);
            assert_eq!(app.state.form_error, Some(FormError::InvalidEmail));
            assert!(relay.calls.lock().unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_new_submission_resets_everything() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");
            app.handle_key(ctrl('s'));
            app.process_pending_submit().await;

            app.handle_key(key(KeyCode::Char('n')));

            assert_eq!(app.view(), View::FirmInput);
            assert!(app.form.entered_firms().is_empty());
            assert_eq!(app.state.firm_form.email.as_text(), "");
            assert_eq!(app.form.user_email(), "");
        }

        #[tokio::test]
        async fn test_q_quits_from_summary() {
            let mut app = app();
            enter_email(&mut app, "a@b.com");
            add_firm(&mut app, "Unknown Law LLP");
            app.handle_key(ctrl('s'));
            app.process_pending_submit().await;

            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }
    }
}
