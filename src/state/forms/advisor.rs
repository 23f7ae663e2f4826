//! Advisor form controller
//!
//! Sequences the user through firm entry, the contact sub-form for firms
//! found in the directory, and final submission. All transitions run to
//! completion inside one handler call; rejected events leave the state
//! untouched and report a [`FormError`] for the UI to show next to the
//! offending field.

use super::entry::{ContactDetails, FirmEntry};
use crate::directory::FirmDirectory;
use crate::relay::SubmissionClientTrait;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use uuid::Uuid;

/// Soft cap on firms, used for "remaining" messaging only
pub const DEFAULT_MAX_FIRMS: usize = 5;

/// Step of the advisor flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    FirmInput,
    ContactDetails,
    Complete,
}

impl FormStep {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirmInput => "firm-input",
            Self::ContactDetails => "contact-details",
            Self::Complete => "complete",
        }
    }
}

/// User-correctable rejections
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a firm name")]
    EmptyFirmName,
    #[error("Please enter your email address first")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("{0} has already been added")]
    DuplicateFirm(String),
    #[error("Please complete all contact fields (missing: {})", .missing.join(", "))]
    IncompleteContact { missing: Vec<&'static str> },
    #[error("Not available in the {} step", .actual.label())]
    WrongStep { expected: FormStep, actual: FormStep },
}

/// Field a [`FormError`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorField {
    Email,
    FirmName,
    Contact,
    Form,
}

impl FormError {
    pub fn field(&self) -> ErrorField {
        match self {
            Self::EmailRequired | Self::InvalidEmail => ErrorField::Email,
            Self::EmptyFirmName | Self::DuplicateFirm(_) => ErrorField::FirmName,
            Self::IncompleteContact { .. } => ErrorField::Contact,
            Self::WrongStep { .. } => ErrorField::Form,
        }
    }
}

/// Result of submitting a firm name
#[derive(Debug, Clone, PartialEq)]
pub enum FirmSubmission {
    /// Directory match; the contact sub-form is now open for this firm
    NeedsContact { firm_name: String },
    /// No match; the firm was added straight away
    Added(FirmEntry),
}

/// Whether the relay accepted the final submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Relayed,
    RelayFailed,
}

/// Receives transient acknowledgement messages
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Simple email check: `local@domain.tld`, no whitespace, one `@`
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
    EMAIL_PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
        .is_match(email.trim())
}

/// State machine behind the advisor form
pub struct AdvisorForm {
    directory: Arc<FirmDirectory>,
    notifier: Box<dyn NotificationSink>,
    step: FormStep,
    current_firm_name: Option<String>,
    is_current_firm_matched: bool,
    entered_firms: Vec<FirmEntry>,
    is_completed: bool,
    is_submitting: bool,
    max_firms: usize,
    user_email: String,
}

impl AdvisorForm {
    pub fn new(directory: Arc<FirmDirectory>, notifier: Box<dyn NotificationSink>) -> Self {
        Self {
            directory,
            notifier,
            step: FormStep::FirmInput,
            current_firm_name: None,
            is_current_firm_matched: false,
            entered_firms: Vec::new(),
            is_completed: false,
            is_submitting: false,
            max_firms: DEFAULT_MAX_FIRMS,
            user_email: String::new(),
        }
    }

    pub fn with_max_firms(mut self, max_firms: usize) -> Self {
        self.max_firms = max_firms;
        self
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn entered_firms(&self) -> &[FirmEntry] {
        &self.entered_firms
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Firm waiting for contact details, if any
    pub fn current_firm_name(&self) -> Option<&str> {
        self.current_firm_name.as_deref()
    }

    pub fn is_current_firm_matched(&self) -> bool {
        self.is_current_firm_matched
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn max_firms(&self) -> usize {
        self.max_firms
    }

    pub fn remaining_firms(&self) -> usize {
        self.max_firms.saturating_sub(self.entered_firms.len())
    }

    pub fn directory(&self) -> &FirmDirectory {
        &self.directory
    }

    pub fn set_email(&mut self, email: &str) {
        self.user_email = email.to_string();
    }

    /// Handle a firm name typed on the firm input step
    pub fn submit_firm(&mut self, name: &str) -> Result<FirmSubmission, FormError> {
        self.expect_step(FormStep::FirmInput)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyFirmName);
        }
        self.checked_email()?;

        let lower = name.to_lowercase();
        if let Some(existing) = self
            .entered_firms
            .iter()
            .find(|entry| entry.firm_name.to_lowercase() == lower)
        {
            return Err(FormError::DuplicateFirm(existing.firm_name.clone()));
        }

        if self.directory.is_valid_firm(name) {
            let firm_name = self
                .directory
                .get_exact_firm_name(name)
                .unwrap_or_else(|| name.to_string());
            tracing::debug!("Firm {firm_name:?} matched the directory");
            self.current_firm_name = Some(firm_name.clone());
            self.is_current_firm_matched = true;
            self.step = FormStep::ContactDetails;
            return Ok(FirmSubmission::NeedsContact { firm_name });
        }

        let entry = FirmEntry::unmatched(name);
        tracing::debug!("Firm {name:?} not in directory, added without contact");
        self.notifier
            .notify(&format!("{} added to your list", entry.firm_name));
        self.entered_firms.push(entry.clone());
        Ok(FirmSubmission::Added(entry))
    }

    /// Complete the contact sub-form for the matched firm
    pub fn submit_contact(&mut self, contact: ContactDetails) -> Result<&FirmEntry, FormError> {
        self.expect_step(FormStep::ContactDetails)?;

        let missing = contact.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::IncompleteContact { missing });
        }

        let firm_name = self.current_firm_name.take().unwrap_or_default();
        let entry = FirmEntry::matched(firm_name, contact);
        self.notifier
            .notify(&format!("{} added with contact details", entry.firm_name));
        self.entered_firms.push(entry);
        self.is_current_firm_matched = false;
        self.step = FormStep::FirmInput;

        Ok(&self.entered_firms[self.entered_firms.len() - 1])
    }

    /// Leave the contact sub-form without adding the firm
    pub fn cancel_contact(&mut self) -> Result<(), FormError> {
        self.expect_step(FormStep::ContactDetails)?;
        self.current_firm_name = None;
        self.is_current_firm_matched = false;
        self.step = FormStep::FirmInput;
        Ok(())
    }

    /// Remove one entry by id
    pub fn remove_firm(&mut self, id: Uuid) -> Option<FirmEntry> {
        let idx = self.entered_firms.iter().position(|entry| entry.id == id)?;
        Some(self.entered_firms.remove(idx))
    }

    /// Hand the submission to the relay and move to the completion step.
    ///
    /// Relay failures are logged and reported through the outcome; the form
    /// completes either way.
    pub async fn finish(
        &mut self,
        client: &dyn SubmissionClientTrait,
    ) -> Result<SubmissionOutcome, FormError> {
        self.expect_step(FormStep::FirmInput)?;
        let email = self.checked_email()?;

        self.is_submitting = true;
        let outcome = match client.submit(&self.entered_firms, &email).await {
            Ok(ack) => {
                tracing::info!(
                    "Submitted {} firms for {email}: {}",
                    self.entered_firms.len(),
                    ack.message
                );
                SubmissionOutcome::Relayed
            }
            Err(err) => {
                tracing::warn!("Relay submission failed: {err:#}");
                SubmissionOutcome::RelayFailed
            }
        };
        self.is_submitting = false;
        self.is_completed = true;
        self.step = FormStep::Complete;

        Ok(outcome)
    }

    /// Reset to a blank form after completion
    pub fn start_new_submission(&mut self) -> Result<(), FormError> {
        self.expect_step(FormStep::Complete)?;
        self.step = FormStep::FirmInput;
        self.current_firm_name = None;
        self.is_current_firm_matched = false;
        self.entered_firms.clear();
        self.is_completed = false;
        self.is_submitting = false;
        self.user_email.clear();
        Ok(())
    }

    fn expect_step(&self, expected: FormStep) -> Result<(), FormError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FormError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Trimmed email, or the matching error
    fn checked_email(&self) -> Result<String, FormError> {
        let email = self.user_email.trim();
        if email.is_empty() {
            return Err(FormError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(email.to_string())
    }
}
