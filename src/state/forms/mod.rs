//! Form domain layer
//!
//! The advisor controller and its entries, plus the input state the
//! terminal views edit before handing values to the controller.

mod advisor;
mod entry;
mod field;
mod form_state;

pub use advisor::{
    is_valid_email, AdvisorForm, ErrorField, FirmSubmission, FormError, FormStep,
    NotificationSink, SubmissionOutcome, DEFAULT_MAX_FIRMS,
};
pub use entry::{ContactDetails, ContactFrequency, FirmEntry, RelationshipStrength};
pub use field::FormField;
pub use form_state::{ContactForm, FirmInputFocus, FirmInputForm, Form};

#[cfg(test)]
pub use advisor::MockNotificationSink;
