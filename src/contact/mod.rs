//! Contact form: field state, validation and submission lifecycle.
//!
//! ## Submission Lifecycle
//!
//! ```text
//! Editing -> Submitting            (begin_submit with every field valid)
//! Editing -> Editing               (begin_submit with errors; nothing is sent)
//! Submitting -> Submitted{until}   (finish_submit Ok; fields cleared)
//! Submitting -> Editing            (finish_submit Err; fields kept)
//! Submitted -> Editing             (poll once `until` has passed)
//! ```
//!
//! ## Error Handling
//!
//! Validation runs every rule independently and collects a [`FieldErrors`]
//! map. Editing a field clears only that field's error; the rules are not
//! re-run until the next submit.

mod error;
mod transport;

pub use error::*;
pub use transport::{ContactTransport, DeliveryReceipt, SimulatedTransport};

use crate::constants::SUBMITTED_RESET_DELAY;
use crate::content::Phrase;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Loose e-mail shape: `local@domain.tld` without whitespace or extra `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true if `email` has the loose `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Fields of the contact form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Email | ContactField::Message
        )
    }

    pub fn label(self) -> Phrase {
        match self {
            ContactField::Name => Phrase::FieldName,
            ContactField::Email => Phrase::FieldEmail,
            ContactField::Phone => Phrase::FieldPhone,
            ContactField::Subject => Phrase::FieldSubject,
            ContactField::Message => Phrase::FieldMessage,
        }
    }

    /// Placeholder text; the subject picker has none.
    pub fn placeholder(self) -> Option<Phrase> {
        match self {
            ContactField::Name => Some(Phrase::PlaceholderName),
            ContactField::Email => Some(Phrase::PlaceholderEmail),
            ContactField::Phone => Some(Phrase::PlaceholderPhone),
            ContactField::Message => Some(Phrase::PlaceholderMessage),
            ContactField::Subject => None,
        }
    }
}

/// The values of one contact form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Run every rule independently.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, ValidationError::Required);
        }

        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, ValidationError::Required);
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, ValidationError::InvalidFormat);
        }

        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, ValidationError::Required);
        }

        errors
    }
}

/// Where the form is in its submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    /// The thank-you state is shown until `until`
    Submitted { until: Instant },
}

/// State of the contact form owned by the contact section.
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    values: ContactMessage,
    errors: FieldErrors,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactMessage {
        &self.values
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    /// Update a field from user input, clearing that field's error.
    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        if self.errors.remove(&field).is_some() {
            debug!(?field, "cleared field error on edit");
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitted { .. })
    }

    /// Validate and, if every rule passes, enter `Submitting`.
    ///
    /// Returns the message to hand to a transport. On validation failure the
    /// errors are stored for inline display and nothing else changes.
    pub fn begin_submit(&mut self) -> SubmitResult<ContactMessage> {
        if self.is_submitting() {
            return Err(SubmitError::InProgress);
        }

        let errors = self.values.validate();
        if !errors.is_empty() {
            debug!(count = errors.len(), "contact form rejected by validation");
            self.errors = errors.clone();
            return Err(SubmitError::Invalid(errors));
        }

        self.errors.clear();
        self.phase = SubmitPhase::Submitting;
        info!("contact form submitting");
        Ok(self.values.clone())
    }

    /// Apply the transport outcome of a submission started with [`ContactForm::begin_submit`].
    pub fn finish_submit(
        &mut self,
        outcome: Result<DeliveryReceipt, TransportError>,
        now: Instant,
    ) -> SubmitResult<DeliveryReceipt> {
        if !self.is_submitting() {
            warn!("finish_submit called without a submission in flight");
        }
        match outcome {
            Ok(receipt) => {
                self.values = ContactMessage::default();
                self.errors.clear();
                self.phase = SubmitPhase::Submitted {
                    until: now + SUBMITTED_RESET_DELAY,
                };
                info!(id = receipt.id, "contact form submitted");
                Ok(receipt)
            }
            Err(e) => {
                warn!("contact submission failed: {}", e);
                self.phase = SubmitPhase::Editing;
                Err(SubmitError::Transport(e))
            }
        }
    }

    /// Leave the thank-you state once its time is up. Returns true on change.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.phase {
            SubmitPhase::Submitted { until } if now >= until => {
                self.phase = SubmitPhase::Editing;
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            SubmitPhase::Submitted { until } => Some(until),
            _ => None,
        }
    }

    /// Validate, deliver through `transport` and apply the outcome.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitResult<DeliveryReceipt>
    where
        T: ContactTransport + ?Sized,
    {
        let message = self.begin_submit()?;
        let outcome = transport.send(message).await;
        self.finish_submit(outcome, Instant::now())
    }
}
