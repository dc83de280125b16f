//! Error types for the contact form.
//!
//! Validation errors stay local to a field and are shown inline; submission
//! and transport errors are surfaced as toasts.

use super::ContactField;
use crate::content::{Locale, Phrase};
use std::collections::BTreeMap;
use thiserror::Error;

/// Why a single field failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The field is empty or whitespace only
    #[error("field is required")]
    Required,

    /// The field has content but not the expected shape
    #[error("field has an invalid format")]
    InvalidFormat,
}

impl ValidationError {
    /// Inline message shown under `field`.
    pub fn message(self, field: ContactField, locale: Locale) -> &'static str {
        let phrase = match (field, self) {
            (ContactField::Name, ValidationError::Required) => Phrase::ErrorNameRequired,
            (ContactField::Email, ValidationError::Required) => Phrase::ErrorEmailRequired,
            (ContactField::Email, ValidationError::InvalidFormat) => Phrase::ErrorEmailInvalid,
            (ContactField::Message, ValidationError::Required) => Phrase::ErrorMessageRequired,
            (_, ValidationError::Required) => Phrase::ErrorFieldRequired,
            (_, ValidationError::InvalidFormat) => Phrase::ErrorFieldInvalid,
        };
        phrase.get(locale)
    }
}

/// Field → error mapping produced by one validation pass.
pub type FieldErrors = BTreeMap<ContactField, ValidationError>;

/// Errors a contact transport can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The delivery task went away before reporting a result
    #[error("delivery was cancelled before completion")]
    Cancelled,

    /// The delivery could not be started at all
    #[error("delivery unavailable: {0}")]
    Unavailable(String),

    /// The receiving side refused the message
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Why a submit attempt did not produce a delivered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more fields failed validation; nothing was sent
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    /// A previous submission is still in flight
    #[error("a submission is already in progress")]
    InProgress,

    /// The transport failed; the form keeps its values
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type alias for contact submissions
pub type SubmitResult<T> = Result<T, SubmitError>;
