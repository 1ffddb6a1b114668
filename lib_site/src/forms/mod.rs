//! # Forms Module
//!
//! The contact and careers forms. Submissions pass an anti-spam gate, are
//! turned into relay payloads and posted to FormSubmit.
//!
//! ## Contained Modules:
//! - **`gate`**: honeypot and minimum fill time check.
//! - **`payload`**: form inputs and relay bodies.
//! - **`relay`**: the `FormRelay` trait and its FormSubmit client.
//! - **`submit`**: `FormService`, which ties the three together.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod gate;
pub mod payload;
pub mod relay;
pub mod submit;

pub use gate::{FormGate, DEFAULT_MIN_FILL};
pub use payload::{Attachment, CareerApplication, ContactForm, ContactRelayBody};
pub use relay::{FormRelay, FormSubmitRelay, DEFAULT_RELAY_BASE};
pub use submit::{FormRecipients, FormService, SubmitReceipt};

/// Why the relay did not accept a submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay unreachable: {0}")]
    Transport(String),
    #[error("Relay answered with status {0}")]
    Status(u16),
}

/// Why a submission was refused. `Display` is the text shown to the visitor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Honeypot filled or submitted too fast.
    #[error("Unable to submit right now. Please try again.")]
    Blocked,
    #[error("Please attach your resume before submitting.")]
    MissingResume,
    #[error("Submission failed. Please try again.")]
    Relay(#[source] RelayError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
