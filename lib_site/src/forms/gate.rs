use std::time::{Duration, Instant};

use super::SubmitError;

/// Minimum time a human needs between seeing a form and submitting it.
pub const DEFAULT_MIN_FILL: Duration = Duration::from_millis(3000);

/// Anti-spam gate for one rendering of a form.
///
/// Rejects submissions that fill the hidden honeypot field or arrive sooner
/// than `min_fill` after the form became visible. It runs before any network
/// call.
#[derive(Debug, Clone, Copy)]
pub struct FormGate {
    opened_at: Instant,
    min_fill: Duration,
}

impl FormGate {
    /// A gate whose clock starts now.
    pub fn open(min_fill: Duration) -> Self {
        Self::opened_at(Instant::now(), min_fill)
    }

    pub fn opened_at(opened_at: Instant, min_fill: Duration) -> Self {
        Self { opened_at, min_fill }
    }

    pub fn elapsed(&self) -> Duration {
        self.opened_at.elapsed()
    }

    pub fn check(&self, honeypot: &str) -> Result<(), SubmitError> {
        self.check_at(Instant::now(), honeypot)
    }

    pub fn check_at(&self, now: Instant, honeypot: &str) -> Result<(), SubmitError> {
        if !honeypot.is_empty() {
            return Err(SubmitError::Blocked);
        }
        if now.saturating_duration_since(self.opened_at) < self.min_fill {
            return Err(SubmitError::Blocked);
        }
        Ok(())
    }
}
