use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::gate::FormGate;
use super::payload::{Attachment, CareerApplication, ContactForm};
use super::relay::FormRelay;
use super::{RelayError, SubmitError};
use crate::loggers::LoggerLocal;

/// Mailboxes the relay delivers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecipients {
    pub contact: String,
    pub careers: String,
}

impl Default for FormRecipients {
    fn default() -> Self {
        Self {
            contact: "info@zenture.in".to_string(),
            careers: "careers@zenture.in".to_string(),
        }
    }
}

/// A delivered submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitReceipt {
    pub recipient: String,
    /// Confirmation text for the visitor.
    pub message: String,
}

/// Validates, gates and relays both site forms.
pub struct FormService {
    relay: Arc<dyn FormRelay>,
    recipients: FormRecipients,
    logger: Arc<LoggerLocal>,
}

impl FormService {
    pub fn new(relay: Arc<dyn FormRelay>, recipients: FormRecipients, logger: Arc<LoggerLocal>) -> Self {
        Self {
            relay,
            recipients,
            logger,
        }
    }

    pub fn recipients(&self) -> &FormRecipients {
        &self.recipients
    }

    async fn blocked(&self, form: &str, gate: &FormGate) {
        self.logger
            .warn(
                "Form submission blocked by gate",
                Some(json!({"form": form, "elapsedMs": gate.elapsed().as_millis() as u64})),
            )
            .await;
    }

    pub async fn submit_contact(&self, gate: &FormGate, form: ContactForm) -> Result<SubmitReceipt, SubmitError> {
        if let Err(e) = gate.check(&form.website) {
            self.blocked("contact", gate).await;
            return Err(e);
        }

        let recipient = &self.recipients.contact;
        let body = serde_json::to_value(form.relay_body())
            .map_err(|e| SubmitError::Relay(RelayError::Transport(e.to_string())))?;

        if let Err(e) = self.relay.send_json(recipient, body).await {
            self.logger
                .error("Contact form relay failed", Some(json!({"error": e.to_string()})))
                .await;
            return Err(SubmitError::Relay(e));
        }

        self.logger
            .info("Contact form delivered", Some(json!({"recipient": recipient})))
            .await;
        Ok(SubmitReceipt {
            recipient: recipient.clone(),
            message: format!("Thanks. Your message has been sent to {}.", recipient),
        })
    }

    pub async fn submit_application(
        &self,
        gate: &FormGate,
        application: CareerApplication,
        resume: Option<Attachment>,
    ) -> Result<SubmitReceipt, SubmitError> {
        if let Err(e) = gate.check(&application.website) {
            self.blocked("careers", gate).await;
            return Err(e);
        }
        let Some(resume) = resume else {
            return Err(SubmitError::MissingResume);
        };

        let recipient = &self.recipients.careers;
        let fields = application.relay_fields(&resume);
        if let Err(e) = self.relay.send_multipart(recipient, fields, resume).await {
            self.logger
                .error("Careers application relay failed", Some(json!({"error": e.to_string()})))
                .await;
            return Err(SubmitError::Relay(e));
        }

        self.logger
            .info(
                "Careers application delivered",
                Some(json!({"recipient": recipient, "position": application.position_or_general()})),
            )
            .await;
        Ok(SubmitReceipt {
            recipient: recipient.clone(),
            message: format!("Application sent to {}.", recipient),
        })
    }
}
