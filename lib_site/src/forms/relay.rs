//! # Form Relay
//!
//! The third-party service that turns form posts into e-mail. It is an opaque
//! HTTP sink: a 2xx answer means delivered, anything else means failed.
//! Submissions are never retried automatically.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use url::Url;

use super::payload::Attachment;
use super::RelayError;

pub const DEFAULT_RELAY_BASE: &str = "https://formsubmit.co/";

#[async_trait]
pub trait FormRelay: Send + Sync {
    /// Posts a JSON body to `recipient`.
    async fn send_json(&self, recipient: &str, body: Value) -> Result<(), RelayError>;

    /// Posts a multipart body with one file part named `attachment`.
    async fn send_multipart(
        &self,
        recipient: &str,
        fields: Vec<(&'static str, String)>,
        attachment: Attachment,
    ) -> Result<(), RelayError>;
}

/// FormSubmit's AJAX endpoint, `POST {base}ajax/{recipient}`.
pub struct FormSubmitRelay {
    client: reqwest::Client,
    base_url: Url,
}

impl FormSubmitRelay {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid relay URL {} (must be absolute): {}", base_url, e))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("ZentureSite/1.0")
            .build()?;
        Ok(Self { client, base_url: base })
    }

    pub fn endpoint(&self, recipient: &str) -> Result<Url, RelayError> {
        self.base_url
            .join(&format!("ajax/{}", recipient))
            .map_err(|e| RelayError::Transport(e.to_string()))
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<(), RelayError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl FormRelay for FormSubmitRelay {
    async fn send_json(&self, recipient: &str, body: Value) -> Result<(), RelayError> {
        let url = self.endpoint(recipient)?;
        self.execute(self.client.post(url).json(&body)).await
    }

    async fn send_multipart(
        &self,
        recipient: &str,
        fields: Vec<(&'static str, String)>,
        attachment: Attachment,
    ) -> Result<(), RelayError> {
        let url = self.endpoint(recipient)?;
        let mut form = fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let mut part = Part::bytes(attachment.bytes).file_name(attachment.file_name);
        if let Some(mime) = attachment.content_type.as_deref() {
            part = part
                .mime_str(mime)
                .map_err(|e| RelayError::Transport(e.to_string()))?;
        }
        form = form.part("attachment", part);

        self.execute(self.client.post(url).multipart(form)).await
    }
}
