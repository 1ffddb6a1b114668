//! Form inputs and the relay payloads built from them.

use serde::{Deserialize, Serialize};

const TEMPLATE: &str = "table";
const CAPTCHA: &str = "false";

/// Sent in place of an empty company name.
pub const NO_COMPANY: &str = "N/A";
/// Sent in place of an empty position.
pub const GENERAL_APPLICATION: &str = "General Application";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    /// Honeypot. Hidden from people, filled by bots.
    pub website: String,
}

/// JSON body posted to the relay for a contact inquiry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRelayBody {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_template")]
    pub template: String,
    #[serde(rename = "_captcha")]
    pub captcha: String,
}

impl ContactForm {
    pub fn relay_body(&self) -> ContactRelayBody {
        let company = if self.company.is_empty() {
            NO_COMPANY.to_string()
        } else {
            self.company.clone()
        };
        ContactRelayBody {
            name: self.name.clone(),
            email: self.email.clone(),
            company,
            message: self.message.clone(),
            subject: format!("New Contact Inquiry - {}", self.name),
            template: TEMPLATE.to_string(),
            captcha: CAPTCHA.to_string(),
        }
    }
}

/// An uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareerApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub message: String,
    /// Honeypot. Hidden from people, filled by bots.
    pub website: String,
}

impl CareerApplication {
    /// The position applied for, or the general pool.
    pub fn position_or_general(&self) -> &str {
        if self.position.is_empty() {
            GENERAL_APPLICATION
        } else {
            &self.position
        }
    }

    /// Text parts of the multipart body, in submission order. The resume
    /// itself travels as the `attachment` part.
    pub fn relay_fields(&self, resume: &Attachment) -> Vec<(&'static str, String)> {
        let position = self.position_or_general().to_string();
        vec![
            ("fullName", self.full_name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("position", position.clone()),
            ("message", self.message.clone()),
            ("resumeFileName", resume.file_name.clone()),
            ("_subject", format!("Career Application - {}", position)),
            ("_template", TEMPLATE.to_string()),
            ("_captcha", CAPTCHA.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_body_defaults_company() {
        let form = ContactForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            message: "Hello".into(),
            ..ContactForm::default()
        };
        let body = serde_json::to_value(form.relay_body()).unwrap();
        assert_eq!(body["company"], "N/A");
        assert_eq!(body["_subject"], "New Contact Inquiry - Asha");
        assert_eq!(body["_template"], "table");
        assert_eq!(body["_captcha"], "false");
    }

    #[test]
    fn application_defaults_position() {
        let app = CareerApplication {
            full_name: "Ravi".into(),
            ..CareerApplication::default()
        };
        let resume = Attachment {
            file_name: "ravi.pdf".into(),
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF".to_vec(),
        };
        let fields = app.relay_fields(&resume);
        let get = |k: &str| fields.iter().find(|(name, _)| *name == k).map(|(_, v)| v.as_str());
        assert_eq!(get("position"), Some("General Application"));
        assert_eq!(get("_subject"), Some("Career Application - General Application"));
        assert_eq!(get("resumeFileName"), Some("ravi.pdf"));
    }
}
