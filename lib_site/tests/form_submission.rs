use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lib_site::forms::{
    Attachment, CareerApplication, ContactForm, FormGate, FormRecipients, FormRelay, FormService, RelayError,
    SubmitError, DEFAULT_MIN_FILL,
};
use lib_site::loggers::LoggerLocal;
use serde_json::Value;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Sent {
    Json { recipient: String, body: Value },
    Multipart { recipient: String, fields: Vec<(&'static str, String)>, file_name: String },
}

/// Records every call and answers with a fixed outcome.
struct RecordingRelay {
    sent: Mutex<Vec<Sent>>,
    outcome: Result<(), RelayError>,
}

impl RecordingRelay {
    fn new(outcome: Result<(), RelayError>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            outcome,
        })
    }

    async fn sent(&self) -> Vec<Sent> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl FormRelay for RecordingRelay {
    async fn send_json(&self, recipient: &str, body: Value) -> Result<(), RelayError> {
        self.sent.lock().await.push(Sent::Json {
            recipient: recipient.to_string(),
            body,
        });
        self.outcome.clone()
    }

    async fn send_multipart(
        &self,
        recipient: &str,
        fields: Vec<(&'static str, String)>,
        attachment: Attachment,
    ) -> Result<(), RelayError> {
        self.sent.lock().await.push(Sent::Multipart {
            recipient: recipient.to_string(),
            fields,
            file_name: attachment.file_name,
        });
        self.outcome.clone()
    }
}

fn service(relay: Arc<RecordingRelay>) -> FormService {
    FormService::new(
        relay,
        FormRecipients::default(),
        Arc::new(LoggerLocal::silent("form_submission_test")),
    )
}

fn settled_gate() -> FormGate {
    FormGate::opened_at(Instant::now() - Duration::from_secs(10), DEFAULT_MIN_FILL)
}

fn contact() -> ContactForm {
    ContactForm {
        name: "Meera".into(),
        email: "meera@example.com".into(),
        company: String::new(),
        message: "We need an IoT pilot.".into(),
        website: String::new(),
    }
}

fn resume() -> Attachment {
    Attachment {
        file_name: "meera.pdf".into(),
        content_type: Some("application/pdf".into()),
        bytes: b"%PDF-1.7".to_vec(),
    }
}

#[tokio::test]
async fn submitting_too_fast_makes_no_network_call() {
    let relay = RecordingRelay::new(Ok(()));
    let forms = service(relay.clone());
    let fresh_gate = FormGate::open(DEFAULT_MIN_FILL);

    let err = forms.submit_contact(&fresh_gate, contact()).await.unwrap_err();
    assert_eq!(err, SubmitError::Blocked);
    assert_eq!(err.user_message(), "Unable to submit right now. Please try again.");
    assert!(relay.sent().await.is_empty());
}

#[tokio::test]
async fn honeypot_blocks_the_careers_form() {
    let relay = RecordingRelay::new(Ok(()));
    let forms = service(relay.clone());
    let application = CareerApplication {
        full_name: "Bot".into(),
        website: "http://spam".into(),
        ..CareerApplication::default()
    };
    let err = forms
        .submit_application(&settled_gate(), application, Some(resume()))
        .await
        .unwrap_err();
    assert_eq!(err, SubmitError::Blocked);
    assert!(relay.sent().await.is_empty());
}

#[tokio::test]
async fn contact_is_relayed_as_json() {
    let relay = RecordingRelay::new(Ok(()));
    let forms = service(relay.clone());

    let receipt = forms.submit_contact(&settled_gate(), contact()).await.unwrap();
    assert_eq!(receipt.message, "Thanks. Your message has been sent to info@zenture.in.");

    let sent = relay.sent().await;
    let Sent::Json { recipient, body } = &sent[0] else {
        panic!("expected a JSON post, got {:?}", sent);
    };
    assert_eq!(recipient, "info@zenture.in");
    assert_eq!(body["company"], "N/A");
    assert_eq!(body["_subject"], "New Contact Inquiry - Meera");
    assert!(body.get("website").is_none());
}

#[tokio::test]
async fn missing_resume_is_reported_without_a_network_call() {
    let relay = RecordingRelay::new(Ok(()));
    let forms = service(relay.clone());
    let err = forms
        .submit_application(&settled_gate(), CareerApplication::default(), None)
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Please attach your resume before submitting.");
    assert!(relay.sent().await.is_empty());
}

#[tokio::test]
async fn application_is_relayed_as_multipart() {
    let relay = RecordingRelay::new(Ok(()));
    let forms = service(relay.clone());
    let application = CareerApplication {
        full_name: "Meera".into(),
        email: "meera@example.com".into(),
        phone: "+91 90000 00000".into(),
        position: "Backend Engineer (Node.js)".into(),
        message: "Hello".into(),
        website: String::new(),
    };

    let receipt = forms
        .submit_application(&settled_gate(), application, Some(resume()))
        .await
        .unwrap();
    assert_eq!(receipt.message, "Application sent to careers@zenture.in.");

    let sent = relay.sent().await;
    let Sent::Multipart { recipient, fields, file_name } = &sent[0] else {
        panic!("expected a multipart post, got {:?}", sent);
    };
    assert_eq!(recipient, "careers@zenture.in");
    assert_eq!(file_name, "meera.pdf");
    assert!(fields.contains(&("_subject", "Career Application - Backend Engineer (Node.js)".to_string())));
}

#[tokio::test]
async fn relay_failure_is_a_generic_message() {
    let relay = RecordingRelay::new(Err(RelayError::Status(500)));
    let forms = service(relay.clone());
    let err = forms.submit_contact(&settled_gate(), contact()).await.unwrap_err();
    assert_eq!(err.user_message(), "Submission failed. Please try again.");
    assert_eq!(relay.sent().await.len(), 1);
}
