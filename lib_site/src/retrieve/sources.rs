//! # JSON Sources
//!
//! Every loader in the crate reads untrusted JSON from something that
//! implements `JsonSource`: a bound CMS query, a static JSON document served
//! over HTTP, or a file on disk. Tests substitute their own sources.
//!
//! Errors are kept precise at this level (`SourceError`) and collapsed to
//! "no data" only at the loader boundary by `fetch_or_none`, which also
//! logs what went wrong.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use serde_json::{json, Value};

use super::ky_http::ApiClient;
use super::sanity::SanityClient;
use super::SourceError;
use crate::loggers::LoggerLocal;

/// A place untrusted JSON comes from.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Short label used in logs (e.g. `sanity:careersPage`).
    fn describe(&self) -> String;

    /// Fetches the document. `Ok(None)` means the source answered but holds
    /// no document.
    async fn fetch_json(&self) -> Result<Option<Value>, SourceError>;
}

/// Fetches from `source`, logging any failure, and collapses every error
/// to `None`. Never fails.
pub async fn fetch_or_none(source: &dyn JsonSource, logger: &LoggerLocal) -> Option<Value> {
    match source.fetch_json().await {
        Ok(Some(doc)) => {
            logger
                .debug("Source returned a document", Some(json!({"source": source.describe()})))
                .await;
            Some(doc)
        }
        Ok(None) => {
            logger
                .info("Source holds no document", Some(json!({"source": source.describe()})))
                .await;
            None
        }
        Err(e) => {
            logger
                .warn(
                    &format!("Source fetch failed: {}", e),
                    Some(json!({"source": source.describe(), "kind": e.kind()})),
                )
                .await;
            None
        }
    }
}

/// A GROQ query bound to a client, usable wherever a `JsonSource` is expected.
pub struct SanityQuery {
    client: Arc<SanityClient>,
    label: String,
    groq: String,
}

impl SanityQuery {
    pub fn new(client: Arc<SanityClient>, label: &str, groq: &str) -> Self {
        Self {
            client,
            label: label.to_string(),
            groq: groq.to_string(),
        }
    }

    pub fn groq(&self) -> &str {
        &self.groq
    }
}

#[async_trait]
impl JsonSource for SanityQuery {
    fn describe(&self) -> String {
        format!("sanity:{}", self.label)
    }

    async fn fetch_json(&self) -> Result<Option<Value>, SourceError> {
        self.client.fetch(&self.groq).await
    }
}

enum StaticLocation {
    Http(ApiClient),
    File(PathBuf),
}

/// A static JSON document, either served over HTTP or read from disk.
///
/// HTTP reads always bypass caches so a freshly deployed document is seen
/// immediately.
pub struct StaticJsonSource {
    location: StaticLocation,
    label: String,
}

impl StaticJsonSource {
    /// `location` starting with `http://` or `https://` is fetched over the
    /// network; anything else is treated as a filesystem path.
    pub fn parse(location: &str, timeout: Duration) -> anyhow::Result<Self> {
        let trimmed = location.trim();
        let source = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            StaticLocation::Http(ApiClient::new(trimmed, 0, timeout)?)
        } else {
            StaticLocation::File(PathBuf::from(trimmed))
        };
        Ok(Self {
            location: source,
            label: trimmed.to_string(),
        })
    }

    /// Request headers asking every cache on the way to revalidate.
    pub fn no_cache_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers
    }
}

#[async_trait]
impl JsonSource for StaticJsonSource {
    fn describe(&self) -> String {
        format!("static:{}", self.label)
    }

    async fn fetch_json(&self) -> Result<Option<Value>, SourceError> {
        match &self.location {
            StaticLocation::Http(client) => {
                let doc: Value = client.get_json("", None, Some(Self::no_cache_headers())).await?;
                Ok(Some(doc).filter(|doc| !doc.is_null()))
            }
            StaticLocation::File(path) => {
                let raw = match tokio::fs::read_to_string(path).await {
                    Ok(raw) => raw,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                    Err(e) => return Err(SourceError::Io(e.to_string())),
                };
                let doc: Value =
                    serde_json::from_str(&raw).map_err(|e| SourceError::Decode(e.to_string()))?;
                Ok(Some(doc).filter(|doc| !doc.is_null()))
            }
        }
    }
}

/// A fixed in-memory document. Used for local previews and tests.
pub struct InlineSource {
    label: String,
    outcome: Result<Option<Value>, SourceError>,
}

impl InlineSource {
    pub fn document(label: &str, doc: Value) -> Self {
        Self {
            label: label.to_string(),
            outcome: Ok(Some(doc)),
        }
    }

    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            outcome: Ok(None),
        }
    }

    pub fn failing(label: &str, error: SourceError) -> Self {
        Self {
            label: label.to_string(),
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl JsonSource for InlineSource {
    fn describe(&self) -> String {
        format!("inline:{}", self.label)
    }

    async fn fetch_json(&self) -> Result<Option<Value>, SourceError> {
        self.outcome.clone()
    }
}
