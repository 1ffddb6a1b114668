//! # Sanity Query Client
//!
//! A thin client for the Sanity HTTP query API. It is constructed once at
//! startup and handed to every loader that needs CMS documents, so there is
//! no process-global client.
//!
//! ## Wire format:
//! `GET https://<project>.apicdn.sanity.io/v<apiVersion>/data/query/<dataset>?query=<GROQ>`
//! answers with an envelope `{ "result": <document | null>, "ms": <n>, "query": "..." }`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use super::ky_http::ApiClient;
use super::SourceError;

/// Connection settings for one Sanity project/dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    /// Date-style API version, without the leading `v`.
    pub api_version: String,
    /// Read through the API CDN (`apicdn.sanity.io`) instead of the live API.
    pub use_cdn: bool,
    pub timeout: Duration,
}

impl Default for SanityConfig {
    fn default() -> Self {
        Self {
            project_id: "pyodekba".to_string(),
            dataset: "production".to_string(),
            api_version: "2026-02-26".to_string(),
            use_cdn: true,
            timeout: Duration::from_secs(10),
        }
    }
}

impl SanityConfig {
    /// Absolute base URL of the project's query host.
    pub fn base_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!("https://{}.{}.sanity.io/", self.project_id, host)
    }

    /// Relative path of the query endpoint for this dataset.
    pub fn query_path(&self) -> String {
        format!(
            "v{}/data/query/{}",
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}

/// The response envelope of the query endpoint.
#[derive(Debug, Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    result: Option<Value>,
}

/// Read-only client for GROQ queries.
pub struct SanityClient {
    api: ApiClient,
    query_path: String,
}

impl SanityClient {
    /// Builds the client. Content reads are never retried: a failure simply
    /// means the caller falls back to its defaults.
    pub fn new(config: &SanityConfig) -> anyhow::Result<Self> {
        Ok(Self {
            api: ApiClient::new(&config.base_url(), 0, config.timeout)?,
            query_path: config.query_path(),
        })
    }

    /// Runs one GROQ query and returns the `result` member.
    ///
    /// `Ok(None)` means the query matched nothing (`"result": null`).
    pub async fn fetch(&self, groq: &str) -> Result<Option<Value>, SourceError> {
        let envelope: QueryEnvelope = self
            .api
            .get_json(&self.query_path, Some(&[("query", groq)]), None)
            .await?;
        Ok(envelope.result.filter(|doc| !doc.is_null()))
    }
}
