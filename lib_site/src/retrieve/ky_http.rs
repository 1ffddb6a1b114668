//! # JSON over HTTP
//!
//! `ApiClient` is the one HTTP reader behind every remote `JsonSource`: a
//! `reqwest` client with a base URL, a per-request timeout and, when asked
//! for, exponential-backoff retries on transient failures.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use url::Url;

use super::SourceError;

const USER_AGENT: &str = "ZentureSite/1.0";

/// Reads JSON documents relative to a base URL.
pub struct ApiClient {
    inner: ClientWithMiddleware,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for `base_url`.
    ///
    /// `max_retries == 0` installs no retry middleware, so a failure is
    /// reported after a single attempt.
    ///
    /// # Errors
    /// Fails if `base_url` is not absolute or the TLS backend cannot be
    /// initialised.
    pub fn new(base_url: &str, max_retries: u32, timeout: Duration) -> anyhow::Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL {} (must be absolute): {}", base_url, e))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let mut builder = ClientBuilder::new(http);
        if max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            inner: builder.build(),
            base_url: url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `path` onto the base URL and appends percent-encoded `query`
    /// pairs.
    pub fn build_url(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<Url, SourceError> {
        let mut full_url = self
            .base_url
            .join(path)
            .map_err(|e| SourceError::Transport(format!("bad path {}: {}", path, e)))?;
        if let Some(pairs) = query {
            full_url.query_pairs_mut().extend_pairs(pairs.iter().copied());
        }
        Ok(full_url)
    }

    /// GETs `path` and decodes the body as `T`.
    ///
    /// Non-2xx answers become `SourceError::Status` carrying the body text;
    /// a 2xx body that does not decode as `T` is `SourceError::Decode`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
        headers: Option<HeaderMap>,
    ) -> Result<T, SourceError> {
        let url = self.build_url(path, query)?;
        let mut req = self
            .inner
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(h) = headers {
            req = req.headers(h);
        }

        let response = req.send().await.map_err(|e| SourceError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: response.text().await.ok().filter(|b| !b.is_empty()),
            });
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                SourceError::Decode(e.to_string())
            } else {
                SourceError::Transport(e.to_string())
            }
        })
    }
}
