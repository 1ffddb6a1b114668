//! # Data Retrieval Module
//!
//! Centralizes every network and file read the site performs, so the
//! content and careers loaders can focus on validation and merging.
//!
//! ## Contained Modules:
//!
//! - **`ky_http`**: A generic HTTP `ApiClient` built on `reqwest` and
//!   `reqwest-middleware`, with optional retries.
//! - **`sanity`**: The Sanity GROQ query client.
//! - **`sources`**: The `JsonSource` trait and its implementations (bound
//!   CMS queries, static JSON documents, inline documents).

use thiserror::Error;

/// Generic HTTP API client with optional retry middleware.
pub mod ky_http;
/// Sanity query API client.
pub mod sanity;
/// The `JsonSource` seam and its implementations.
pub mod sources;

pub use sanity::{SanityClient, SanityConfig};
pub use sources::{fetch_or_none, InlineSource, JsonSource, SanityQuery, StaticJsonSource};

/// Why a source could not produce a document.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    /// The request never produced a usable answer (connection, TLS, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP request failed with status: {status}")]
    Status { status: u16, body: Option<String> },

    /// The payload was not valid JSON.
    #[error("JSON parse error: {0}")]
    Decode(String),

    /// Local file access failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl SourceError {
    /// Stable short name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Transport(_) => "transport",
            SourceError::Status { .. } => "status",
            SourceError::Decode(_) => "decode",
            SourceError::Io(_) => "io",
        }
    }
}
