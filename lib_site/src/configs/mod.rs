//! # Configuration Module
//!
//! Layered site configuration: built-in defaults, an optional JSON file,
//! then environment variables and command-line flags (both handled by
//! `clap`). A `.env` file is loaded first with `dotenvy`.

#![forbid(unsafe_code)]

pub mod config_site;

pub use config_site::{DEFAULT_MAX_UPLOAD_BYTES, SanityConfigView, SiteConfig, SiteConfigError, SiteSettings};
