//! # lib_site
//!
//! Shared library behind the Zenture website. Every top-level folder is a
//! feature-gated module so the server, the tools and the live tests can pull
//! in exactly the pieces they need.
//!
//! ## Modules:
//! - **`configs`**: layered `SiteConfig` (defaults, JSON file, env, CLI).
//! - **`loggers`**: `LoggerLocal` structured logging with file rotation.
//! - **`retrieve`**: the retrying `ApiClient`, the Sanity query client and
//!   the `JsonSource` seam used by every loader.
//! - **`content`**: site content schema, default table, hydrator and the
//!   shared read-only content context.
//! - **`careers`**: careers page model, shape validation and tiered loader.
//! - **`forms`**: anti-spam gate, relay payloads and form submission.
//! - **`routing`**: path to page resolution.
//! - **`utils`**: timestamp helpers and the `ShapeError` shared by content
//!   and careers validation.

#![forbid(unsafe_code)]

#[cfg(feature = "configs")]
pub mod configs;
#[cfg(feature = "loggers")]
pub mod loggers;
#[cfg(feature = "retrieve")]
pub mod retrieve;
#[cfg(feature = "content")]
pub mod content;
#[cfg(feature = "careers")]
pub mod careers;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "routing")]
pub mod routing;
#[cfg(feature = "loggers")]
pub mod utils;
