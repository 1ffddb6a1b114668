//! # Utilities Module
//!
//! General-purpose helpers shared across `lib_site`: timestamp handling used
//! by log records and the careers date ordering, and the `ShapeError` type
//! reported by every validator of untrusted JSON.

/// Timestamp formatting and lenient date parsing.
pub mod time;

/// Tagged validation failures for untrusted documents.
#[cfg(any(feature = "content", feature = "careers"))]
pub mod shape;

pub use time::{current_datetime_rfc9557, parse_posted_date};

#[cfg(any(feature = "content", feature = "careers"))]
pub use shape::ShapeError;
