//! # Careers Module
//!
//! Model, validation and tiered loading of the careers page.
//!
//! ## Contained Modules:
//! - **`model`**: `CareersPage`, `CareerPosition` and the closed
//!   `EmploymentType` set, plus newest-first ordering.
//! - **`validate`**: whole-object validation of untrusted documents.
//! - **`fallback`**: the compiled-in page.
//! - **`loader`**: CMS, then static document, then fallback.

#![forbid(unsafe_code)]

pub mod fallback;
pub mod loader;
pub mod model;
pub mod validate;

pub use fallback::fallback_careers;
pub use loader::{CareersLoad, CareersLoader, CareersTier, TierSkip};
pub use model::{CareerPosition, CareersPage, EmploymentType, NO_OPEN_POSITIONS};
pub use validate::{validate_careers, validate_position};

/// GROQ query for the careers page document.
pub const CAREERS_QUERY: &str = r#"*[_type == "careersPage"][0]{
  heading,
  subheading,
  "positions": positions[]{
    id,
    title,
    department,
    location,
    type,
    experience,
    summary,
    requirements,
    responsibilities,
    applyUrl,
    postedDate
  }
}"#;

/// Default location of the static careers document, the file a static host
/// serves as `/cms/careers.json`.
pub const DEFAULT_STATIC_CAREERS: &str = "public/cms/careers.json";
