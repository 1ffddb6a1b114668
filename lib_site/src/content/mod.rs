//! # Site Content Module
//!
//! Everything about the editable copy of the site: its typed shape, the
//! compiled-in defaults, the hydrator that merges CMS documents over them,
//! and the context that hands the result to readers.
//!
//! ## Core Features:
//! - **Closed icon set** with a fallback glyph for unknown keys.
//! - **Section-wise hydration**: scalars per field, lists all-or-nothing.
//! - **Background publication** through a `tokio::sync::watch` channel.

#![forbid(unsafe_code)]

pub mod context;
pub mod defaults;
pub mod hydrate;
pub mod icons;
pub mod queries;
pub mod schema;

pub use context::{load_hero, load_site_content, ContentContext, HeroContext, Publication, SiteContentContext};
pub use defaults::{default_hero, default_site_content};
pub use hydrate::{hydrate_hero, hydrate_site_content, hydrate_with_report, Hydration};
pub use icons::{IconKey, FALLBACK_GLYPH};
pub use queries::{filter_by_category, find_post, ArticleSeo, ALL_CATEGORY};
pub use schema::*;

/// GROQ query for the site content document.
pub const SITE_CONTENT_QUERY: &str = r#"*[_type == "siteContent"][0]"#;

/// GROQ query for the hero document.
pub const HERO_QUERY: &str = r#"*[_type == "hero"][0]{
  badgeText,
  titleLine1,
  titleHighlight,
  description,
  primaryButtonText,
  primaryButtonLink,
  secondaryButtonText,
  secondaryButtonLink
}"#;
