//! # Careers Loader
//!
//! Resolves the careers page from up to three ordered tiers:
//!
//! 1. the CMS `careersPage` document,
//! 2. a static careers JSON document (HTTP URL or local file),
//! 3. the compiled-in fallback page.
//!
//! Each tier is validated as a whole. The first valid tier wins; later tiers
//! are not consulted. The loader itself never fails.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;

use super::fallback::fallback_careers;
use super::model::CareersPage;
use super::validate::validate_careers;
use crate::loggers::LoggerLocal;
use crate::retrieve::{fetch_or_none, JsonSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CareersTier {
    Cms,
    StaticDocument,
    Fallback,
}

impl fmt::Display for CareersTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CareersTier::Cms => "cms",
            CareersTier::StaticDocument => "static document",
            CareersTier::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Why a tier was passed over.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSkip {
    pub tier: CareersTier,
    pub reason: String,
}

/// The resolved page and how it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct CareersLoad {
    pub page: CareersPage,
    pub tier: CareersTier,
    pub skipped: Vec<TierSkip>,
}

pub struct CareersLoader {
    cms: Option<Arc<dyn JsonSource>>,
    static_document: Option<Arc<dyn JsonSource>>,
    logger: Arc<LoggerLocal>,
}

impl CareersLoader {
    pub fn new(logger: Arc<LoggerLocal>) -> Self {
        Self {
            cms: None,
            static_document: None,
            logger,
        }
    }

    pub fn with_cms(mut self, source: Arc<dyn JsonSource>) -> Self {
        self.cms = Some(source);
        self
    }

    pub fn with_static_document(mut self, source: Arc<dyn JsonSource>) -> Self {
        self.static_document = Some(source);
        self
    }

    /// Tries one tier. `Err` carries the reason it was skipped.
    async fn try_tier(&self, source: Option<&Arc<dyn JsonSource>>) -> Result<CareersPage, String> {
        let Some(source) = source else {
            return Err("not configured".to_string());
        };
        let Some(doc) = fetch_or_none(source.as_ref(), &self.logger).await else {
            return Err(format!("{} returned no document", source.describe()));
        };
        validate_careers(&doc).map_err(|e| e.to_string())
    }

    pub async fn load(&self) -> CareersLoad {
        let mut skipped = Vec::new();

        for (tier, source) in [
            (CareersTier::Cms, self.cms.as_ref()),
            (CareersTier::StaticDocument, self.static_document.as_ref()),
        ] {
            match self.try_tier(source).await {
                Ok(page) => {
                    self.logger
                        .info(
                            "Careers page loaded",
                            Some(json!({"tier": tier, "positions": page.positions.len()})),
                        )
                        .await;
                    return CareersLoad { page, tier, skipped };
                }
                Err(reason) => {
                    self.logger
                        .warn(
                            &format!("Careers tier {} skipped", tier),
                            Some(json!({"tier": tier, "reason": reason})),
                        )
                        .await;
                    skipped.push(TierSkip { tier, reason });
                }
            }
        }

        self.logger
            .warn("Serving fallback careers page", Some(json!({"skipped": skipped.len()})))
            .await;
        CareersLoad {
            page: fallback_careers(),
            tier: CareersTier::Fallback,
            skipped,
        }
    }
}
