use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lib_site::careers::{fallback_careers, CareersLoader, CareersTier};
use lib_site::loggers::LoggerLocal;
use lib_site::retrieve::{InlineSource, JsonSource, SourceError, StaticJsonSource};
use serde_json::{json, Value};
use tempfile::tempdir;

/// Wraps a source and counts how often it is asked.
struct Counted {
    inner: InlineSource,
    calls: AtomicUsize,
}

impl Counted {
    fn new(inner: InlineSource) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JsonSource for Counted {
    fn describe(&self) -> String {
        self.inner.describe()
    }

    async fn fetch_json(&self) -> Result<Option<Value>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_json().await
    }
}

fn logger() -> Arc<LoggerLocal> {
    Arc::new(LoggerLocal::silent("careers_tiers_test"))
}

fn page(heading: &str, posted: &str) -> Value {
    json!({
        "heading": heading,
        "subheading": "Open roles",
        "positions": [{
            "id": "ml-01",
            "title": "ML Engineer",
            "department": "AI",
            "location": "Pune",
            "type": "Full-time",
            "experience": "2+ years",
            "summary": "Train and ship models.",
            "requirements": ["Python"],
            "responsibilities": ["Ship models"],
            "applyUrl": "mailto:careers@zenture.in",
            "postedDate": posted
        }]
    })
}

#[tokio::test]
async fn valid_cms_tier_wins_and_stops_the_search() {
    let cms = Counted::new(InlineSource::document("cms", page("From CMS", "2026-03-01")));
    let file = Counted::new(InlineSource::document("static", page("From file", "2026-03-01")));

    let load = CareersLoader::new(logger())
        .with_cms(cms.clone())
        .with_static_document(file.clone())
        .load()
        .await;

    assert_eq!(load.tier, CareersTier::Cms);
    assert_eq!(load.page.heading, "From CMS");
    assert_eq!(cms.calls(), 1);
    assert_eq!(file.calls(), 0);
}

#[tokio::test]
async fn invalid_cms_tier_falls_to_static_document() {
    let mut broken = page("From CMS", "2026-03-01");
    broken["positions"][0].as_object_mut().unwrap().remove("postedDate");
    let cms = Counted::new(InlineSource::document("cms", broken));
    let file = Counted::new(InlineSource::document("static", page("From file", "2026-03-01")));

    let load = CareersLoader::new(logger())
        .with_cms(cms)
        .with_static_document(file.clone())
        .load()
        .await;

    assert_eq!(load.tier, CareersTier::StaticDocument);
    assert_eq!(load.page.heading, "From file");
    assert!(load.skipped[0].reason.contains("postedDate"));
    assert_eq!(file.calls(), 1);
}

#[tokio::test]
async fn both_tiers_failing_serves_the_fallback() {
    let cms = Counted::new(InlineSource::failing("cms", SourceError::Transport("offline".into())));
    let file = Counted::new(InlineSource::document("static", json!({"heading": "Only a heading"})));

    let load = CareersLoader::new(logger())
        .with_cms(cms)
        .with_static_document(file)
        .load()
        .await;

    assert_eq!(load.tier, CareersTier::Fallback);
    assert_eq!(load.page, fallback_careers());
    assert_eq!(load.page.positions.len(), 3);
}

#[tokio::test]
async fn static_document_can_be_a_local_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("careers.json");
    std::fs::write(&path, page("From disk", "2026-01-15").to_string()).unwrap();
    let file = StaticJsonSource::parse(path.to_str().unwrap(), Duration::from_secs(1)).unwrap();

    let load = CareersLoader::new(logger())
        .with_cms(Arc::new(InlineSource::empty("cms")))
        .with_static_document(Arc::new(file))
        .load()
        .await;

    assert_eq!(load.tier, CareersTier::StaticDocument);
    assert_eq!(load.page.heading, "From disk");
}

#[tokio::test]
async fn empty_positions_are_a_valid_page() {
    let doc = json!({"heading": "Careers", "subheading": "Nothing open", "positions": []});
    let load = CareersLoader::new(logger())
        .with_cms(Arc::new(InlineSource::document("cms", doc)))
        .load()
        .await;
    assert_eq!(load.tier, CareersTier::Cms);
    assert!(!load.page.has_openings());
}
