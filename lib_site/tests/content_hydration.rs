use std::sync::Arc;

use lib_site::content::{
    default_site_content, hydrate_site_content, load_site_content, IconKey, SiteContentContext, FALLBACK_GLYPH,
};
use lib_site::loggers::LoggerLocal;
use lib_site::retrieve::{InlineSource, SourceError};
use serde_json::{json, Value};

fn logger() -> LoggerLocal {
    LoggerLocal::silent("content_hydration_test")
}

#[test]
fn absent_or_malformed_payload_yields_defaults() {
    let defaults = default_site_content();
    for payload in [None, Some(json!(null)), Some(json!("text")), Some(json!([1, 2])), Some(json!(42))] {
        assert_eq!(hydrate_site_content(&defaults, payload.as_ref()), defaults, "{:?}", payload);
    }
}

#[test]
fn valid_list_is_used_verbatim_and_alone() {
    let defaults = default_site_content();
    let payload = json!({
        "about": {"highlights": ["Small team", "Big impact"]},
        "iot": {"useCases": ["Cold chain"]}
    });
    let merged = hydrate_site_content(&defaults, Some(&payload));

    assert_eq!(merged.about.highlights, vec!["Small team", "Big impact"]);
    assert_eq!(merged.about.values, defaults.about.values);
    assert_eq!(merged.about.title_prefix, defaults.about.title_prefix);
    assert_eq!(merged.iot.use_cases, vec!["Cold chain"]);
    assert_eq!(merged.iot.features, defaults.iot.features);
    assert_eq!(merged.services, defaults.services);
}

#[test]
fn empty_list_falls_back_to_the_default_list() {
    let defaults = default_site_content();
    let payload = json!({"contact": {"items": []}});
    let merged = hydrate_site_content(&defaults, Some(&payload));

    assert_eq!(merged.contact.items, defaults.contact.items);
    assert_eq!(merged.about, defaults.about);
}

#[test]
fn non_array_list_falls_back() {
    let defaults = default_site_content();
    let payload = json!({"footer": {"quickLinks": "Home", "description": "Custom footer"}});
    let merged = hydrate_site_content(&defaults, Some(&payload));
    assert_eq!(merged.footer.quick_links, defaults.footer.quick_links);
    assert_eq!(merged.footer.description, "Custom footer");
}

#[test]
fn closed_enum_violation_rejects_the_list() {
    let defaults = default_site_content();
    let payload = json!({"footer": {"socialLinks": [
        {"platform": "github", "link": "https://github.com/zenture"},
        {"platform": "myspace", "link": "#"}
    ]}});
    let merged = hydrate_site_content(&defaults, Some(&payload));
    assert_eq!(merged.footer.social_links, defaults.footer.social_links);
}

#[test]
fn hydration_is_idempotent() {
    let defaults = default_site_content();
    let payload = json!({
        "navbarLinks": [{"name": "Jobs", "href": "/careers"}],
        "about": {"titlePrefix": "Hello", "values": [
            {"icon": "unknown-thing", "title": "X", "description": "Y"}
        ]},
        "trustedBy": {"eyebrow": "Friends"},
        "contact": {"items": []}
    });
    let once = hydrate_site_content(&defaults, Some(&payload));
    let wire: Value = serde_json::to_value(&once).unwrap();
    let twice = hydrate_site_content(&defaults, Some(&wire));
    assert_eq!(once, twice);
}

#[test]
fn unknown_icon_resolves_to_the_fallback_glyph() {
    let defaults = default_site_content();
    let payload = json!({"research": {"achievements": [
        {"icon": "trophy", "title": "Prize", "description": "Won"}
    ]}});
    let merged = hydrate_site_content(&defaults, Some(&payload));
    let icon = &merged.research.achievements[0].icon;
    assert_eq!(icon, &IconKey::Unknown("trophy".into()));
    assert_eq!(icon.glyph(), FALLBACK_GLYPH);
}

#[tokio::test]
async fn network_failure_keeps_default_about_icons() {
    let defaults = default_site_content();
    let source = InlineSource::failing("siteContent", SourceError::Transport("dns failure".into()));
    let hydration = load_site_content(&defaults, &source, &logger()).await;

    assert!(!hydration.from_remote);
    let keys: Vec<&str> = hydration.content.about.values.iter().map(|v| v.icon.as_key()).collect();
    assert_eq!(keys, vec!["target", "lightbulb", "rocket"]);
}

#[tokio::test]
async fn null_result_is_absence() {
    let defaults = default_site_content();
    let hydration = load_site_content(&defaults, &InlineSource::empty("siteContent"), &logger()).await;
    assert_eq!(hydration.content, defaults);
    assert!(hydration.rejected.is_empty());
}

#[tokio::test]
async fn context_publishes_once_hydrated() {
    let source = Arc::new(InlineSource::document(
        "siteContent",
        json!({"services": {"ctaText": "Talk to us"}}),
    ));
    let (ctx, handle) = SiteContentContext::hydrate_in_background(source, Arc::new(logger()));
    let reader = ctx.clone();
    handle.await.unwrap();
    assert_eq!(reader.current().services.cta_text, "Talk to us");
    assert_eq!(ctx.current().services.items.len(), 6);
}
