//! # Content Hydrator
//!
//! Merges an untrusted, possibly partial CMS document over the default
//! content table.
//!
//! ## Merge rules:
//! - **Sections** are hydrated independently. A section that is absent,
//!   `null` or not an object is taken wholly from the defaults.
//! - **Scalars** take the fetched value when it is present and of the right
//!   type, otherwise the default value of that field.
//! - **Lists** take the fetched array only when it is non-empty and every
//!   element has the element shape. Otherwise the whole default list is used.
//!   Elements are never merged one by one.
//!
//! Hydration never fails. Anything that was present but rejected is reported
//! as a `ShapeError` in the `Hydration` result so callers can log it.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::schema::*;
use crate::utils::ShapeError;

/// The merged content plus every fetched field that was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Hydration<T> {
    pub content: T,
    /// `true` when a usable document was supplied at all.
    pub from_remote: bool,
    pub rejected: Vec<ShapeError>,
}

/// Validates a fetched list: non-empty array whose elements all deserialize.
pub fn take_list<T: DeserializeOwned>(path: &str, value: &Value) -> Result<Vec<T>, ShapeError> {
    let Value::Array(items) = value else {
        return Err(ShapeError::new(path, "expected an array"));
    };
    if items.is_empty() {
        return Err(ShapeError::new(path, "empty list"));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            T::deserialize(item).map_err(|e| ShapeError::new(format!("{}[{}]", path, i), e.to_string()))
        })
        .collect()
}

/// Field-by-field reader over one object of the fetched document.
struct Overlay<'a> {
    path: String,
    fields: Option<&'a Map<String, Value>>,
    rejected: &'a mut Vec<ShapeError>,
}

impl<'a> Overlay<'a> {
    fn new(path: &str, value: Option<&'a Value>, rejected: &'a mut Vec<ShapeError>) -> Self {
        let fields = match value {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                rejected.push(ShapeError::new(path, "expected an object"));
                None
            }
        };
        Self {
            path: path.to_string(),
            fields,
            rejected,
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    fn text(&mut self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.rejected
                    .push(ShapeError::new(ShapeError::join(&self.path, key), "expected a string"));
                default.to_string()
            }
            None => default.to_string(),
        }
    }

    fn list<T: DeserializeOwned + Clone>(&mut self, key: &str, default: &[T]) -> Vec<T> {
        let Some(value) = self.get(key) else {
            return default.to_vec();
        };
        match take_list(&ShapeError::join(&self.path, key), value) {
            Ok(items) => items,
            Err(e) => {
                self.rejected.push(e);
                default.to_vec()
            }
        }
    }
}

fn about(d: &AboutContent, mut o: Overlay<'_>) -> AboutContent {
    AboutContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        years_value: o.text("yearsValue", &d.years_value),
        years_label: o.text("yearsLabel", &d.years_label),
        paragraph1: o.text("paragraph1", &d.paragraph1),
        paragraph2: o.text("paragraph2", &d.paragraph2),
        highlights: o.list("highlights", &d.highlights),
        values: o.list("values", &d.values),
    }
}

fn services(d: &ServicesContent, mut o: Overlay<'_>) -> ServicesContent {
    ServicesContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        cta_text: o.text("ctaText", &d.cta_text),
        cta_href: o.text("ctaHref", &d.cta_href),
        items: o.list("items", &d.items),
    }
}

fn iot(d: &IotContent, mut o: Overlay<'_>) -> IotContent {
    IotContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        implementation_title: o.text("implementationTitle", &d.implementation_title),
        implementation_description: o.text("implementationDescription", &d.implementation_description),
        application_area_title: o.text("applicationAreaTitle", &d.application_area_title),
        features: o.list("features", &d.features),
        use_cases: o.list("useCases", &d.use_cases),
    }
}

fn portfolio(d: &PortfolioContent, mut o: Overlay<'_>) -> PortfolioContent {
    PortfolioContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        categories: o.list("categories", &d.categories),
        cta_text: o.text("ctaText", &d.cta_text),
        cta_href: o.text("ctaHref", &d.cta_href),
        items: o.list("items", &d.items),
    }
}

fn blog(d: &BlogContent, mut o: Overlay<'_>) -> BlogContent {
    BlogContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        categories: o.list("categories", &d.categories),
        posts: o.list("posts", &d.posts),
    }
}

fn research(d: &ResearchContent, mut o: Overlay<'_>) -> ResearchContent {
    ResearchContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        lab_title: o.text("labTitle", &d.lab_title),
        lab_description: o.text("labDescription", &d.lab_description),
        publication_section_title: o.text("publicationSectionTitle", &d.publication_section_title),
        areas: o.list("areas", &d.areas),
        publications: o.list("publications", &d.publications),
        achievements: o.list("achievements", &d.achievements),
    }
}

fn testimonials(d: &TestimonialsContent, mut o: Overlay<'_>) -> TestimonialsContent {
    TestimonialsContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        items: o.list("items", &d.items),
        stats: o.list("stats", &d.stats),
    }
}

fn contact(d: &ContactContent, mut o: Overlay<'_>) -> ContactContent {
    ContactContent {
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        info_title: o.text("infoTitle", &d.info_title),
        info_description: o.text("infoDescription", &d.info_description),
        response_title: o.text("responseTitle", &d.response_title),
        response_text: o.text("responseText", &d.response_text),
        items: o.list("items", &d.items),
    }
}

fn footer(d: &FooterContent, mut o: Overlay<'_>) -> FooterContent {
    FooterContent {
        description: o.text("description", &d.description),
        quick_links: o.list("quickLinks", &d.quick_links),
        services: o.list("services", &d.services),
        social_links: o.list("socialLinks", &d.social_links),
        legal_links: o.list("legalLinks", &d.legal_links),
    }
}

fn trusted_by(d: &TrustedByContent, mut o: Overlay<'_>) -> TrustedByContent {
    TrustedByContent {
        eyebrow: o.text("eyebrow", &d.eyebrow),
        title_prefix: o.text("titlePrefix", &d.title_prefix),
        title_highlight: o.text("titleHighlight", &d.title_highlight),
        subtitle: o.text("subtitle", &d.subtitle),
        badge_text: o.text("badgeText", &d.badge_text),
    }
}

/// Hydrates the whole site and reports what was rejected.
pub fn hydrate_with_report(defaults: &SiteContent, payload: Option<&Value>) -> Hydration<SiteContent> {
    let mut rejected = Vec::new();
    let root = match payload {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Null) | None => None,
        Some(_) => {
            rejected.push(ShapeError::new("siteContent", "expected an object"));
            None
        }
    };
    let from_remote = root.is_some();
    let section = |name: &str| root.and_then(|map| map.get(name));

    // // navbarLinks is a list at the document root
    let navbar_links = match section("navbarLinks").filter(|v| !v.is_null()) {
        Some(value) => take_list("navbarLinks", value).unwrap_or_else(|e| {
            rejected.push(e);
            defaults.navbar_links.clone()
        }),
        None => defaults.navbar_links.clone(),
    };

    let content = SiteContent {
        navbar_links,
        about: about(&defaults.about, Overlay::new("about", section("about"), &mut rejected)),
        services: services(&defaults.services, Overlay::new("services", section("services"), &mut rejected)),
        iot: iot(&defaults.iot, Overlay::new("iot", section("iot"), &mut rejected)),
        portfolio: portfolio(&defaults.portfolio, Overlay::new("portfolio", section("portfolio"), &mut rejected)),
        blog: blog(&defaults.blog, Overlay::new("blog", section("blog"), &mut rejected)),
        research: research(&defaults.research, Overlay::new("research", section("research"), &mut rejected)),
        testimonials: testimonials(
            &defaults.testimonials,
            Overlay::new("testimonials", section("testimonials"), &mut rejected),
        ),
        contact: contact(&defaults.contact, Overlay::new("contact", section("contact"), &mut rejected)),
        footer: footer(&defaults.footer, Overlay::new("footer", section("footer"), &mut rejected)),
        trusted_by: trusted_by(&defaults.trusted_by, Overlay::new("trustedBy", section("trustedBy"), &mut rejected)),
    };

    Hydration {
        content,
        from_remote,
        rejected,
    }
}

/// Merges `payload` over `defaults`. Never fails; absent or malformed input
/// yields the defaults.
pub fn hydrate_site_content(defaults: &SiteContent, payload: Option<&Value>) -> SiteContent {
    hydrate_with_report(defaults, payload).content
}

/// Merges a fetched `hero` document over the default hero copy.
pub fn hydrate_hero(defaults: &HeroContent, payload: Option<&Value>) -> Hydration<HeroContent> {
    let mut rejected = Vec::new();
    let from_remote = matches!(payload, Some(Value::Object(_)));
    let mut o = Overlay::new("hero", payload, &mut rejected);
    let content = HeroContent {
        badge_text: o.text("badgeText", &defaults.badge_text),
        title_line1: o.text("titleLine1", &defaults.title_line1),
        title_highlight: o.text("titleHighlight", &defaults.title_highlight),
        description: o.text("description", &defaults.description),
        primary_button_text: o.text("primaryButtonText", &defaults.primary_button_text),
        primary_button_link: o.text("primaryButtonLink", &defaults.primary_button_link),
        secondary_button_text: o.text("secondaryButtonText", &defaults.secondary_button_text),
        secondary_button_link: o.text("secondaryButtonLink", &defaults.secondary_button_link),
    };
    Hydration {
        content,
        from_remote,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::{default_hero, default_site_content};
    use crate::content::icons::IconKey;
    use serde_json::json;

    #[test]
    fn partial_section_keeps_missing_scalars() {
        let defaults = default_site_content();
        let payload = json!({"about": {"titlePrefix": "Meet", "yearsValue": 20}});
        let report = hydrate_with_report(&defaults, Some(&payload));

        assert_eq!(report.content.about.title_prefix, "Meet");
        assert_eq!(report.content.about.years_value, defaults.about.years_value);
        assert_eq!(report.content.about.subtitle, defaults.about.subtitle);
        assert_eq!(report.rejected, vec![ShapeError::new("about.yearsValue", "expected a string")]);
    }

    #[test]
    fn one_bad_element_rejects_the_whole_list() {
        let defaults = default_site_content();
        let payload = json!({"services": {"items": [
            {"icon": "globe", "title": "Web", "description": "Sites", "color": "x"},
            {"icon": "code", "title": "Broken"}
        ]}});
        let report = hydrate_with_report(&defaults, Some(&payload));
        assert_eq!(report.content.services.items, defaults.services.items);
        assert_eq!(report.rejected.len(), 1);
        assert!(report.rejected[0].path.starts_with("services.items[1]"));
    }

    #[test]
    fn unknown_icon_is_kept_in_a_valid_list() {
        let defaults = default_site_content();
        let payload = json!({"about": {"values": [
            {"icon": "hologram", "title": "Vision", "description": "Look ahead"}
        ]}});
        let merged = hydrate_site_content(&defaults, Some(&payload));
        assert_eq!(merged.about.values.len(), 1);
        assert_eq!(merged.about.values[0].icon, IconKey::Unknown("hologram".into()));
        assert_eq!(merged.about.values[0].icon.glyph(), "Target");
    }

    #[test]
    fn non_object_section_falls_back_wholly() {
        let defaults = default_site_content();
        let payload = json!({"footer": "nope", "navbarLinks": null});
        let report = hydrate_with_report(&defaults, Some(&payload));
        assert_eq!(report.content.footer, defaults.footer);
        assert_eq!(report.content.navbar_links, defaults.navbar_links);
        assert!(report.from_remote);
    }

    #[test]
    fn hero_scalars_overlay_individually() {
        let defaults = default_hero();
        let payload = json!({"badgeText": "New", "description": null});
        let hero = hydrate_hero(&defaults, Some(&payload)).content;
        assert_eq!(hero.badge_text, "New");
        assert_eq!(hero.description, defaults.description);
        assert_eq!(hero.primary_button_link, "#contact");
    }
}
