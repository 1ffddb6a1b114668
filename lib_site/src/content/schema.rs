//! # Content Schema
//!
//! Typed records for every editable section of the site. Field names follow
//! the CMS documents (camelCase on the wire). These types carry shape only;
//! merging rules live in `hydrate`.

use serde::{Deserialize, Serialize};

use super::icons::IconKey;

/// Root aggregate: exactly eleven named sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub navbar_links: Vec<NavLink>,
    pub about: AboutContent,
    pub services: ServicesContent,
    pub iot: IotContent,
    pub portfolio: PortfolioContent,
    pub blog: BlogContent,
    pub research: ResearchContent,
    pub testimonials: TestimonialsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
    pub trusted_by: TrustedByContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

// // About

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutValue {
    pub icon: IconKey,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub years_value: String,
    pub years_label: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub highlights: Vec<String>,
    pub values: Vec<AboutValue>,
}

// // Services

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub icon: IconKey,
    pub title: String,
    pub description: String,
    /// Tailwind gradient stops, e.g. `from-cyan-500 to-blue-500`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_href: String,
    pub items: Vec<ServiceItem>,
}

// // IoT

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IotFeature {
    pub icon: IconKey,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IotContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub implementation_title: String,
    pub implementation_description: String,
    pub application_area_title: String,
    pub features: Vec<IotFeature>,
    pub use_cases: Vec<String>,
}

// // Portfolio

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon: IconKey,
    pub gradient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub cta_text: String,
    pub cta_href: String,
    pub items: Vec<PortfolioItem>,
}

// // Blog

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    pub read_time: String,
    pub category: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub posts: Vec<BlogPost>,
}

// // Research

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchArea {
    pub icon: IconKey,
    pub title: String,
    pub description: String,
    pub publications: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchPublication {
    pub title: String,
    pub journal: String,
    pub year: String,
    pub authors: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchAchievement {
    pub icon: IconKey,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub lab_title: String,
    pub lab_description: String,
    pub publication_section_title: String,
    pub areas: Vec<ResearchArea>,
    pub publications: Vec<ResearchPublication>,
    pub achievements: Vec<ResearchAchievement>,
}

// // Testimonials

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialItem {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub organization: String,
    pub content: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialStat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub items: Vec<TestimonialItem>,
    pub stats: Vec<TestimonialStat>,
}

// // Contact

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfoItem {
    #[serde(rename = "type")]
    pub kind: ContactKind,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub info_title: String,
    pub info_description: String,
    pub response_title: String,
    pub response_text: String,
    pub items: Vec<ContactInfoItem>,
}

// // Footer

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub description: String,
    pub quick_links: Vec<String>,
    pub services: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub legal_links: Vec<LegalLink>,
}

// // Trusted by

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedByContent {
    pub eyebrow: String,
    pub title_prefix: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub badge_text: String,
}

/// Hero banner copy, stored as its own CMS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub badge_text: String,
    pub title_line1: String,
    pub title_highlight: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_link: String,
    pub secondary_button_text: String,
    pub secondary_button_link: String,
}
