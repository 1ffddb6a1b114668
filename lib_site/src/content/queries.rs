//! Read-side helpers over hydrated content: category filters and blog
//! article lookup with its SEO metadata.

use serde::Serialize;

use super::schema::{BlogContent, BlogPost, PortfolioItem};

/// The category that selects every item.
pub const ALL_CATEGORY: &str = "All";

const SITE_NAME: &str = "Zenture IT Solutions";
const SITE_ORIGIN: &str = "https://zenture.in";

/// Anything listed under a category tab.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for PortfolioItem {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Items shown under `category`, in their original order.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORY || item.category() == category)
        .collect()
}

/// Page metadata for a blog article.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSeo {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
}

impl ArticleSeo {
    pub fn for_post(post: &BlogPost) -> Self {
        let non_empty = |v: &Option<String>| v.as_deref().filter(|s| !s.trim().is_empty()).map(str::to_string);
        Self {
            title: non_empty(&post.meta_title).unwrap_or_else(|| format!("{} | {}", post.title, SITE_NAME)),
            description: non_empty(&post.meta_description).unwrap_or_else(|| post.excerpt.clone()),
            canonical_url: format!("{}/blog/{}", SITE_ORIGIN, post.slug),
        }
    }

    pub fn not_found(slug: &str) -> Self {
        Self {
            title: format!("Article Not Found - {}", SITE_NAME),
            description: "The requested blog article was not found.".to_string(),
            canonical_url: format!("{}/blog/{}", SITE_ORIGIN, slug),
        }
    }
}

/// Finds the post whose slug matches exactly.
pub fn find_post<'a>(blog: &'a BlogContent, slug: &str) -> Option<&'a BlogPost> {
    blog.posts.iter().find(|post| post.slug == slug)
}
