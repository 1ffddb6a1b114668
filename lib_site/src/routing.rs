//! Path to page resolution. The site has one alternate page, `/careers`;
//! every other path shows the home composition.

use serde::Serialize;

pub const CAREERS_PATH: &str = "/careers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Home,
    Careers,
}

impl Route {
    /// Exact match only: `/careers/`, `/Careers` and `/careers?x` are home.
    pub fn resolve(path: &str) -> Route {
        if path == CAREERS_PATH {
            Route::Careers
        } else {
            Route::Home
        }
    }

    /// Sections rendered for this route, top to bottom.
    pub fn sections(&self) -> &'static [&'static str] {
        match self {
            Route::Home => &[
                "navbar", "hero", "services", "techStack", "clients", "about", "contact", "footer",
            ],
            Route::Careers => &["navbar", "careers", "footer"],
        }
    }
}
