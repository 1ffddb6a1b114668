//! # Content Context
//!
//! The single distribution point for hydrated content. Readers hold a cheap
//! clone of a `ContentContext` and always see a complete value: the defaults
//! until a background load publishes its result, then that result. Published
//! values are immutable `Arc`s.
//!
//! If every reader has been dropped by the time the load finishes, the
//! result is discarded. The in-flight request itself is not cancelled.

use std::future::Future;
use std::sync::Arc;

use serde_json::json;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::defaults::{default_hero, default_site_content};
use super::hydrate::{hydrate_hero, hydrate_with_report, Hydration};
use super::schema::{HeroContent, SiteContent};
use crate::loggers::LoggerLocal;
use crate::retrieve::{fetch_or_none, JsonSource};

/// What became of a background load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    /// The value replaced the defaults for every reader.
    Published,
    /// No reader was left to receive it.
    Discarded,
}

/// Read-only handle on a published content value.
pub struct ContentContext<T> {
    rx: watch::Receiver<Arc<T>>,
}

impl<T> Clone for ContentContext<T> {
    fn clone(&self) -> Self {
        Self { rx: self.rx.clone() }
    }
}

impl<T: Send + Sync + 'static> ContentContext<T> {
    /// A context that will only ever hold `value`.
    pub fn fixed(value: T) -> Self {
        let (_tx, rx) = watch::channel(Arc::new(value));
        Self { rx }
    }

    /// Publishes `initial` immediately and `load`'s output once it resolves.
    pub fn spawn<F>(initial: T, load: F) -> (Self, JoinHandle<Publication>)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = watch::channel(Arc::new(initial));
        let handle = tokio::spawn(async move {
            let value = load.await;
            match tx.send(Arc::new(value)) {
                Ok(()) => Publication::Published,
                Err(_) => Publication::Discarded,
            }
        });
        (Self { rx }, handle)
    }

    /// The value readers should render right now.
    pub fn current(&self) -> Arc<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the next published value. `None` once the publisher is gone.
    pub async fn updated(&mut self) -> Option<Arc<T>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

/// Shared site content.
pub type SiteContentContext = ContentContext<SiteContent>;
/// Shared hero copy.
pub type HeroContext = ContentContext<HeroContent>;

async fn report<T>(logger: &LoggerLocal, source: &str, hydration: &Hydration<T>) {
    if !hydration.from_remote {
        logger
            .warn("Using default content", Some(json!({"source": source})))
            .await;
        return;
    }
    for rejection in &hydration.rejected {
        logger
            .warn(
                "Fetched field rejected, default kept",
                Some(json!({"source": source, "path": rejection.path, "reason": rejection.reason})),
            )
            .await;
    }
    logger
        .info(
            "Content hydrated",
            Some(json!({"source": source, "rejected": hydration.rejected.len()})),
        )
        .await;
}

/// Fetches the site document and merges it over `defaults`.
pub async fn load_site_content(
    defaults: &SiteContent,
    source: &dyn JsonSource,
    logger: &LoggerLocal,
) -> Hydration<SiteContent> {
    let payload = fetch_or_none(source, logger).await;
    let hydration = hydrate_with_report(defaults, payload.as_ref());
    report(logger, &source.describe(), &hydration).await;
    hydration
}

/// Fetches the hero document and merges it over `defaults`.
pub async fn load_hero(
    defaults: &HeroContent,
    source: &dyn JsonSource,
    logger: &LoggerLocal,
) -> Hydration<HeroContent> {
    let payload = fetch_or_none(source, logger).await;
    let hydration = hydrate_hero(defaults, payload.as_ref());
    report(logger, &source.describe(), &hydration).await;
    hydration
}

impl SiteContentContext {
    /// Starts from the default table and hydrates from `source` in the
    /// background.
    pub fn hydrate_in_background(
        source: Arc<dyn JsonSource>,
        logger: Arc<LoggerLocal>,
    ) -> (Self, JoinHandle<Publication>) {
        let defaults = default_site_content();
        let initial = defaults.clone();
        ContentContext::spawn(initial, async move {
            load_site_content(&defaults, source.as_ref(), &logger).await.content
        })
    }
}

impl HeroContext {
    pub fn hydrate_in_background(
        source: Arc<dyn JsonSource>,
        logger: Arc<LoggerLocal>,
    ) -> (Self, JoinHandle<Publication>) {
        let defaults = default_hero();
        let initial = defaults.clone();
        ContentContext::spawn(initial, async move {
            load_hero(&defaults, source.as_ref(), &logger).await.content
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieve::InlineSource;

    #[tokio::test]
    async fn readers_see_defaults_then_the_published_value() {
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        let (mut ctx, handle) = ContentContext::spawn(1u32, async move { rx.await.unwrap_or(0) });
        assert_eq!(*ctx.current(), 1);

        tx.send(7).unwrap();
        assert_eq!(*ctx.updated().await.unwrap(), 7);
        assert_eq!(handle.await.unwrap(), Publication::Published);
    }

    #[tokio::test]
    async fn result_is_discarded_when_every_reader_left() {
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();
        let (ctx, handle) = ContentContext::spawn(1u32, async move { rx.await.unwrap_or(0) });
        drop(ctx);
        tx.send(7).unwrap();
        assert_eq!(handle.await.unwrap(), Publication::Discarded);
    }

    #[tokio::test]
    async fn site_context_hydrates_from_source() {
        let source = Arc::new(InlineSource::document(
            "site",
            serde_json::json!({"trustedBy": {"eyebrow": "Partners"}}),
        ));
        let logger = Arc::new(LoggerLocal::silent("context_test"));
        let (mut ctx, handle) = SiteContentContext::hydrate_in_background(source, logger);
        let before = ctx.current();
        assert_eq!(before.trusted_by.eyebrow, "Our Clientele");

        handle.await.unwrap();
        let after = ctx.updated().await.unwrap_or_else(|| ctx.current());
        assert_eq!(after.trusted_by.eyebrow, "Partners");
        assert_eq!(after.trusted_by.badge_text, before.trusted_by.badge_text);
    }
}
