//! # Site Server
//!
//! HTTP backend for the Zenture website. The browser front end reads the
//! hydrated site content and the careers page from here and posts its two
//! forms through here to the form relay.
//!
//! ## Startup
//! - Configuration is layered by `SiteConfig::load` (defaults, JSON file,
//!   environment, command line).
//! - Site content and hero copy start out as the built-in defaults and are
//!   hydrated from the CMS in the background. Requests served before the
//!   CMS answers see the defaults.
//! - The careers page is loaded per request: CMS first, then the static
//!   document, then the built-in fallback.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use tokio::signal;

use lib_site::careers::{CAREERS_QUERY, CareersLoader};
use lib_site::configs::SiteConfig;
use lib_site::content::{HERO_QUERY, HeroContext, SITE_CONTENT_QUERY, SiteContentContext};
use lib_site::forms::{FormService, FormSubmitRelay};
use lib_site::loggers::LoggerLocal;
use lib_site::retrieve::{SanityClient, SanityQuery, StaticJsonSource};

mod site_logic;
use site_logic::{logger, router, state};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Phase 1: Configuration ---
    let settings = SiteConfig::load()?;

    // --- Phase 2: Logging ---
    logger::setup_tracing(&settings.log_level)?;
    let log = Arc::new(LoggerLocal::new("server_site".to_string(), Some(settings.logger_options())));
    log.info("Site server booting", Some(json!({"settings": settings}))).await;

    // --- Phase 3: Content hydration ---
    let sanity = Arc::new(SanityClient::new(&settings.sanity_config())?);
    let (content, _) = SiteContentContext::hydrate_in_background(
        Arc::new(SanityQuery::new(sanity.clone(), "siteContent", SITE_CONTENT_QUERY)),
        log.clone(),
    );
    let (hero, _) = HeroContext::hydrate_in_background(
        Arc::new(SanityQuery::new(sanity.clone(), "hero", HERO_QUERY)),
        log.clone(),
    );

    // --- Phase 4: Careers and forms ---
    let careers = CareersLoader::new(log.clone())
        .with_cms(Arc::new(SanityQuery::new(sanity, "careersPage", CAREERS_QUERY)))
        .with_static_document(Arc::new(StaticJsonSource::parse(
            &settings.careers_static,
            settings.http_timeout(),
        )?));
    let relay = FormSubmitRelay::new(&settings.relay_base_url, settings.http_timeout())?;
    let forms = FormService::new(Arc::new(relay), settings.recipients.clone(), log.clone());

    let app_state = state::AppState {
        content,
        hero,
        careers: Arc::new(careers),
        forms: Arc::new(forms),
        sessions: state::FormSessions::new(settings.min_fill(), state::SESSION_TTL),
        upload_limit: settings.max_upload_bytes,
    };

    // --- Phase 5: Serve ---
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log.info(&format!("Site server listening on http://{}", addr), None).await;

    let signal_log = log.clone();
    axum::serve(listener, router::router(app_state))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            signal_log.warn("Shutdown signal received. Closing server gracefully...", None).await;
        })
        .await?;

    log.info("Shutdown complete.", None).await;
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
