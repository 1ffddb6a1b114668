//! # site-content
//!
//! Prints the content the site would publish: the built-in defaults merged
//! with either the live CMS document or a local payload file. Fields the
//! merge rejected are listed on stderr.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, ValueHint};
use colored::*;
use serde::Serialize;
use serde_json::Value;

use lib_site::configs::SiteConfig;
use lib_site::content::{
    HERO_QUERY, Hydration, SITE_CONTENT_QUERY, default_hero, default_site_content, hydrate_hero, hydrate_with_report,
    load_hero, load_site_content,
};
use lib_site::loggers::{LoggerLocal, LoggerLocalOptions, parse_level};
use lib_site::retrieve::{SanityClient, SanityQuery};

#[derive(Parser, Debug)]
#[clap(
    name = "site-content",
    version = "0.1.0",
    author = "ckir",
    about = "Prints hydrated site content.",
    long_about = "Merges the CMS site document (or a local JSON payload) over the built-in defaults \
                  and prints the result. Rejected fields are reported on stderr."
)]
pub struct Cli {
    /// Merge this local JSON document instead of querying the CMS.
    #[clap(long, short = 'p', value_hint = ValueHint::FilePath)]
    pub payload: Option<PathBuf>,

    /// Work on the hero document instead of the site document.
    #[clap(long, action = ArgAction::SetTrue)]
    pub hero: bool,

    /// Print only this section, e.g. `about` or `trustedBy`.
    #[clap(long, short = 's', value_name = "KEY")]
    pub section: Option<String>,

    /// Output minified JSON instead of pretty-printed.
    #[clap(long, action = ArgAction::SetTrue)]
    pub minify: bool,

    /// Print library logs to the console.
    #[clap(long, short = 'v', action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[clap(long, env = "SITE_CONFIG_PATH", value_hint = ValueHint::FilePath)]
    pub config_path: Option<PathBuf>,

    #[clap(long, env = "SANITY_PROJECT_ID")]
    pub project_id: Option<String>,

    #[clap(long, env = "SANITY_DATASET")]
    pub dataset: Option<String>,

    #[clap(long, env = "SANITY_API_VERSION")]
    pub api_version: Option<String>,

    /// Query `api.sanity.io` directly instead of the CDN.
    #[clap(long, action = ArgAction::SetTrue)]
    pub no_cdn: bool,
}

impl Cli {
    fn config_layer(&self) -> SiteConfig {
        SiteConfig {
            config_path: self.config_path.clone(),
            sanity_project_id: self.project_id.clone(),
            sanity_dataset: self.dataset.clone(),
            sanity_api_version: self.api_version.clone(),
            sanity_use_cdn: self.no_cdn.then_some(false),
            ..SiteConfig::default()
        }
    }

    fn logger(&self) -> LoggerLocal {
        if self.verbose {
            LoggerLocal::new("site-content".to_string(), Some(LoggerLocalOptions::tty_from(parse_level("debug"))))
        } else {
            LoggerLocal::silent("site-content")
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    match run(&args).await {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{}", "Error: Failed to produce site content.".bright_red());
            eprintln!("Details: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: &Cli) -> Result<String> {
    let payload = args.payload.as_deref().map(read_payload).transpose()?;

    let value = if args.hero {
        let hydration = match &payload {
            Some(doc) => hydrate_hero(&default_hero(), Some(doc)),
            None => {
                let (client, logger) = (sanity(args)?, args.logger());
                let source = SanityQuery::new(Arc::new(client), "hero", HERO_QUERY);
                load_hero(&default_hero(), &source, &logger).await
            }
        };
        report(&hydration)?
    } else {
        let hydration = match &payload {
            Some(doc) => hydrate_with_report(&default_site_content(), Some(doc)),
            None => {
                let (client, logger) = (sanity(args)?, args.logger());
                let source = SanityQuery::new(Arc::new(client), "siteContent", SITE_CONTENT_QUERY);
                load_site_content(&default_site_content(), &source, &logger).await
            }
        };
        report(&hydration)?
    };

    let selected = match &args.section {
        Some(key) => select_section(&value, key)?,
        None => value,
    };
    render(&selected, args.minify)
}

fn sanity(args: &Cli) -> Result<SanityClient> {
    let settings = SiteConfig::resolve(args.config_layer())?;
    SanityClient::new(&settings.sanity_config())
}

fn read_payload(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Prints the rejected fields and returns the merged content as JSON.
fn report<T: Serialize>(hydration: &Hydration<T>) -> Result<Value> {
    let origin = if hydration.from_remote { "remote document" } else { "defaults only" };
    eprintln!("{} {}", "Source:".bright_cyan(), origin);
    for rejected in &hydration.rejected {
        eprintln!("{} {}", "Rejected:".bright_yellow(), rejected);
    }
    Ok(serde_json::to_value(&hydration.content)?)
}

fn select_section(value: &Value, key: &str) -> Result<Value> {
    let map = value.as_object().ok_or_else(|| anyhow!("content is not an object"))?;
    map.get(key).cloned().ok_or_else(|| {
        let known: Vec<&str> = map.keys().map(String::as_str).collect();
        anyhow!("unknown section `{}`; expected one of: {}", key, known.join(", "))
    })
}

fn render(value: &Value, minify: bool) -> Result<String> {
    Ok(if minify {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    })
}
