//! # careers-check
//!
//! Validates a careers document the way the site's loader does and prints
//! the verdict. With `--tiers` it runs the full CMS, static document and
//! fallback search instead and reports which tier won.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser};
use colored::*;
use serde_json::{Value, json};

use lib_site::careers::{CAREERS_QUERY, CareersLoader, CareersPage, DEFAULT_STATIC_CAREERS, validate_careers};
use lib_site::configs::SiteConfig;
use lib_site::loggers::{LoggerLocal, LoggerLocalOptions, parse_level};
use lib_site::retrieve::{JsonSource, SanityClient, SanityQuery, StaticJsonSource};

#[derive(Parser, Debug)]
#[clap(
    name = "careers-check",
    version = "0.1.0",
    author = "ckir",
    about = "Validates a careers JSON document.",
    long_about = "Checks a careers document (file path or http(s) URL) against the careers page shape. \
                  Exits with status 2 when the document would be rejected."
)]
pub struct Cli {
    /// Careers document: a file path or an http(s) URL.
    #[clap(default_value = DEFAULT_STATIC_CAREERS)]
    pub location: String,

    /// Run the whole tier search (CMS, then `location`, then fallback).
    #[clap(long, action = ArgAction::SetTrue)]
    pub tiers: bool,

    /// Timeout in milliseconds for remote documents.
    #[clap(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Print library logs to the console.
    #[clap(long, short = 'v', action = ArgAction::SetTrue)]
    pub verbose: bool,
}

/// What a run concluded.
#[derive(Debug, PartialEq)]
pub enum Verdict {
    Valid(Value),
    Rejected(String),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    match run(&args).await {
        Ok(Verdict::Valid(summary)) => {
            eprintln!("{}", "Careers document is valid.".bright_green());
            println!("{}", serde_json::to_string_pretty(&summary).unwrap_or_default());
        }
        Ok(Verdict::Rejected(reason)) => {
            eprintln!("{} {}", "Careers document rejected:".bright_yellow(), reason);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{}", "Error: Failed to check careers document.".bright_red());
            eprintln!("Details: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn logger(verbose: bool) -> Arc<LoggerLocal> {
    Arc::new(if verbose {
        LoggerLocal::new("careers-check".to_string(), Some(LoggerLocalOptions::tty_from(parse_level("debug"))))
    } else {
        LoggerLocal::silent("careers-check")
    })
}

fn summarize(page: &CareersPage) -> Value {
    let positions: Vec<Value> = page
        .sorted_positions()
        .iter()
        .map(|p| json!({"id": p.id, "title": p.title, "type": p.employment_type, "postedDate": p.posted_date}))
        .collect();
    json!({"heading": page.heading, "positions": positions})
}

async fn run(args: &Cli) -> Result<Verdict> {
    let timeout = Duration::from_millis(args.timeout_ms);
    let document = StaticJsonSource::parse(&args.location, timeout)?;

    if args.tiers {
        let settings = SiteConfig::resolve(SiteConfig::default())?;
        let sanity = Arc::new(SanityClient::new(&settings.sanity_config())?);
        let load = CareersLoader::new(logger(args.verbose))
            .with_cms(Arc::new(SanityQuery::new(sanity, "careersPage", CAREERS_QUERY)))
            .with_static_document(Arc::new(document))
            .load()
            .await;
        let mut summary = summarize(&load.page);
        summary["tier"] = json!(load.tier);
        summary["skipped"] = json!(load.skipped);
        return Ok(Verdict::Valid(summary));
    }

    let doc = document
        .fetch_json()
        .await
        .map_err(|e| anyhow!("{}: {}", document.describe(), e))?;
    let Some(doc) = doc else {
        return Ok(Verdict::Rejected(format!("{} has no document", args.location)));
    };
    Ok(match validate_careers(&doc) {
        Ok(page) => Verdict::Valid(summarize(&page)),
        Err(shape) => Verdict::Rejected(shape.to_string()),
    })
}
