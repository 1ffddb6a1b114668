use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::careers::DEFAULT_STATIC_CAREERS;
use crate::forms::{FormRecipients, DEFAULT_MIN_FILL, DEFAULT_RELAY_BASE};
use crate::loggers::{parse_level, LoggerLocalOptions, ALL_LEVELS};
use crate::retrieve::SanityConfig;

const DEFAULT_CONFIG_FILE: &str = "site.conf.json";

/// Request body cap for form posts. The resume travels base64-encoded, so
/// this admits attachments up to roughly 12 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum SiteConfigError {
    #[error("Config file not found: {0}")]
    Missing(PathBuf),
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One layer of site configuration. Every field is optional so layers can
/// be merged; `resolve` turns the merged result into `SiteSettings`.
#[derive(Parser, Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[clap(about = "Zenture site content service", version)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[clap(long, env = "SITE_PORT", help = "Port to listen on.")]
    pub port: Option<u16>,

    #[clap(long, env = "SITE_CONFIG_PATH", help = "Path to the JSON configuration file.")]
    pub config_path: Option<PathBuf>,

    #[clap(long, env = "SITE_LOG_DIR", help = "Directory for log files. File logging is off when unset.")]
    pub log_dir: Option<PathBuf>,

    #[clap(long, env = "SITE_LOG_LEVEL", help = "Logging level (silly, trace, debug, info, warn, error, fatal).")]
    pub log_level: Option<String>,

    #[clap(long, env = "SANITY_PROJECT_ID", help = "Sanity project id.")]
    pub sanity_project_id: Option<String>,

    #[clap(long, env = "SANITY_DATASET", help = "Sanity dataset.")]
    pub sanity_dataset: Option<String>,

    #[clap(long, env = "SANITY_API_VERSION", help = "Sanity API version (YYYY-MM-DD).")]
    pub sanity_api_version: Option<String>,

    #[clap(long, env = "SANITY_USE_CDN", help = "Read through the Sanity API CDN (true/false).")]
    pub sanity_use_cdn: Option<bool>,

    #[clap(long, env = "SITE_HTTP_TIMEOUT_MS", help = "Timeout in milliseconds for outbound HTTP requests.")]
    pub http_timeout_ms: Option<u64>,

    #[clap(long, env = "SITE_CAREERS_STATIC", help = "Static careers JSON: an http(s) URL or a file path.")]
    pub careers_static: Option<String>,

    #[clap(long, env = "SITE_RELAY_BASE_URL", help = "Base URL of the form relay.")]
    pub relay_base_url: Option<String>,

    #[clap(long, env = "SITE_CONTACT_RECIPIENT", help = "Mailbox receiving contact inquiries.")]
    pub contact_recipient: Option<String>,

    #[clap(long, env = "SITE_CAREERS_RECIPIENT", help = "Mailbox receiving careers applications.")]
    pub careers_recipient: Option<String>,

    #[clap(long, env = "SITE_MIN_FILL_MS", help = "Minimum milliseconds between showing a form and accepting it.")]
    pub min_fill_ms: Option<u64>,

    #[clap(long, env = "SITE_MAX_UPLOAD_BYTES", help = "Largest accepted form request body, in bytes.")]
    pub max_upload_bytes: Option<usize>,
}

impl SiteConfig {
    /// Built-in values for every key.
    pub fn defaults() -> Self {
        let sanity = SanityConfig::default();
        let recipients = FormRecipients::default();
        Self {
            port: Some(3000),
            config_path: None,
            log_dir: None,
            log_level: Some("info".to_string()),
            sanity_project_id: Some(sanity.project_id),
            sanity_dataset: Some(sanity.dataset),
            sanity_api_version: Some(sanity.api_version),
            sanity_use_cdn: Some(sanity.use_cdn),
            http_timeout_ms: Some(sanity.timeout.as_millis() as u64),
            careers_static: Some(DEFAULT_STATIC_CAREERS.to_string()),
            relay_base_url: Some(DEFAULT_RELAY_BASE.to_string()),
            contact_recipient: Some(recipients.contact),
            careers_recipient: Some(recipients.careers),
            min_fill_ms: Some(DEFAULT_MIN_FILL.as_millis() as u64),
            max_upload_bytes: Some(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }

    /// `other` wins wherever it has a value.
    pub fn merge(self, other: SiteConfig) -> SiteConfig {
        SiteConfig {
            port: other.port.or(self.port),
            config_path: other.config_path.or(self.config_path),
            log_dir: other.log_dir.or(self.log_dir),
            log_level: other.log_level.or(self.log_level),
            sanity_project_id: other.sanity_project_id.or(self.sanity_project_id),
            sanity_dataset: other.sanity_dataset.or(self.sanity_dataset),
            sanity_api_version: other.sanity_api_version.or(self.sanity_api_version),
            sanity_use_cdn: other.sanity_use_cdn.or(self.sanity_use_cdn),
            http_timeout_ms: other.http_timeout_ms.or(self.http_timeout_ms),
            careers_static: other.careers_static.or(self.careers_static),
            relay_base_url: other.relay_base_url.or(self.relay_base_url),
            contact_recipient: other.contact_recipient.or(self.contact_recipient),
            careers_recipient: other.careers_recipient.or(self.careers_recipient),
            min_fill_ms: other.min_fill_ms.or(self.min_fill_ms),
            max_upload_bytes: other.max_upload_bytes.or(self.max_upload_bytes),
        }
    }

    /// Reads a JSON config file layer.
    pub fn from_file(path: &Path) -> Result<SiteConfig, SiteConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| SiteConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SiteConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layers defaults, then the config file, then `cli` (which already
    /// carries environment values).
    ///
    /// A file named explicitly through `--config-path` must exist. The
    /// implicit `site.conf.json` is optional.
    pub fn resolve(cli: SiteConfig) -> Result<SiteSettings, SiteConfigError> {
        // 1. Defaults
        let mut current = SiteConfig::defaults();

        // 2. Config file
        let explicit = cli.config_path.clone();
        let file_path = explicit.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if file_path.exists() {
            current = current.merge(SiteConfig::from_file(&file_path)?);
        } else if explicit.is_some() {
            return Err(SiteConfigError::Missing(file_path));
        }

        // 3. Environment and CLI
        current = current.merge(cli);
        Ok(SiteSettings::from(current))
    }

    /// Loads `.env`, parses the command line and resolves all layers.
    pub fn load() -> Result<SiteSettings, SiteConfigError> {
        dotenvy::dotenv().ok();
        SiteConfig::resolve(SiteConfig::parse())
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub port: u16,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub sanity: SanityConfigView,
    pub http_timeout_ms: u64,
    pub careers_static: String,
    pub relay_base_url: String,
    pub recipients: FormRecipients,
    pub min_fill_ms: u64,
    pub max_upload_bytes: usize,
}

/// Serializable mirror of `SanityConfig`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanityConfigView {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

impl From<SiteConfig> for SiteSettings {
    fn from(c: SiteConfig) -> Self {
        let d = SiteConfig::defaults();
        // `defaults()` fills every key, so the fallbacks below only apply to
        // layers that were built by hand.
        let text = |v: Option<String>, dv: Option<String>| v.or(dv).unwrap_or_default();
        SiteSettings {
            port: c.port.or(d.port).unwrap_or(3000),
            log_dir: c.log_dir,
            log_level: text(c.log_level, d.log_level),
            sanity: SanityConfigView {
                project_id: text(c.sanity_project_id, d.sanity_project_id),
                dataset: text(c.sanity_dataset, d.sanity_dataset),
                api_version: text(c.sanity_api_version, d.sanity_api_version),
                use_cdn: c.sanity_use_cdn.or(d.sanity_use_cdn).unwrap_or(true),
            },
            http_timeout_ms: c.http_timeout_ms.or(d.http_timeout_ms).unwrap_or(10_000),
            careers_static: text(c.careers_static, d.careers_static),
            relay_base_url: text(c.relay_base_url, d.relay_base_url),
            recipients: FormRecipients {
                contact: text(c.contact_recipient, d.contact_recipient),
                careers: text(c.careers_recipient, d.careers_recipient),
            },
            min_fill_ms: c.min_fill_ms.or(d.min_fill_ms).unwrap_or(3000),
            max_upload_bytes: c
                .max_upload_bytes
                .or(d.max_upload_bytes)
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

impl SiteSettings {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_millis(self.http_timeout_ms)
    }

    pub fn min_fill(&self) -> Duration {
        Duration::from_millis(self.min_fill_ms)
    }

    pub fn sanity_config(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.sanity.project_id.clone(),
            dataset: self.sanity.dataset.clone(),
            api_version: self.sanity.api_version.clone(),
            use_cdn: self.sanity.use_cdn,
            timeout: self.http_timeout(),
        }
    }

    /// TTY output from the configured level up, plus file output to
    /// `log_dir` when one is set.
    pub fn logger_options(&self) -> LoggerLocalOptions {
        let min = parse_level(&self.log_level);
        let levels: Vec<i64> = ALL_LEVELS.iter().copied().filter(|l| *l >= min).collect();
        LoggerLocalOptions {
            use_tty: Some(levels.clone()),
            use_file: self.log_dir.as_ref().map(|_| levels),
            log_dir: self.log_dir.clone(),
        }
    }
}
