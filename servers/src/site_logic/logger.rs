use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `LoggerLocal` knows two levels `tracing` does not.
fn tracing_level(level: &str) -> &str {
    match level {
        "silly" => "trace",
        "fatal" => "error",
        other => other,
    }
}

/// Installs the request-level `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Console output carries the
/// target and ANSI colors; file logging stays with `LoggerLocal`.
pub fn setup_tracing(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(tracing_level(&log_level.to_lowercase())))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .try_init()?;

    tracing::info!("Tracing initialized with level: {}", log_level);
    Ok(())
}
