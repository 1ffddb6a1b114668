use super::logrecord::{level_name, Logrecord};
use chrono::Local;
use colored::*;
use glob::glob;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Every level from Silly (0) to Fatal (6).
pub const ALL_LEVELS: [i64; 7] = [6, 5, 4, 3, 2, 1, 0];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
/// # Logger Local Options
///
/// Controls where and how `LoggerLocal` outputs log messages. The derived
/// default has every sink disabled, which is what tests want.
pub struct LoggerLocalOptions {
    /// Log levels that should be printed to the TTY (console).
    pub use_tty: Option<Vec<i64>>,
    /// Log levels that should be written to a log file.
    pub use_file: Option<Vec<i64>>,
    /// Directory for log files. If `None`, defaults to the executable's directory.
    pub log_dir: Option<PathBuf>,
}

impl LoggerLocalOptions {
    /// TTY output for every level at or above `min_level`, no file output.
    pub fn tty_from(min_level: i64) -> Self {
        Self {
            use_tty: Some(ALL_LEVELS.iter().copied().filter(|l| *l >= min_level).collect()),
            use_file: None,
            log_dir: None,
        }
    }
}

/// Maps a textual level (as found in configs) to its numeric value.
pub fn parse_level(level: &str) -> i64 {
    match level.trim().to_lowercase().as_str() {
        "fatal" => 6,
        "error" => 5,
        "warn" | "warning" => 4,
        "info" => 3,
        "debug" => 2,
        "trace" => 1,
        _ => 0,
    }
}

pub struct LoggerLocal {
    /// The name of the application associated with this logger instance.
    app_name: String,
    /// Configuration options determining logging behavior.
    options: LoggerLocalOptions,
    /// Serializes appends so concurrent records never interleave in the file.
    file_mutex: Mutex<()>,
    /// The path to the currently active log file, if file logging is enabled.
    current_log_file: Option<PathBuf>,
}

impl LoggerLocal {
    /// Keeps only the most recent log file of `app_name` inside `log_dir`.
    ///
    /// Filenames carry a sortable timestamp, so the lexically greatest one
    /// is the newest.
    fn rotate_logs(app_name: &str, log_dir: &Path) {
        let pattern = format!("{}/{}-*.log", log_dir.display(), app_name);
        let Ok(entries) = glob(&pattern) else {
            return;
        };
        let mut log_files: Vec<PathBuf> = entries.flatten().collect();

        log_files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));

        for old_file in log_files.iter().skip(1) {
            if let Err(e) = std::fs::remove_file(old_file) {
                eprintln!("Error deleting old log file {}: {}", old_file.display(), e);
            }
        }
    }

    /// Creates a new `LoggerLocal` instance.
    ///
    /// If file logging is enabled, the log directory is created, older logs
    /// of the same application are rotated away and a fresh timestamped
    /// file becomes the current sink.
    ///
    /// # Arguments
    /// * `app_name` - The name of the application using this logger.
    /// * `options` - Optional `LoggerLocalOptions`. If `None`, TTY output is
    ///   enabled for every level and file output is disabled.
    pub fn new(app_name: String, options: Option<LoggerLocalOptions>) -> Self {
        let opts = options.unwrap_or(LoggerLocalOptions {
            use_tty: Some(ALL_LEVELS.to_vec()),
            use_file: None,
            log_dir: None,
        });

        let mut logger = Self {
            app_name: app_name.clone(),
            options: opts,
            file_mutex: Mutex::new(()),
            current_log_file: None,
        };

        if logger.options.use_file.is_some() {
            let log_base_dir = logger.options.log_dir.clone().unwrap_or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(Path::to_path_buf))
                    .unwrap_or_else(|| PathBuf::from("."))
            });

            if let Err(e) = std::fs::create_dir_all(&log_base_dir) {
                eprintln!("Error creating log directory {}: {}", log_base_dir.display(), e);
            }

            LoggerLocal::rotate_logs(&app_name, &log_base_dir);

            let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
            let current_log_filename = format!("{}-{}.log", app_name, timestamp);
            logger.current_log_file = Some(log_base_dir.join(current_log_filename));
        }

        logger
    }

    /// A logger with every sink disabled.
    pub fn silent(app_name: &str) -> Self {
        Self::new(app_name.to_string(), Some(LoggerLocalOptions::default()))
    }

    /// The application name stamped on every record.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The file currently receiving records, if file output is enabled.
    pub fn current_log_file(&self) -> Option<&Path> {
        self.current_log_file.as_deref()
    }

    /// Logs a message with a specified level to the TTY and/or file sinks.
    ///
    /// # Arguments
    /// * `log_level` - The numeric log level (0 for Silly, 6 for Fatal).
    /// * `log_message` - The main message string to be logged.
    /// * `log_extras` - Additional structured data to include in the log.
    pub async fn log(&self, log_level: i64, log_message: &str, log_extras: Option<Value>) {
        let mut record = Logrecord::default();
        record.app.name = self.app_name.clone();
        record.loglevel = log_level;
        record.message.text = log_message.to_string();
        if let Some(extras) = log_extras {
            record.tags = extras;
        }

        if let Some(tty_levels) = &self.options.use_tty {
            if tty_levels.contains(&log_level) {
                self.print_tty(&record);
            }
        }

        if let Some(file_levels) = &self.options.use_file {
            if file_levels.contains(&log_level) {
                self.append_file(&record).await;
            }
        }
    }

    fn print_tty(&self, record: &Logrecord) {
        let ts = record.rfc9557.as_str().truecolor(128, 128, 128);
        let app_name_colored = format!("[{}]", self.app_name).truecolor(128, 128, 128);
        let text = record.message.text.as_str();

        let colored_message = match record.loglevel {
            6 => text.bright_white().on_bright_red(),
            5 => text.bright_red(),
            4 => text.bright_yellow(),
            3 => text.bright_green(),
            2 => text.bright_white(),
            1 => text.bright_cyan(),
            _ => text.blue(),
        };

        println!("{}{}\n{}", ts, app_name_colored, colored_message);
        if record.has_tags() {
            if let Ok(tags_str) = serde_json::to_string(&record.tags) {
                println!("{}{}{}", ts, app_name_colored, tags_str.truecolor(128, 128, 128));
            }
        }
    }

    async fn append_file(&self, record: &Logrecord) {
        let Some(log_file_path) = &self.current_log_file else {
            return;
        };

        let mut line = format!(
            "{} [{}] {} {}\n",
            record.rfc9557,
            self.app_name,
            level_name(record.loglevel),
            record.message.text
        );
        if record.has_tags() {
            if let Ok(tags_str) = serde_json::to_string(&record.tags) {
                line.push_str(&tags_str);
                line.push('\n');
            }
        }

        let _guard = self.file_mutex.lock().await;
        let result = async {
            let mut file = OpenOptions::new().create(true).append(true).open(log_file_path).await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = result {
            eprintln!("Error writing log file {}: {}", log_file_path.display(), e);
        }
    }

    /// Logs a message at the "Silly" (level 0) log level.
    pub async fn silly(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(0, log_message, log_extras).await;
    }

    /// Logs a message at the "Trace" (level 1) log level.
    pub async fn trace(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(1, log_message, log_extras).await;
    }

    /// Logs a message at the "Debug" (level 2) log level.
    pub async fn debug(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(2, log_message, log_extras).await;
    }

    /// Logs a message at the "Info" (level 3) log level.
    pub async fn info(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(3, log_message, log_extras).await;
    }

    /// Logs a message at the "Warn" (level 4) log level.
    ///
    /// Content fallbacks are reported at this level.
    pub async fn warn(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(4, log_message, log_extras).await;
    }

    /// Logs a message at the "Error" (level 5) log level.
    pub async fn error(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(5, log_message, log_extras).await;
    }

    /// Logs a message at the "Fatal" (level 6) log level.
    pub async fn fatal(&self, log_message: &str, log_extras: Option<Value>) {
        self.log(6, log_message, log_extras).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_levels_and_extras_to_file() {
        let dir = tempdir().unwrap();
        let options = LoggerLocalOptions {
            use_tty: None,
            use_file: Some(vec![5, 4]),
            log_dir: Some(dir.path().to_path_buf()),
        };
        let logger = LoggerLocal::new("site_test".to_string(), Some(options));

        logger.warn("cms payload ignored", Some(serde_json::json!({"section": "about"}))).await;
        logger.info("not written", None).await;

        let path = logger.current_log_file().unwrap().to_path_buf();
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("WARN cms payload ignored"));
        assert!(contents.contains(r#"{"section":"about"}"#));
        assert!(!contents.contains("not written"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_records_land_whole() {
        let dir = tempdir().unwrap();
        let options = LoggerLocalOptions {
            use_tty: None,
            use_file: Some(vec![3]),
            log_dir: Some(dir.path().to_path_buf()),
        };
        let logger = std::sync::Arc::new(LoggerLocal::new("site_concurrent".to_string(), Some(options)));

        let writers: Vec<_> = (0..16)
            .map(|i| {
                let logger = logger.clone();
                tokio::spawn(async move { logger.info(&format!("record {}", i), None).await })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let contents = fs::read_to_string(logger.current_log_file().unwrap()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines.iter().all(|l| l.contains("INFO record ")));
    }

    #[test]
    fn rotation_keeps_only_the_newest_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("site-20240101_000000.log"), "old").unwrap();
        fs::write(dir.path().join("site-20250101_000000.log"), "newer").unwrap();
        fs::write(dir.path().join("other-20200101_000000.log"), "foreign").unwrap();

        LoggerLocal::rotate_logs("site", dir.path());

        assert!(!dir.path().join("site-20240101_000000.log").exists());
        assert!(dir.path().join("site-20250101_000000.log").exists());
        assert!(dir.path().join("other-20200101_000000.log").exists());
    }

    #[test]
    fn textual_levels() {
        assert_eq!(parse_level("WARN"), 4);
        assert_eq!(parse_level(" info "), 3);
        assert_eq!(parse_level("whatever"), 0);
        assert_eq!(LoggerLocalOptions::tty_from(4).use_tty.unwrap(), vec![6, 5, 4]);
    }
}
