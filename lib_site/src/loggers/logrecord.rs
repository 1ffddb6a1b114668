use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::current_datetime_rfc9557;

/// # Logrecord
///
/// One log entry as produced by `LoggerLocal`. Serializable so that file
/// sinks or external collectors can take it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logrecord {
    /// The severity level (0 = Silly ... 6 = Fatal).
    pub loglevel: i64,
    /// Details about the message content.
    pub message: Message,
    /// Information about the application generating the log.
    pub app: App,
    /// Flexible JSON value for arbitrary tags or additional metadata.
    pub tags: Value,
    /// RFC 9557 formatted timestamp string.
    pub rfc9557: String,
}

impl Default for Logrecord {
    /// Initializes `rfc9557` with the current UTC time and empty tags.
    fn default() -> Self {
        Self {
            loglevel: 0,
            message: Message::default(),
            app: App::default(),
            tags: serde_json::json!([]),
            rfc9557: current_datetime_rfc9557(),
        }
    }
}

impl Logrecord {
    /// Returns `true` when the record carries structured extras.
    pub fn has_tags(&self) -> bool {
        self.tags != serde_json::json!([]) && !self.tags.is_null()
    }
}

/// # Message
///
/// The textual content of a log entry, including its language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The language of the message (e.g., "en" for English).
    pub lang: String,
    /// The actual text content of the message.
    pub text: String,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            text: String::new(),
            lang: "en".to_string(),
        }
    }
}

/// # App
///
/// The application that generated the log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// The process ID (PID) of the application.
    pub pid: i64,
    /// The name of the application.
    pub name: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            pid: std::process::id() as i64,
            name: String::new(),
        }
    }
}

/// Human readable name for a numeric log level.
pub fn level_name(level: i64) -> &'static str {
    match level {
        6 => "FATAL",
        5 => "ERROR",
        4 => "WARN",
        3 => "INFO",
        2 => "DEBUG",
        1 => "TRACE",
        _ => "SILLY",
    }
}
