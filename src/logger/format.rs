//! Log entry formatting

use chrono::{Local, SecondsFormat};

/// Log severity. Ordering matters: entries below the configured threshold
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }

    /// Parse the configured level string, defaulting to `info`.
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("error") {
            Self::Error
        } else {
            Self::Info
        }
    }
}

/// Format a single log line: `<timestamp> [level] <message>`
pub fn format_entry(level: Level, message: &str) -> String {
    let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    format!("{timestamp} [{}] {message}", level.as_str())
}
