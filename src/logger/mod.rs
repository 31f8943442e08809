//! Logger module
//!
//! Multi-sink logging for the service: human-readable console output plus an
//! error-only append file and a combined append file. The `Logger` is built
//! once at startup and handed to handlers through `AppState` instead of
//! living in a module-level global.

mod format;
mod writer;

pub use format::Level;

use std::io;
use std::net::IpAddr;

use hyper::{Method, Uri};

use crate::calc::Operator;
use crate::config::LoggingConfig;
use format::format_entry;
use writer::FileSink;

/// Thread-safe logger fanning entries out to console and file sinks.
pub struct Logger {
    threshold: Level,
    error_file: Option<FileSink>,
    combined_file: Option<FileSink>,
}

impl Logger {
    /// Build the logger from configuration, opening the configured files.
    pub fn from_config(cfg: &LoggingConfig) -> io::Result<Self> {
        let error_file = cfg
            .error_log_file
            .as_deref()
            .map(FileSink::open)
            .transpose()?;
        let combined_file = cfg
            .combined_log_file
            .as_deref()
            .map(FileSink::open)
            .transpose()?;

        Ok(Self {
            threshold: Level::from_config(&cfg.level),
            error_file,
            combined_file,
        })
    }

    /// Console-only logger, used in tests.
    #[cfg(test)]
    pub const fn console_only(threshold: Level) -> Self {
        Self {
            threshold,
            error_file: None,
            combined_file: None,
        }
    }

    pub fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    pub fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn write(&self, level: Level, message: &str) {
        if level < self.threshold {
            return;
        }

        let line = format_entry(level, message);
        match level {
            Level::Info => println!("{line}"),
            Level::Error => eprintln!("{line}"),
        }

        if level == Level::Error {
            if let Some(sink) = &self.error_file {
                sink.write_line(&line);
            }
        }
        if let Some(sink) = &self.combined_file {
            sink.write_line(&line);
        }
    }

    /// Flush the file sinks; called once at shutdown.
    pub fn flush(&self) {
        if let Some(sink) = &self.error_file {
            sink.flush();
        }
        if let Some(sink) = &self.combined_file {
            sink.flush();
        }
    }

    // ---- semantic entries used by the service ----

    pub fn log_server_start(&self, addr: &std::net::SocketAddr) {
        self.info(&format!(
            "Calculator microservice running on http://{addr}"
        ));
    }

    pub fn log_incoming_request(&self, method: &Method, uri: &Uri, peer: IpAddr) {
        self.info(&format!("Incoming Request: {method} {uri} from {peer}"));
    }

    pub fn log_operation(&self, op: Operator, a: f64, b: f64, result: f64) {
        let name = capitalize(op.name());
        self.info(&format!(
            "{name} operation: {a} {} {b} = {result}",
            op.symbol()
        ));
    }

    pub fn log_invalid_parameters(&self, num1: &str, num2: &str) {
        self.error(&format!("Invalid parameters: num1={num1}, num2={num2}"));
    }

    pub fn log_division_by_zero(&self) {
        self.error("Division by zero attempt");
    }

    pub fn log_connection_error(&self, err: &impl std::fmt::Debug) {
        self.error(&format!("Failed to serve connection: {err:?}"));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_log_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("calc-logger-{}-{name}.log", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn error_entries_reach_both_files() {
        let error_path = temp_log_path("error");
        let combined_path = temp_log_path("combined");
        let _ = fs::remove_file(&error_path);
        let _ = fs::remove_file(&combined_path);

        let cfg = LoggingConfig {
            level: "info".to_string(),
            error_log_file: Some(error_path.clone()),
            combined_log_file: Some(combined_path.clone()),
        };
        let logger = Logger::from_config(&cfg).unwrap();
        logger.info("hello");
        logger.error("boom");
        logger.flush();

        let error_log = fs::read_to_string(&error_path).unwrap();
        assert!(error_log.contains("boom"));
        assert!(!error_log.contains("hello"));

        let combined_log = fs::read_to_string(&combined_path).unwrap();
        assert!(combined_log.contains("hello"));
        assert!(combined_log.contains("boom"));

        let _ = fs::remove_file(&error_path);
        let _ = fs::remove_file(&combined_path);
    }

    #[test]
    fn error_threshold_drops_info_entries() {
        let combined_path = temp_log_path("threshold");
        let _ = fs::remove_file(&combined_path);

        let cfg = LoggingConfig {
            level: "error".to_string(),
            error_log_file: None,
            combined_log_file: Some(combined_path.clone()),
        };
        let logger = Logger::from_config(&cfg).unwrap();
        logger.info("quiet");
        logger.error("loud");
        logger.flush();

        let combined_log = fs::read_to_string(&combined_path).unwrap();
        assert!(!combined_log.contains("quiet"));
        assert!(combined_log.contains("loud"));

        let _ = fs::remove_file(&combined_path);
    }

    #[test]
    fn capitalize_uppercases_the_first_letter() {
        assert_eq!(capitalize("addition"), "Addition");
        assert_eq!(capitalize(""), "");
    }
}
