//! Logging configuration
//!
//! Same tracing setup across the workspace, with one TUI-specific twist:
//! output goes to a log file instead of stderr, because stderr writes
//! would corrupt the alternate screen while the interface is up.
//!
//! # Examples
//!
//! ```no_run
//! use libriffwire::logging::{LoggingConfig, LogFormat};
//!
//! let config = LoggingConfig::new(LogFormat::Json, "debug".to_string());
//! config.init().ok();
//!
//! // Or use default settings (respects env vars)
//! libriffwire::logging::init_default();
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed multi-line output (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String) -> Self {
        Self { format, level }
    }

    /// Initialize logging with the configured settings
    ///
    /// Appends to the log file at [`resolve_log_path`]. Must be called at
    /// most once per process.
    pub fn init(&self) -> std::io::Result<()> {
        use tracing_subscriber::EnvFilter;

        let path = resolve_log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }

        Ok(())
    }
}

/// Resolve the log file path
///
/// `RIFFWIRE_LOG_FILE` wins; otherwise the file lives in the user data
/// directory, or the system temp dir as a last resort.
pub fn resolve_log_path() -> PathBuf {
    if let Ok(path) = std::env::var("RIFFWIRE_LOG_FILE") {
        return PathBuf::from(shellexpand::tilde(&path).to_string());
    }

    crate::config::resolve_data_path()
        .map(|dir| dir.join("riffwire.log"))
        .unwrap_or_else(|_| std::env::temp_dir().join("riffwire.log"))
}

/// Initialize logging with default settings, best-effort
///
/// Respects `RIFFWIRE_LOG_FORMAT` and `RIFFWIRE_LOG_LEVEL`. Falls back to
/// text format at info level. A failure to open the log file leaves the
/// process without logging rather than without a UI.
pub fn init_default() {
    let format = std::env::var("RIFFWIRE_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("RIFFWIRE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let _ = LoggingConfig::new(format, level).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display() {
        assert_eq!(LogFormat::Text.to_string(), "text");
        assert_eq!(LogFormat::Json.to_string(), "json");
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
    }

    #[test]
    #[serial]
    fn test_log_path_env_override() {
        std::env::set_var("RIFFWIRE_LOG_FILE", "/tmp/riffwire-test.log");
        let path = resolve_log_path();
        std::env::remove_var("RIFFWIRE_LOG_FILE");

        assert_eq!(path, PathBuf::from("/tmp/riffwire-test.log"));
    }

    #[test]
    #[serial]
    fn test_log_path_has_file_name() {
        std::env::remove_var("RIFFWIRE_LOG_FILE");
        let path = resolve_log_path();

        assert_eq!(path.file_name().unwrap(), "riffwire.log");
    }
}
