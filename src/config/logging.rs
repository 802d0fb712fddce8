//! Logging configuration.

use std::env;

/// Output format for log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration consumed by [`crate::telemetry::init_tracing`]
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Directive used when `RUST_LOG` is not set
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            default_filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            format,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn test_log_format_selection() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("LOG_FORMAT", "JSON");
        }
        assert_eq!(LoggingConfig::from_env().format, LogFormat::Json);

        unsafe {
            env::set_var("LOG_FORMAT", "pretty");
        }
        assert_eq!(LoggingConfig::from_env().format, LogFormat::Text);

        unsafe {
            env::remove_var("LOG_FORMAT");
        }
        let config = LoggingConfig::from_env();
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.default_filter, "info");
    }
}
