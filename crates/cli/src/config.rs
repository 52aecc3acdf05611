//! Report configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Report configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CATALOG_DATA`: path to a JSON dataset (default: built-in sample)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT`: `"text"` or `"json"` (default: `"text"`)
/// - `EMIT_METRICS`: print Prometheus metrics after the report (default: `false`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: Option<PathBuf>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub emit_metrics: bool,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let dataset_path = lookup("CATALOG_DATA")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let log_format = match lookup("LOG_FORMAT") {
            None => defaults.log_format,
            Some(value) => match normalize(&value).as_str() {
                "text" | "" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(CliError::InvalidConfig {
                        key: "LOG_FORMAT",
                        value,
                    });
                }
            },
        };

        let emit_metrics = match lookup("EMIT_METRICS") {
            None => defaults.emit_metrics,
            Some(value) => match normalize(&value).as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" | "" => false,
                _ => {
                    return Err(CliError::InvalidConfig {
                        key: "EMIT_METRICS",
                        value,
                    });
                }
            },
        };

        Ok(Self {
            dataset_path,
            log_level,
            log_format,
            emit_metrics,
        })
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            emit_metrics: false,
        }
    }
}
