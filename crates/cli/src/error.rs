//! CLI error types.

use catalog::CatalogError;
use thiserror::Error;

/// Errors that stop a report run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The dataset could not be loaded or failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid configuration: {key}={value:?}")]
    InvalidConfig { key: &'static str, value: String },

    /// A global tracing subscriber was already installed.
    #[error("Tracing setup failed: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),

    /// A global metrics recorder was already installed.
    #[error("Metrics setup failed: {0}")]
    Metrics(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
