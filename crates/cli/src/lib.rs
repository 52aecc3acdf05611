//! Command-line report over the catalog dataset.
//!
//! Loads a dataset, runs every catalog query and the toy discount once in a
//! fixed sequence, and prints the results to stdout. Logs go to stderr via
//! tracing; Prometheus metrics can be printed after the report.

pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod telemetry;

use catalog::{DataProvider, Dataset, JsonFileProvider, SampleDataProvider};

pub use config::{Config, LogFormat};
pub use error::{CliError, Result};
pub use report::run_report;

/// Chooses the data provider named by the configuration.
pub fn data_provider(config: &Config) -> Box<dyn DataProvider> {
    match &config.dataset_path {
        Some(path) => Box::new(JsonFileProvider::new(path)),
        None => Box::new(SampleDataProvider::new()),
    }
}

/// Loads the dataset named by the configuration.
pub fn load_dataset(config: &Config) -> Result<Dataset> {
    let provider = data_provider(config);
    tracing::debug!(provider = provider.name(), "loading dataset");
    Ok(provider.load()?)
}
