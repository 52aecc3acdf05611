//! Tracing and metrics setup for the report binary.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};
use crate::error::{CliError, Result};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|_| CliError::InvalidConfig {
        key: "RUST_LOG",
        value: config.log_level.clone(),
    })?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}

/// Installs a Prometheus recorder as the global metrics recorder.
///
/// The recorder is not served over HTTP; the returned handle renders the
/// text exposition on demand.
pub fn install_metrics() -> Result<PrometheusHandle> {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    metrics::set_global_recorder(recorder).map_err(|e| CliError::Metrics(e.to_string()))?;
    Ok(handle)
}
