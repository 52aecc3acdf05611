//! Data providers that produce a validated [`Dataset`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::customer::Customer;
use crate::dataset::Dataset;
use crate::error::{CatalogError, Result};
use crate::order::Order;
use crate::product::Product;

const SAMPLE_DATASET: &str = include_str!("../data/sample.json");

/// Source of the initial customer, order and product records.
pub trait DataProvider {
    /// Returns the provider name for logging.
    fn name(&self) -> &'static str;

    /// Loads and validates a dataset.
    fn load(&self) -> Result<Dataset>;
}

/// On-disk and embedded JSON shape of a dataset.
#[derive(Debug, Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    customers: Vec<Customer>,
    #[serde(default)]
    orders: Vec<Order>,
    #[serde(default)]
    products: Vec<Product>,
}

/// Parses a JSON dataset document and validates it.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let document: DatasetDocument = serde_json::from_str(json)?;
    Dataset::new(document.customers, document.orders, document.products)
}

fn record_load(provider: &'static str, dataset: &Dataset) {
    metrics::counter!("catalog_dataset_loads_total", "provider" => provider).increment(1);
    tracing::info!(
        provider,
        customers = dataset.customers().len(),
        orders = dataset.orders().len(),
        products = dataset.products().len(),
        "dataset loaded"
    );
}

/// The fixed, pre-populated dataset compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataProvider;

impl SampleDataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for SampleDataProvider {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn load(&self) -> Result<Dataset> {
        let dataset = parse_dataset(SAMPLE_DATASET)?;
        record_load(self.name(), &dataset);
        Ok(dataset)
    }
}

/// Loads a dataset from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataProvider for JsonFileProvider {
    fn name(&self) -> &'static str {
        "json-file"
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Dataset> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let dataset = parse_dataset(&json)?;
        record_load(self.name(), &dataset);
        Ok(dataset)
    }
}
