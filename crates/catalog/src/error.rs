//! Catalog error types.

use std::path::PathBuf;

use common::{CustomerId, OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur while building or loading a dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share the same identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Two orders share the same identifier.
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    /// Two customers share the same identifier.
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomer(CustomerId),

    /// An order references a product that is not in the product table.
    #[error("Order {order_id} references unknown product {product_id}")]
    UnknownProduct {
        order_id: OrderId,
        product_id: ProductId,
    },

    /// The dataset file could not be read.
    #[error("Failed to read dataset from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON or has the wrong shape.
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
