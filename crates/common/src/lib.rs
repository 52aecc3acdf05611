//! Shared types for the catalog query workspace.

pub mod types;

pub use types::{CustomerId, OrderId, ProductId};
