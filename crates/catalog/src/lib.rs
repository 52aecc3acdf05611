//! Catalog layer for the query workspace.
//!
//! This crate provides the data side of the system:
//! - [`Product`], [`Order`] and [`Customer`] entities
//! - [`Dataset`], the context object that owns all three collections
//! - [`DataProvider`] implementations that produce a validated dataset
//! - [`DiscountService`], the only operation that mutates catalog state

pub mod command;
pub mod customer;
pub mod dataset;
pub mod error;
pub mod order;
pub mod product;
pub mod provider;

pub use command::{ApplyDiscount, DiscountApplied, DiscountService};
pub use common::{CustomerId, OrderId, ProductId};
pub use customer::Customer;
pub use dataset::{Dataset, DatasetBuilder};
pub use error::{CatalogError, Result};
pub use order::{Order, OrderStatus};
pub use product::{Category, Price, Product};
pub use provider::{DataProvider, JsonFileProvider, SampleDataProvider, parse_dataset};
