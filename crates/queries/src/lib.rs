//! Read-only queries over a catalog [`Dataset`](catalog::Dataset).
//!
//! This crate provides the query side of the catalog:
//! - [`QueryEngine`] with the filter, grouping, recency and statistics queries
//! - [`PriceComparison`] for choosing a strict or inclusive price threshold
//! - [`PriceStatistics`] summarising prices in a category
//!
//! Price changes go through [`catalog::DiscountService`], never through here.

pub mod criteria;
pub mod engine;
pub mod statistics;

pub use criteria::PriceComparison;
pub use engine::QueryEngine;
pub use statistics::PriceStatistics;
