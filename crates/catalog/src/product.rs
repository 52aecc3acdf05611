//! Product entity and its value objects.

use std::cmp::Ordering;

use common::ProductId;
use serde::{Deserialize, Serialize};

/// Product price as a decimal amount.
///
/// Prices are expected to be non-negative. Ordering uses IEEE total order so
/// prices can be sorted and compared without an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a decimal amount.
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns zero.
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the decimal amount.
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns this price multiplied by `factor`.
    ///
    /// No range check is applied; a factor above 1.0 raises the price.
    pub fn scaled(&self, factor: f64) -> Price {
        Price(self.0 * factor)
    }

    /// Compares two prices using IEEE 754 total ordering.
    pub fn total_cmp(&self, other: &Price) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Price {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

/// Category label grouping products, e.g. `"Books"` or `"Toys"`.
///
/// The label is kept exactly as supplied. [`Category::matches`] compares
/// case-insensitively, while [`Category::as_str`] exposes the literal label
/// used as a grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a category from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the literal label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `label` names this category, ignoring case.
    pub fn matches(&self, label: &str) -> bool {
        self.0
            .chars()
            .flat_map(char::to_lowercase)
            .eq(label.chars().flat_map(char::to_lowercase))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A product in the catalog.
///
/// Products live in the dataset's product table. The price can only change
/// through [`crate::DiscountService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<Category>,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price: price.into(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns true if this product belongs to `category`, ignoring case.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.matches(category)
    }

    pub(crate) fn set_price(&mut self, price: Price) {
        self.price = price;
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Product #{} {} [{}] {}",
            self.id, self.name, self.category, self.price
        )
    }
}
