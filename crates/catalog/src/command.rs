//! The discount command: the only write path into a dataset.

use crate::dataset::Dataset;
use crate::product::Product;

/// Command to multiply the price of every product in a category by `factor`.
///
/// Category matching ignores case. The factor is applied as given: values in
/// `(0, 1]` discount, values above 1 raise prices, and applying the same
/// command twice compounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyDiscount {
    pub category: String,
    pub factor: f64,
}

impl ApplyDiscount {
    /// Creates a new discount command.
    pub fn new(category: impl Into<String>, factor: f64) -> Self {
        Self {
            category: category.into(),
            factor,
        }
    }
}

/// Outcome of [`DiscountService::apply_discount`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountApplied {
    /// Category the command targeted, as requested.
    pub category: String,

    /// Factor applied to each matching price.
    pub factor: f64,

    /// Snapshot of the affected products with their new prices, in table order.
    pub products: Vec<Product>,
}

impl DiscountApplied {
    /// Returns the number of products whose price changed.
    pub fn affected(&self) -> usize {
        self.products.len()
    }
}

/// Service that applies price commands to a dataset.
///
/// Holds the only mutable borrow of the dataset for its lifetime, so no
/// query can observe a half-applied discount.
pub struct DiscountService<'a> {
    dataset: &'a mut Dataset,
}

impl<'a> DiscountService<'a> {
    pub fn new(dataset: &'a mut Dataset) -> Self {
        Self { dataset }
    }

    /// Multiplies the price of each product in the command's category in place.
    ///
    /// Orders reference products by id, so every order sees the new prices.
    #[tracing::instrument(skip(self, cmd), fields(category = %cmd.category, factor = cmd.factor))]
    pub fn apply_discount(&mut self, cmd: &ApplyDiscount) -> DiscountApplied {
        let mut discounted = Vec::new();

        for product in self
            .dataset
            .products_mut()
            .iter_mut()
            .filter(|p| p.in_category(&cmd.category))
        {
            let new_price = product.price().scaled(cmd.factor);
            product.set_price(new_price);
            discounted.push(product.clone());
        }

        metrics::counter!("catalog_discounts_applied_total").increment(1);
        metrics::counter!("catalog_products_discounted_total").increment(discounted.len() as u64);
        tracing::info!(affected = discounted.len(), "discount applied");

        DiscountApplied {
            category: cmd.category.clone(),
            factor: cmd.factor,
            products: discounted,
        }
    }
}
