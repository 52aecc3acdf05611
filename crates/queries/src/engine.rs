//! Query engine over a borrowed dataset.

use std::collections::BTreeMap;

use catalog::{Dataset, Order, Price, Product};
use common::{OrderId, ProductId};

use crate::criteria::PriceComparison;
use crate::statistics::PriceStatistics;

fn record(query: &'static str) {
    metrics::counter!("catalog_queries_total", "query" => query).increment(1);
}

/// Read-only queries over a [`Dataset`].
///
/// The engine borrows the dataset for its lifetime and returns references
/// into it, never copies. Every query preserves the collection order of the
/// dataset unless it documents otherwise, and none can fail: no match is an
/// empty result.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over `dataset`.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Returns the underlying dataset.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Products in `category` (case-insensitive) whose price passes
    /// `min_price` under `comparison`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn filter_by_category_and_min_price(
        &self,
        category: &str,
        min_price: Price,
        comparison: PriceComparison,
    ) -> Vec<&'a Product> {
        record("filter_by_category_and_min_price");
        let products: Vec<_> = self
            .dataset
            .products()
            .iter()
            .filter(|p| p.in_category(category))
            .filter(|p| comparison.admits(p.price(), min_price))
            .collect();
        tracing::debug!(matched = products.len(), "products filtered");
        products
    }

    /// Orders with at least one product in `category` (case-insensitive).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn orders_containing_category(&self, category: &str) -> Vec<&'a Order> {
        record("orders_containing_category");
        let dataset = self.dataset;
        let orders: Vec<_> = dataset
            .orders()
            .iter()
            .filter(|order| {
                dataset
                    .order_products(order)
                    .any(|p| p.in_category(category))
            })
            .collect();
        tracing::debug!(matched = orders.len(), "orders filtered");
        orders
    }

    /// Lowest-priced product in `category`; the first one in table order
    /// wins a tie.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn cheapest_in_category(&self, category: &str) -> Option<&'a Product> {
        record("cheapest_in_category");
        self.dataset
            .products()
            .iter()
            .filter(|p| p.in_category(category))
            .min_by(|a, b| a.price().total_cmp(&b.price()))
    }

    /// Up to `limit` orders, most recent first.
    ///
    /// The sort is stable: orders with equal dates keep their original
    /// relative order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn most_recent_orders(&self, limit: usize) -> Vec<&'a Order> {
        record("most_recent_orders");
        if limit == 0 {
            return Vec::new();
        }
        let mut orders: Vec<_> = self.dataset.orders().iter().collect();
        orders.sort_by(|a, b| b.order_date().cmp(&a.order_date()));
        orders.truncate(limit);
        orders
    }

    /// Price summary over the products in `category` (case-insensitive).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn category_price_statistics(&self, category: &str) -> PriceStatistics {
        record("category_price_statistics");
        PriceStatistics::from_prices(
            self.dataset
                .products()
                .iter()
                .filter(|p| p.in_category(category))
                .map(Product::price),
        )
    }

    /// Number of product entries per order, duplicates included.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn order_product_counts(&self) -> BTreeMap<OrderId, usize> {
        record("order_product_counts");
        self.dataset
            .orders()
            .iter()
            .map(|order| (order.id(), order.product_count()))
            .collect()
    }

    /// Product ids grouped by their literal category label.
    ///
    /// Unlike the filters, grouping does not fold case: `"Toys"` and `"toys"`
    /// are separate keys. Ids within a key keep table order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn product_ids_by_category(&self) -> BTreeMap<String, Vec<ProductId>> {
        record("product_ids_by_category");
        let mut groups: BTreeMap<String, Vec<ProductId>> = BTreeMap::new();
        for product in self.dataset.products() {
            groups
                .entry(product.category().as_str().to_string())
                .or_default()
                .push(product.id());
        }
        groups
    }
}
