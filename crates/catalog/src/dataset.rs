//! The dataset context object.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use common::{CustomerId, OrderId, ProductId};

use crate::customer::Customer;
use crate::error::{CatalogError, Result};
use crate::order::Order;
use crate::product::Product;

/// Owns the customer, order and product collections.
///
/// A dataset is built once by the assembly code and then lent out: shared
/// borrows for queries, an exclusive borrow for the discount command. The
/// collections keep their original order and never grow or shrink after
/// construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    products: Vec<Product>,
    product_index: HashMap<ProductId, usize>,
    order_index: HashMap<OrderId, usize>,
    customer_index: HashMap<CustomerId, usize>,
}

impl Dataset {
    /// Builds a dataset, rejecting duplicate identifiers and orders that
    /// reference products missing from the product table.
    pub fn new(
        customers: Vec<Customer>,
        orders: Vec<Order>,
        products: Vec<Product>,
    ) -> Result<Self> {
        let customer_index = index_by(&customers, Customer::id, CatalogError::DuplicateCustomer)?;
        let product_index = index_by(&products, Product::id, CatalogError::DuplicateProduct)?;
        let order_index = index_by(&orders, Order::id, CatalogError::DuplicateOrder)?;

        for order in &orders {
            if let Some(missing) = order
                .product_ids()
                .iter()
                .find(|id| !product_index.contains_key(*id))
            {
                return Err(CatalogError::UnknownProduct {
                    order_id: order.id(),
                    product_id: *missing,
                });
            }
        }

        tracing::debug!(
            customers = customers.len(),
            orders = orders.len(),
            products = products.len(),
            "dataset built"
        );

        Ok(Self {
            customers,
            orders,
            products,
            product_index,
            order_index,
            customer_index,
        })
    }

    /// Starts a fluent builder.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index.get(&id).map(|&i| &self.products[i])
    }

    /// Looks up an order by id.
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.order_index.get(&id).map(|&i| &self.orders[i])
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customer_index.get(&id).map(|&i| &self.customers[i])
    }

    /// Resolves an order's product list against the product table, in list
    /// order and with duplicates.
    pub fn order_products<'a>(&'a self, order: &'a Order) -> impl Iterator<Item = &'a Product> {
        order
            .product_ids()
            .iter()
            .filter_map(move |id| self.product(*id))
    }

    /// Mutable view of the product table. The slice cannot change length.
    pub(crate) fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }
}

fn index_by<T, K, F, E>(items: &[T], key: F, duplicate: E) -> Result<HashMap<K, usize>>
where
    K: std::hash::Hash + Eq + Copy,
    F: Fn(&T) -> K,
    E: Fn(K) -> CatalogError,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        match index.entry(key(item)) {
            Entry::Occupied(entry) => return Err(duplicate(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(position);
            }
        }
    }
    Ok(index)
}

/// Fluent builder for [`Dataset`].
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    products: Vec<Product>,
}

impl DatasetBuilder {
    /// Adds a customer.
    pub fn customer(mut self, customer: Customer) -> Self {
        self.customers.push(customer);
        self
    }

    /// Adds an order.
    pub fn order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    /// Adds a product.
    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    /// Validates and builds the dataset.
    pub fn build(self) -> Result<Dataset> {
        Dataset::new(self.customers, self.orders, self.products)
    }
}
