//! Order entity.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order has been placed.
    #[default]
    New,

    /// Order is awaiting shipment.
    Pending,

    /// Order has reached the customer.
    Delivered,
}

impl OrderStatus {
    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An order placed by a customer.
///
/// The product list holds identifiers into the dataset's product table. It
/// keeps insertion order and may name the same product more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    order_date: DateTime<Utc>,
    #[serde(default)]
    status: OrderStatus,
    #[serde(default)]
    products: Vec<ProductId>,
}

impl Order {
    /// Creates a new order with status [`OrderStatus::New`].
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        order_date: DateTime<Utc>,
        products: impl IntoIterator<Item = ProductId>,
    ) -> Self {
        Self {
            id,
            customer_id,
            order_date,
            status: OrderStatus::default(),
            products: products.into_iter().collect(),
        }
    }

    /// Sets the status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the referenced product ids in order.
    pub fn product_ids(&self) -> &[ProductId] {
        &self.products
    }

    /// Returns the number of product entries, duplicates included.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Order #{} customer={} date={} status={} products=[",
            self.id,
            self.customer_id,
            self.order_date.format("%Y-%m-%d %H:%M"),
            self.status
        )?;
        for (i, product_id) in self.products.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{product_id}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn new_order_defaults_to_new_status() {
        let order = Order::new(OrderId::new(1), CustomerId::new(1), order_date(), []);
        assert_eq!(order.status(), OrderStatus::New);
        assert_eq!(order.product_count(), 0);
    }

    #[test]
    fn product_count_includes_duplicates() {
        let order = Order::new(
            OrderId::new(1),
            CustomerId::new(1),
            order_date(),
            [ProductId::new(7), ProductId::new(7), ProductId::new(2)],
        );
        assert_eq!(order.product_count(), 3);
        assert_eq!(
            order.product_ids(),
            &[ProductId::new(7), ProductId::new(7), ProductId::new(2)]
        );
    }

    #[test]
    fn display_lists_product_ids() {
        let order = Order::new(
            OrderId::new(101),
            CustomerId::new(2),
            order_date(),
            [ProductId::new(1), ProductId::new(4)],
        )
        .with_status(OrderStatus::Delivered);
        assert_eq!(
            order.to_string(),
            "Order #101 customer=2 date=2024-03-01 10:00 status=Delivered products=[1, 4]"
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{"id": 5, "customer_id": 1, "order_date": "2024-01-10T09:30:00Z"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id(), OrderId::new(5));
        assert_eq!(order.status(), OrderStatus::New);
        assert!(order.product_ids().is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
