//! Integration tests: sample dataset → discount command → query engine.

use catalog::{ApplyDiscount, DataProvider, Dataset, DiscountService, Price, SampleDataProvider};
use common::{OrderId, ProductId};
use queries::{PriceComparison, QueryEngine};

fn sample() -> Dataset {
    SampleDataProvider::new().load().unwrap()
}

fn product_ids(products: &[&catalog::Product]) -> Vec<u64> {
    products.iter().map(|p| p.id().value()).collect()
}

fn order_ids(orders: &[&catalog::Order]) -> Vec<u64> {
    orders.iter().map(|o| o.id().value()).collect()
}

#[test]
fn books_above_one_hundred() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    let books = engine.filter_by_category_and_min_price(
        "Books",
        Price::new(100.0),
        PriceComparison::StrictlyGreater,
    );
    assert_eq!(product_ids(&books), vec![1, 3]);
}

#[test]
fn orders_with_baby_products() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    assert_eq!(order_ids(&engine.orders_containing_category("Baby")), vec![102, 105]);
}

#[test]
fn cheapest_book() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    let cheapest = engine.cheapest_in_category("Books").unwrap();
    assert_eq!(cheapest.id(), ProductId::new(2));
    assert_eq!(cheapest.price(), Price::new(80.0));
}

#[test]
fn three_most_recent_orders_keep_tie_order() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    // 102 and 104 share a timestamp; 102 comes first in the collection.
    assert_eq!(order_ids(&engine.most_recent_orders(3)), vec![102, 104, 101]);
}

#[test]
fn book_statistics() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    let stats = engine.category_price_statistics("Books");
    assert_eq!(stats.count, 3);
    assert_eq!(
        stats.to_string(),
        "count=3, sum=350.00, min=80.00, average=116.67, max=150.00"
    );
}

#[test]
fn order_product_counts() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    let counts: Vec<_> = engine
        .order_product_counts()
        .into_iter()
        .map(|(id, count)| (id.value(), count))
        .collect();
    assert_eq!(counts, vec![(101, 2), (102, 3), (103, 0), (104, 2), (105, 2)]);
}

#[test]
fn products_by_literal_category() {
    let dataset = sample();
    let engine = QueryEngine::new(&dataset);

    let groups: Vec<_> = engine
        .product_ids_by_category()
        .into_iter()
        .map(|(category, ids)| (category, ids.into_iter().map(|id| id.value()).collect::<Vec<_>>()))
        .collect();
    assert_eq!(
        groups,
        vec![
            ("Baby".to_string(), vec![6, 7]),
            ("Books".to_string(), vec![1, 2, 3]),
            ("Garden".to_string(), vec![9]),
            ("Toys".to_string(), vec![4, 5]),
            ("toys".to_string(), vec![8]),
        ]
    );
}

#[test]
fn toy_discount_is_visible_through_orders_and_queries() {
    let mut dataset = sample();

    let outcome =
        DiscountService::new(&mut dataset).apply_discount(&ApplyDiscount::new("Toys", 0.5));
    let discounted: Vec<_> = outcome
        .products
        .iter()
        .map(|p| (p.id().value(), p.price()))
        .collect();
    assert_eq!(
        discounted,
        vec![
            (4, Price::new(30.0)),
            (5, Price::new(12.5)),
            (8, Price::new(20.0)),
        ]
    );

    let engine = QueryEngine::new(&dataset);
    let order = dataset.order(OrderId::new(101)).unwrap();
    let prices: Vec<_> = dataset.order_products(order).map(|p| p.price()).collect();
    assert_eq!(prices, vec![Price::new(120.0), Price::new(30.0)]);

    let stats = engine.category_price_statistics("toys");
    assert_eq!(stats.sum, 62.5);
    assert_eq!(engine.cheapest_in_category("Toys").unwrap().id(), ProductId::new(5));
}
