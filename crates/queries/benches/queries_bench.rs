use catalog::{CustomerId, Dataset, Order, OrderId, Price, Product, ProductId};
use chrono::{Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use queries::{PriceComparison, QueryEngine};

const CATEGORIES: &[&str] = &["Books", "Toys", "toys", "Baby", "Garden"];

/// Build a dataset with `n` products and `n / 2` orders of four items each.
fn build_dataset(n: u64) -> Dataset {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut builder = Dataset::builder();

    for id in 1..=n {
        let category = CATEGORIES[(id % CATEGORIES.len() as u64) as usize];
        builder = builder.product(Product::new(
            ProductId::new(id),
            format!("product-{id}"),
            category,
            (id % 500) as f64 + 0.99,
        ));
    }

    for id in 1..=n / 2 {
        let items = (0..4).map(|k| ProductId::new((id * 7 + k) % n + 1));
        builder = builder.order(Order::new(
            OrderId::new(id),
            CustomerId::new(id % 50),
            start + Duration::hours((id * 13 % 2000) as i64),
            items,
        ));
    }

    builder.build().unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let dataset = build_dataset(10_000);
    let engine = QueryEngine::new(&dataset);

    c.bench_function("queries/filter_by_category_and_min_price_10k", |b| {
        b.iter(|| {
            engine.filter_by_category_and_min_price(
                "books",
                Price::new(100.0),
                PriceComparison::StrictlyGreater,
            )
        });
    });

    c.bench_function("queries/orders_containing_category_5k", |b| {
        b.iter(|| engine.orders_containing_category("Baby"));
    });
}

fn bench_aggregates(c: &mut Criterion) {
    let dataset = build_dataset(10_000);
    let engine = QueryEngine::new(&dataset);

    c.bench_function("queries/category_price_statistics_10k", |b| {
        b.iter(|| engine.category_price_statistics("Toys"));
    });

    c.bench_function("queries/product_ids_by_category_10k", |b| {
        b.iter(|| engine.product_ids_by_category());
    });

    c.bench_function("queries/most_recent_orders_5k", |b| {
        b.iter(|| engine.most_recent_orders(3));
    });
}

criterion_group!(benches, bench_filters, bench_aggregates);
criterion_main!(benches);
