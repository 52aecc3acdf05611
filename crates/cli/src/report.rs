//! The fixed catalog report.

use std::io::Write;

use catalog::{ApplyDiscount, Dataset, DiscountService, Price};
use queries::{PriceComparison, QueryEngine};

use crate::error::Result;
use crate::render::ReportWriter;

const PREMIUM_CATEGORY: &str = "Books";
const PREMIUM_MIN_PRICE: Price = Price::new(100.0);
const BABY_CATEGORY: &str = "Baby";
const DISCOUNT_CATEGORY: &str = "Toys";
const DISCOUNT_FACTOR: f64 = 0.5;
const RECENT_ORDER_LIMIT: usize = 3;

/// Runs every catalog operation once, in a fixed order, writing each result
/// section to `out`.
///
/// The toy discount is applied to `dataset` in place, so the queries after it
/// see the discounted prices.
#[tracing::instrument(skip_all)]
pub fn run_report<W: Write>(dataset: &mut Dataset, out: &mut W) -> Result<()> {
    let mut report = ReportWriter::new(out);

    let engine = QueryEngine::new(dataset);
    report.section("Books > 100")?;
    report.lines(engine.filter_by_category_and_min_price(
        PREMIUM_CATEGORY,
        PREMIUM_MIN_PRICE,
        PriceComparison::StrictlyGreater,
    ))?;

    report.section("Orders with Baby products")?;
    report.lines(engine.orders_containing_category(BABY_CATEGORY))?;

    let discounted = DiscountService::new(dataset)
        .apply_discount(&ApplyDiscount::new(DISCOUNT_CATEGORY, DISCOUNT_FACTOR));
    report.section("Discounted Toys")?;
    report.lines(&discounted.products)?;

    let engine = QueryEngine::new(dataset);
    report.section("Cheapest Book")?;
    if let Some(product) = engine.cheapest_in_category(PREMIUM_CATEGORY) {
        report.line(product)?;
    }

    report.section("Recent Orders")?;
    report.lines(engine.most_recent_orders(RECENT_ORDER_LIMIT))?;

    report.section("Books Stats")?;
    report.line(engine.category_price_statistics(PREMIUM_CATEGORY))?;

    report.section("Order ID : Product Count")?;
    report.entries(&engine.order_product_counts())?;

    report.section("Products by Category")?;
    report.list_entries(&engine.product_ids_by_category())?;

    tracing::info!(discounted = discounted.affected(), "report complete");
    Ok(())
}
