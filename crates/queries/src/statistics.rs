//! Summary statistics over product prices.

use catalog::Price;

/// Count, sum, minimum, maximum and average of a set of prices.
///
/// An empty summary has `count == 0` and `sum == 0.0`; minimum, maximum and
/// average are `None` because they are undefined over no values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceStatistics {
    pub count: u64,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceStatistics {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a summary from a sequence of prices.
    pub fn from_prices(prices: impl IntoIterator<Item = Price>) -> Self {
        let mut stats = Self::new();
        for price in prices {
            stats.accept(price);
        }
        stats
    }

    /// Folds one price into the summary.
    pub fn accept(&mut self, price: Price) {
        let amount = price.amount();
        self.count += 1;
        self.sum += amount;
        self.min = Some(self.min.map_or(amount, |m| m.min(amount)));
        self.max = Some(self.max.map_or(amount, |m| m.max(amount)));
    }

    /// Returns `sum / count`, or `None` when empty.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

struct Fixed2(Option<f64>);

impl std::fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value:.2}"),
            None => f.write_str("n/a"),
        }
    }
}

impl std::fmt::Display for PriceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "count={}, sum={:.2}, min={}, average={}, max={}",
            self.count,
            self.sum,
            Fixed2(self.min),
            Fixed2(self.average()),
            Fixed2(self.max)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(amounts: &[f64]) -> Vec<Price> {
        amounts.iter().copied().map(Price::new).collect()
    }

    #[test]
    fn summarises_book_prices() {
        let stats = PriceStatistics::from_prices(prices(&[120.0, 80.0, 150.0]));

        assert_eq!(stats.count, 3);
        assert_eq!(stats.sum, 350.0);
        assert_eq!(stats.min, Some(80.0));
        assert_eq!(stats.max, Some(150.0));
        assert!((stats.average().unwrap() - 116.666_666).abs() < 1e-5);
    }

    #[test]
    fn display_uses_two_decimals() {
        let stats = PriceStatistics::from_prices(prices(&[120.0, 80.0, 150.0]));
        assert_eq!(
            stats.to_string(),
            "count=3, sum=350.00, min=80.00, average=116.67, max=150.00"
        );
    }

    #[test]
    fn empty_summary_has_absent_extremes() {
        let stats = PriceStatistics::from_prices(Vec::new());

        assert!(stats.is_empty());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.sum, 0.0);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(stats.average(), None);
        assert_eq!(
            stats.to_string(),
            "count=0, sum=0.00, min=n/a, average=n/a, max=n/a"
        );
    }

    #[test]
    fn single_price_is_min_max_and_average() {
        let stats = PriceStatistics::from_prices(prices(&[42.5]));
        assert_eq!(stats.min, Some(42.5));
        assert_eq!(stats.max, Some(42.5));
        assert_eq!(stats.average(), Some(42.5));
    }

    #[test]
    fn accept_folds_incrementally() {
        let mut stats = PriceStatistics::new();
        stats.accept(Price::new(10.0));
        stats.accept(Price::new(30.0));
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average(), Some(20.0));
    }
}
