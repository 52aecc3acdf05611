//! Filter criteria for product queries.

use catalog::Price;

/// How a product price is compared against a minimum price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PriceComparison {
    /// Price must be greater than the minimum.
    #[default]
    StrictlyGreater,

    /// Price must be greater than or equal to the minimum.
    GreaterOrEqual,
}

impl PriceComparison {
    /// Returns true if `price` passes the threshold `min_price`.
    pub fn admits(&self, price: Price, min_price: Price) -> bool {
        match self {
            PriceComparison::StrictlyGreater => price.amount() > min_price.amount(),
            PriceComparison::GreaterOrEqual => price.amount() >= min_price.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_greater_excludes_threshold() {
        let min = Price::new(100.0);
        assert!(PriceComparison::StrictlyGreater.admits(Price::new(100.01), min));
        assert!(!PriceComparison::StrictlyGreater.admits(Price::new(100.0), min));
        assert!(!PriceComparison::StrictlyGreater.admits(Price::new(99.0), min));
    }

    #[test]
    fn greater_or_equal_includes_threshold() {
        let min = Price::new(100.0);
        assert!(PriceComparison::GreaterOrEqual.admits(Price::new(100.0), min));
        assert!(!PriceComparison::GreaterOrEqual.admits(Price::new(99.99), min));
    }

    #[test]
    fn default_is_strict() {
        assert_eq!(PriceComparison::default(), PriceComparison::StrictlyGreater);
    }
}
