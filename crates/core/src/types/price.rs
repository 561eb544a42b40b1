//! Product pricing with decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Retail pricing for a product.
///
/// The upstream catalog quotes a strike-through list price (`mrp`), the
/// actual selling price (`cost`), and the advertised discount percentage.
/// Field names follow the upstream API's JSON shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Maximum retail price (shown struck through).
    pub mrp: Decimal,
    /// Selling price the customer actually pays.
    pub cost: Decimal,
    /// Advertised discount, as a percentage of `mrp`.
    pub discount_percent: Decimal,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(mrp: Decimal, cost: Decimal, discount_percent: Decimal) -> Self {
        Self {
            mrp,
            cost,
            discount_percent,
        }
    }

    /// Absolute amount saved versus the list price.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.mrp - self.cost
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_savings() {
        let price = Price::new(Decimal::from(100), Decimal::from(75), Decimal::from(25));
        assert_eq!(price.savings(), Decimal::from(25));
    }

    #[test]
    fn test_serde_field_names() {
        let price = Price::new(Decimal::from(999), Decimal::from(499), Decimal::from(50));
        let json = serde_json::to_value(price).unwrap();
        assert!(json.get("discountPercent").is_some());
        assert!(json.get("mrp").is_some());
    }
}
