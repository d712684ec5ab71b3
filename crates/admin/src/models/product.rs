//! Product and stock records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use miss_accessories_core::{Price, ProductId, Recorded, StockStatus};

/// A catalog product with its stock level.
///
/// `status` is recorded, not computed: it is not checked against `stock`
/// and `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
    /// Reorder point.
    pub threshold: u32,
    pub status: Recorded<StockStatus>,
    pub last_updated: NaiveDate,
}

impl Product {
    /// Fields matched by the inventory search box: name, SKU.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.sku]
    }

    /// Price times units on hand.
    #[must_use]
    pub fn stock_value(&self) -> Price {
        self.price * self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_value() {
        let product = Product {
            id: ProductId::new("PRD-003"),
            name: "Diamond Stud Earrings".to_string(),
            sku: "DSE-003".to_string(),
            category: "Earrings".to_string(),
            price: Price::from_cents(19_999),
            stock: 15,
            threshold: 8,
            status: StockStatus::InStock.into(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        };

        assert_eq!(product.stock_value().to_string(), "$2999.85");
        assert_eq!(product.search_fields(), ["Diamond Stud Earrings", "DSE-003"]);
    }
}
