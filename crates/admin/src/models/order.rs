//! Order records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use miss_accessories_core::{
    OrderId, OrderStatus, PaymentStatus, Phone, Price, Recorded, ShippingStatus,
};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Customer display name; not a foreign key.
    pub customer: String,
    pub customer_phone: Phone,
    pub items: Vec<String>,
    pub total: Price,
    pub status: Recorded<OrderStatus>,
    pub payment_status: Recorded<PaymentStatus>,
    pub shipping_status: Recorded<ShippingStatus>,
    pub order_date: NaiveDate,
    /// Expected delivery date, when one has been set.
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
}

impl Order {
    /// Fields matched by the order search box: order ID, customer name.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 2] {
        [self.id.as_str(), &self.customer]
    }

    /// Item names joined for a single table cell.
    #[must_use]
    pub fn items_summary(&self) -> String {
        self.items.join(", ")
    }
}
