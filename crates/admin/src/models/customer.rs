//! Customer records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use miss_accessories_core::{CustomerId, CustomerTier, Phone, Price, Recorded};

/// A customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Phone,
    /// Number used for WhatsApp conversations (often the same as `phone`).
    pub whatsapp: Phone,
    pub total_orders: u32,
    pub total_spent: Price,
    pub last_order: NaiveDate,
    pub tier: Recorded<CustomerTier>,
    pub join_date: NaiveDate,
    pub avg_order_value: Price,
}

impl Customer {
    /// Fields matched by the customer search box: name, email, phone.
    #[must_use]
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.name, &self.email, self.phone.as_str()]
    }

    #[must_use]
    pub fn is_vip(&self) -> bool {
        self.tier == CustomerTier::Vip
    }
}
