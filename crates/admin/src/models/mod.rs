//! Domain models for the admin dashboard.
//!
//! Every record is loaded once from the seed document and never mutated.
//! There is no referential integrity between entities: an order names its
//! customer by name and phone, not by [`CustomerId`].
//!
//! [`CustomerId`]: miss_accessories_core::CustomerId

pub mod chat;
pub mod customer;
pub mod metric;
pub mod order;
pub mod product;

pub use chat::{Chat, ChatWidget, MessageTemplate};
pub use customer::Customer;
pub use metric::HeadlineMetric;
pub use order::Order;
pub use product::Product;
