//! MISS Accessories Core - Shared types library.
//!
//! This crate provides the pieces used by the admin panel and its tests:
//! - `admin` - Server-rendered dashboard for inventory, orders, customers and WhatsApp
//! - `integration-tests` - End-to-end tests against a running admin server
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no templates. Every list view in the admin filters and aggregates through
//! the helpers here instead of re-deriving the logic per screen.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, phone numbers and status enums
//! - [`search`] - Case-insensitive substring filtering over record lists
//! - [`stats`] - Single-pass counts, sums and averages
//! - [`placeholder`] - `{token}` extraction and substitution for message templates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod placeholder;
pub mod search;
pub mod stats;
pub mod types;

pub use search::{SearchQuery, filter_records};
pub use types::*;
