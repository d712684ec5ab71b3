//! Reusable view components shared by the section pages.

pub mod badge;
pub mod data_table;
pub mod nav;

pub use badge::{Badge, BadgeStyle};
pub use data_table::DataTableConfig;
pub use nav::{NavItem, Section, ShellView};
