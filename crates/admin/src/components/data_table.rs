//! Data table component types.
//!
//! These types define the header, search box, status filter and empty state
//! of the list tables in the admin panel.

use miss_accessories_core::OrderStatus;

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: &'static str,
    /// Display label for the column header.
    pub label: &'static str,
}

impl TableColumn {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Option for a select filter.
#[derive(Debug, Clone)]
pub struct FilterOption {
    /// Option value (sent as the query parameter).
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether this option is currently applied.
    pub selected: bool,
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: &'static str,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Search placeholder text.
    pub search_placeholder: &'static str,
    /// Options of the status select; empty when the table has none.
    pub status_options: Vec<FilterOption>,
    /// Title for empty state.
    pub empty_title: &'static str,
    /// Description for empty state.
    pub empty_description: &'static str,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub const fn new(table_id: &'static str) -> Self {
        Self {
            table_id,
            columns: Vec::new(),
            search_placeholder: "Search...",
            status_options: Vec::new(),
            empty_title: "No items found",
            empty_description: "Try adjusting your search",
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, key: &'static str, label: &'static str) -> Self {
        self.columns.push(TableColumn::new(key, label));
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub const fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    /// Set the empty state title.
    #[must_use]
    pub const fn empty_title(mut self, title: &'static str) -> Self {
        self.empty_title = title;
        self
    }

    /// Add a status select with an "all" option first.
    #[must_use]
    pub fn status_filter(
        mut self,
        all_label: &'static str,
        options: impl IntoIterator<Item = (&'static str, &'static str)>,
        selected: Option<&str>,
    ) -> Self {
        self.status_options.push(FilterOption {
            value: "all",
            label: all_label,
            selected: selected.is_none(),
        });
        self.status_options
            .extend(options.into_iter().map(|(value, label)| FilterOption {
                value,
                label,
                selected: selected == Some(value),
            }));
        self
    }

    /// Whether the table shows a status select.
    #[must_use]
    pub fn has_status_filter(&self) -> bool {
        !self.status_options.is_empty()
    }
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    DataTableConfig::new("customers")
        .column("customer", "Customer")
        .column("contact", "Contact")
        .column("orders", "Orders")
        .column("spent", "Total Spent")
        .column("status", "Status")
        .column("last_order", "Last Order")
        .search_placeholder("Search customers by name, email, or phone...")
        .empty_title("No customers found")
}

/// Build the inventory table configuration.
#[must_use]
pub fn inventory_table_config() -> DataTableConfig {
    DataTableConfig::new("inventory")
        .column("product", "Product")
        .column("sku", "SKU")
        .column("category", "Category")
        .column("price", "Price")
        .column("stock", "Stock")
        .column("status", "Status")
        .column("updated", "Last Updated")
        .search_placeholder("Search products by name or SKU...")
        .empty_title("No products found")
}

/// Build the orders table configuration with `selected` status applied.
#[must_use]
pub fn orders_table_config(selected: Option<OrderStatus>) -> DataTableConfig {
    DataTableConfig::new("orders")
        .column("order", "Order ID")
        .column("customer", "Customer")
        .column("items", "Items")
        .column("total", "Total")
        .column("status", "Status")
        .column("payment", "Payment")
        .column("date", "Date")
        .search_placeholder("Search orders by ID or customer name...")
        .status_filter(
            "All Orders",
            OrderStatus::ALL
                .iter()
                .map(|status| (status.as_str(), status.title())),
            selected.map(OrderStatus::as_str),
        )
        .empty_title("No orders found")
}
