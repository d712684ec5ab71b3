//! Status badge mapping.
//!
//! A badge is a display label plus a style class. Known statuses map through
//! [`BadgeStyle`]; a recorded code outside the known set gets
//! [`Badge::fallback`], which shows the raw value with the generic
//! `bg-secondary` class.

use miss_accessories_core::{
    ChatStatus, CustomerTier, OrderStatus, PaymentStatus, Recorded, ShippingStatus, StockStatus,
};

/// Class used for unrecognized statuses.
pub const FALLBACK_CLASS: &str = "bg-secondary";

/// A rendered status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub css_class: &'static str,
}

impl Badge {
    fn new(label: impl Into<String>, css_class: &'static str) -> Self {
        Self {
            label: label.into(),
            css_class,
        }
    }

    /// Badge for a status string with no known mapping.
    #[must_use]
    pub fn fallback(raw: &str) -> Self {
        Self::new(raw, FALLBACK_CLASS)
    }
}

/// A status with a badge mapping.
pub trait BadgeStyle {
    fn badge(&self) -> Badge;
}

/// Never fails: an unrecognized code yields [`Badge::fallback`].
impl<S: BadgeStyle> BadgeStyle for Recorded<S> {
    fn badge(&self) -> Badge {
        match self {
            Self::Known(status) => status.badge(),
            Self::Unknown(raw) => Badge::fallback(raw),
        }
    }
}

impl BadgeStyle for CustomerTier {
    fn badge(&self) -> Badge {
        match self {
            Self::Vip => Badge::new("VIP", "badge-vip"),
            Self::Regular => Badge::new("Regular", "bg-primary"),
            Self::New => Badge::new("New", "bg-success"),
        }
    }
}

impl BadgeStyle for StockStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Critical => Badge::new("Critical", "bg-destructive"),
            Self::LowStock => Badge::new("Low Stock", "bg-warning"),
            Self::InStock => Badge::new("In Stock", "bg-success"),
        }
    }
}

/// Stock badge that shows the unit count when the product is in stock.
#[must_use]
pub fn stock_badge(status: &Recorded<StockStatus>, stock: u32) -> Badge {
    match status.known() {
        Some(StockStatus::InStock) => Badge::new(format!("In Stock ({stock})"), "bg-success"),
        _ => status.badge(),
    }
}

impl BadgeStyle for OrderStatus {
    fn badge(&self) -> Badge {
        let css_class = match self {
            Self::Pending => "bg-warning",
            Self::Processing => "bg-info",
            Self::Shipped => "bg-info-strong",
            Self::Completed => "bg-success",
            Self::Cancelled => "bg-destructive",
        };
        Badge::new(self.title(), css_class)
    }
}

impl BadgeStyle for PaymentStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Paid => Badge::new("Paid", "bg-success"),
            Self::Pending => Badge::new("Pending", "bg-warning"),
        }
    }
}

impl BadgeStyle for ShippingStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::NotShipped => Badge::new("Not Shipped", "bg-muted"),
            Self::Preparing => Badge::new("Preparing", "bg-warning"),
            Self::InTransit => Badge::new("In Transit", "bg-info"),
            Self::Delivered => Badge::new("Delivered", "bg-success"),
        }
    }
}

impl BadgeStyle for ChatStatus {
    fn badge(&self) -> Badge {
        match self {
            Self::Unread => Badge::new("New", "bg-destructive"),
            Self::Read => Badge::new("Read", "bg-muted"),
            Self::Replied => Badge::new("Replied", "bg-success"),
        }
    }
}
