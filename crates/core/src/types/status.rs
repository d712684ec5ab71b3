//! Status enums for various entities.
//!
//! Every status is a closed set of display values with no transition rules.
//! The wire form (serde, query strings, `FromStr`) is the `snake_case` code.
//!
//! Records carry their status as a [`Recorded`] value, so a code outside the
//! known set still loads and is shown as written.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A status string that is not one of the known codes for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownStatus {
    /// Which status enum rejected the value.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! define_status {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The `snake_case` code for this status.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownStatus;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownStatus {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

define_status! {
    /// Customer classification driving badge styling.
    CustomerTier ("customer tier") {
        New => "new",
        Regular => "regular",
        Vip => "vip",
    }
}

define_status! {
    /// Product stock level as recorded on the product.
    ///
    /// Not derived from stock vs. threshold; the recorded value is shown as-is.
    StockStatus ("stock status") {
        InStock => "in_stock",
        LowStock => "low_stock",
        Critical => "critical",
    }
}

define_status! {
    /// Order lifecycle status.
    OrderStatus ("order status") {
        Pending => "pending",
        Processing => "processing",
        Shipped => "shipped",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

define_status! {
    /// Order payment status.
    PaymentStatus ("payment status") {
        Pending => "pending",
        Paid => "paid",
    }
}

define_status! {
    /// Order shipping status.
    ShippingStatus ("shipping status") {
        NotShipped => "not_shipped",
        Preparing => "preparing",
        InTransit => "in_transit",
        Delivered => "delivered",
    }
}

define_status! {
    /// WhatsApp conversation status.
    ChatStatus ("chat status") {
        Unread => "unread",
        Read => "read",
        Replied => "replied",
    }
}

define_status! {
    /// Direction of a headline metric's change.
    Trend ("trend") {
        Up => "up",
        Down => "down",
    }
}

impl StockStatus {
    /// Whether the product should appear in low-stock alerts.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::LowStock | Self::Critical)
    }
}

impl OrderStatus {
    /// The code with its first letter capitalized ("Pending").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A status as stored on a record: a known code, or the raw string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recorded<S> {
    Known(S),
    Unknown(String),
}

impl<S: FromStr> Recorded<S> {
    /// Parse a code, keeping it verbatim when it is not one of `S`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse().map_or_else(|_| Self::Unknown(raw.to_owned()), Self::Known)
    }
}

impl<S> Recorded<S> {
    /// The known status, if the code was recognized.
    #[must_use]
    pub const fn known(&self) -> Option<&S> {
        match self {
            Self::Known(status) => Some(status),
            Self::Unknown(_) => None,
        }
    }
}

impl<S> From<S> for Recorded<S> {
    fn from(status: S) -> Self {
        Self::Known(status)
    }
}

impl<S: PartialEq> PartialEq<S> for Recorded<S> {
    fn eq(&self, other: &S) -> bool {
        self.known() == Some(other)
    }
}

impl<S: fmt::Display> fmt::Display for Recorded<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(status) => status.fmt(f),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl<S: fmt::Display> Serialize for Recorded<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, S: FromStr> Deserialize<'de> for Recorded<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
