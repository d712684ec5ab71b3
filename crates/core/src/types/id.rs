//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Record identifiers in
//! this store are display codes (`CUST-001`, `#ORD-001`), so the wrappers hold
//! a `String`.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `Display` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use miss_accessories_core::define_id;
/// define_id!(SupplierId);
/// define_id!(ShipmentId);
///
/// let supplier = SupplierId::new("SUP-001");
/// assert_eq!(supplier.as_str(), "SUP-001");
///
/// // These are different types, so this won't compile:
/// // let _: SupplierId = ShipmentId::new("SUP-001");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its display code.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying display code.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(CustomerId);
define_id!(ProductId);
define_id!(OrderId);
define_id!(ChatId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_the_code() {
        let id = OrderId::new("#ORD-001");
        assert_eq!(id.to_string(), "#ORD-001");
        assert_eq!(id.as_str(), "#ORD-001");
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = CustomerId::from("CUST-004");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"CUST-004\"");

        let back: CustomerId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
