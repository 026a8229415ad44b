//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! IDs are opaque strings assigned once at entity creation (UUID v4 under the
//! hood) and used verbatim as the lookup key in the document store. Lookups
//! accept arbitrary strings - an ID that matches no document reads as
//! "absent", never as a parse error.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` producing a fresh UUID v4 value
/// - Conversion methods: `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `AsRef<str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use budbar_core::define_id;
/// define_id!(MenuItemId);
/// define_id!(InquiryId);
///
/// let item_id = MenuItemId::generate();
/// let inquiry_id = InquiryId::generate();
///
/// // These are different types, so this won't compile:
/// // let _: MenuItemId = inquiry_id;
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
            /// Generate a fresh ID from a random UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
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
define_id!(MenuItemId);
define_id!(InquiryId);
define_id!(AdminUserId);

/// Marker trait implemented by all `define_id!` types.
///
/// Exists so generic helpers (e.g. test fixtures) can accept any entity ID.
pub trait EntityId: AsRef<str> + Clone + Serialize + for<'de> Deserialize<'de> {}

impl EntityId for MenuItemId {}
impl EntityId for InquiryId {}
impl EntityId for AdminUserId {}
