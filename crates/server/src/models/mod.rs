//! Domain models for the menu API.
//!
//! # Models
//!
//! - `menu_item` - Catalog items with priced variants and manual ordering
//! - `inquiry` - Customer purchase inquiries with denormalized line items
//! - `admin_user` - Dashboard accounts with hashed credentials
//!
//! Each model comes with a payload type for the client-submitted subset of
//! its fields; the server assigns ids and timestamps itself.

use thiserror::Error;

pub mod admin_user;
pub mod inquiry;
pub mod menu_item;

/// Validation failures for client-submitted payloads.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Catalog item submitted without any purchasable variant.
    #[error("at least one variant is required")]
    NoVariants,

    /// Discount is negative or not a finite number.
    #[error("discount must be a non-negative number")]
    InvalidDiscount,
}
