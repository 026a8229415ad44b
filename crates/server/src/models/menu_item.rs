//! Catalog item domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use budbar_core::{ItemType, MenuItemId};

use super::ValidationError;

/// A named, individually priced option of a catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Display name (e.g., "3.5g", "Half Oz").
    pub name: String,
    /// Price in dollars.
    pub price: f64,
}

/// A sellable catalog item with one or more priced variants.
///
/// Documents written before newer fields existed deserialize with defaults,
/// so older catalogs keep loading after schema additions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique item ID.
    pub id: MenuItemId,
    /// Display title.
    pub title: String,
    /// Long-form description shown on the item card.
    pub description: String,
    /// Category labels this item appears under.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Catalog section the item belongs to.
    #[serde(default)]
    pub item_type: ItemType,
    /// Freeform detail line (strain type, potency, etc.).
    #[serde(default)]
    pub meta_details: String,
    /// Inline data-URI images.
    #[serde(default)]
    pub images: Vec<String>,
    /// Purchasable variants; never empty for a persisted item.
    pub variants: Vec<Variant>,
    /// Non-negative discount applied at display time.
    #[serde(default)]
    pub discount: f64,
    /// Manual sort position within the menu.
    #[serde(default)]
    pub display_order: i64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// Client-submitted fields for creating or updating a catalog item.
///
/// The server assigns `id` and `created_at`; everything else comes from
/// this payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemPayload {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub meta_details: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub display_order: i64,
}

impl MenuItemPayload {
    /// Check payload-level invariants before persisting.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoVariants` if the variant list is empty.
    /// Returns `ValidationError::InvalidDiscount` if the discount is negative
    /// or not a finite number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.variants.is_empty() {
            return Err(ValidationError::NoVariants);
        }

        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err(ValidationError::InvalidDiscount);
        }

        Ok(())
    }
}

impl MenuItem {
    /// Build a new catalog item from a payload, assigning id and timestamp.
    #[must_use]
    pub fn new(payload: MenuItemPayload) -> Self {
        Self {
            id: MenuItemId::generate(),
            title: payload.title,
            description: payload.description,
            categories: payload.categories,
            item_type: payload.item_type,
            meta_details: payload.meta_details,
            images: payload.images,
            variants: payload.variants,
            discount: payload.discount,
            display_order: payload.display_order,
            created_at: Utc::now(),
        }
    }
}
