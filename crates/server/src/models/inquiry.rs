//! Customer inquiry domain types.
//!
//! An inquiry is a checkout without payment: the customer submits contact
//! info plus a snapshot of their cart, and staff follow up by phone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use budbar_core::{DeliveryMethod, InquiryId, InquiryStatus, MenuItemId};

/// A line item captured at submission time.
///
/// Denormalized on purpose: later catalog edits must not rewrite what the
/// customer actually asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryItem {
    /// Catalog item this line was built from.
    pub menu_item_id: MenuItemId,
    /// Item title at submission time.
    pub title: String,
    /// Chosen variant name.
    pub variant_name: String,
    /// Variant price at submission time.
    pub variant_price: f64,
    /// Quantity ordered.
    pub quantity: i64,
    /// Discount in effect at submission time.
    #[serde(default)]
    pub discount: f64,
}

/// A customer purchase inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: InquiryId,
    pub first_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub delivery_method: DeliveryMethod,
    /// Street address; present when `delivery_method` is delivery.
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub referral_name: Option<String>,
    pub items: Vec<InquiryItem>,
    /// Client-computed total, stored exactly as submitted.
    pub total: f64,
    #[serde(default)]
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

/// Client-submitted inquiry fields.
///
/// The server assigns `id`, sets `status` to pending, and timestamps the
/// submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryPayload {
    pub first_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub delivery_method: DeliveryMethod,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub referral_name: Option<String>,
    pub items: Vec<InquiryItem>,
    pub total: f64,
}

impl Inquiry {
    /// Build a new inquiry from a payload, assigning id and timestamp.
    #[must_use]
    pub fn new(payload: InquiryPayload) -> Self {
        Self {
            id: InquiryId::generate(),
            first_name: payload.first_name,
            phone_number: payload.phone_number,
            delivery_method: payload.delivery_method,
            delivery_address: payload.delivery_address,
            referral_name: payload.referral_name,
            items: payload.items,
            total: payload.total,
            status: InquiryStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
