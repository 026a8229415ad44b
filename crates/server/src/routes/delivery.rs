//! Delivery validation route handler.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::services::delivery::DeliveryQuote;
use crate::state::AppState;

/// Address and cart total to check against the delivery policy.
#[derive(Debug, Deserialize)]
pub struct ValidateDeliveryRequest {
    pub delivery_address: String,
    pub cart_total: f64,
}

/// Check whether a cart qualifies for delivery to an address.
///
/// POST /api/validate-delivery
///
/// Public: the storefront calls this while the customer is still filling
/// out the inquiry form, before anything is submitted.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the address is blank or does not
/// resolve to a location, and `AppError::Delivery` if the geocoding
/// service is unreachable.
#[instrument(skip_all, fields(cart_total = request.cart_total))]
pub async fn validate_delivery(
    State(state): State<AppState>,
    Json(request): Json<ValidateDeliveryRequest>,
) -> Result<Json<DeliveryQuote>, AppError> {
    let address = request.delivery_address.trim();
    if address.is_empty() {
        return Err(AppError::BadRequest(
            "delivery_address is required".to_string(),
        ));
    }

    let quote = state
        .delivery()
        .validate(address, request.cart_total)
        .await?;

    tracing::debug!(
        distance_miles = quote.distance_miles,
        minimum_order = quote.minimum_order,
        meets_minimum = quote.meets_minimum,
        "Delivery quote computed"
    );
    Ok(Json(quote))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_both_fields() {
        let parsed: Result<ValidateDeliveryRequest, _> =
            serde_json::from_str(r#"{"delivery_address": "100 Main St"}"#);
        assert!(parsed.is_err());

        let request: ValidateDeliveryRequest = serde_json::from_str(
            r#"{"delivery_address": "100 Main St, Lansing, MI", "cart_total": 80.0}"#,
        )
        .unwrap();
        assert_eq!(request.cart_total, 80.0);
    }
}
