//! Distance-based delivery validation.
//!
//! Maps the great-circle distance between the shop's pickup location and a
//! customer's address onto a minimum order amount, and reports how far a
//! cart is from qualifying.

pub mod geocode;

pub use geocode::{Coordinates, GeocodeClient, GeocodeError};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Street address deliveries are measured from.
const PICKUP_ADDRESS: &str = "5624 Grand River Road, Bancroft, MI 48414";

/// Known coordinates for [`PICKUP_ADDRESS`].
///
/// The pickup location does not move, so a transient geocoder failure on
/// our own address falls back to these instead of blocking the request.
const PICKUP_FALLBACK: Coordinates = Coordinates {
    lat: 42.8786,
    lon: -84.0647,
};

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Minimum order for deliveries up to each mile bound, checked in order.
const TIERS: &[(f64, f64)] = &[(10.0, 60.0), (20.0, 75.0), (35.0, 90.0), (50.0, 111.0)];

/// Minimum order past the last tier bound; there is no upper distance
/// cutoff, far-out orders just pay the highest tier.
const TOP_TIER_MINIMUM: f64 = 111.0;

/// Errors from delivery validation.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The customer's address did not resolve to any location.
    #[error("Could not find address: {0}")]
    AddressNotFound(String),

    /// The geocoding service failed in some other way.
    #[error("Delivery validation failed: {0}")]
    Upstream(#[source] GeocodeError),
}

/// What the policy tells the customer about a prospective delivery.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryQuote {
    /// Great-circle distance from the pickup location, in miles,
    /// rounded to two decimals.
    pub distance_miles: f64,
    /// Minimum order for that distance.
    pub minimum_order: f64,
    /// Cart total exactly as submitted.
    pub cart_total: f64,
    /// How much more the cart needs to qualify, zero if it already does.
    pub remaining_needed: f64,
    /// Whether the cart meets the minimum.
    pub meets_minimum: bool,
}

/// Distance/minimum-order policy.
pub struct DeliveryPolicy {
    geocoder: GeocodeClient,
}

impl DeliveryPolicy {
    /// Create a policy backed by the given geocoder.
    #[must_use]
    pub const fn new(geocoder: GeocodeClient) -> Self {
        Self { geocoder }
    }

    /// Validate a prospective delivery.
    ///
    /// Both endpoints are resolved fresh on every call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::AddressNotFound` if the customer's address
    /// does not resolve. Returns `DeliveryError::Upstream` for any other
    /// geocoder failure. Failures resolving the pickup address are not
    /// errors; the known coordinates are used instead.
    pub async fn validate(
        &self,
        delivery_address: &str,
        cart_total: f64,
    ) -> Result<DeliveryQuote, DeliveryError> {
        let pickup = match self.geocoder.lookup(PICKUP_ADDRESS).await {
            Ok(coords) => coords,
            Err(err) => {
                warn!(error = %err, "pickup geocoding failed, using known coordinates");
                PICKUP_FALLBACK
            }
        };

        let destination = self
            .geocoder
            .lookup(delivery_address)
            .await
            .map_err(|err| match err {
                GeocodeError::NotFound => {
                    DeliveryError::AddressNotFound(delivery_address.to_string())
                }
                other => DeliveryError::Upstream(other),
            })?;

        Ok(quote(haversine_miles(pickup, destination), cart_total))
    }
}

/// Build the quote for an exact distance.
///
/// The distance is rounded before tier mapping so the figure shown to the
/// customer and the minimum charged cannot disagree at a tier boundary.
fn quote(distance: f64, cart_total: f64) -> DeliveryQuote {
    let distance_miles = round2(distance);
    let minimum_order = minimum_for(distance_miles);
    let remaining_needed = round2((minimum_order - cart_total).max(0.0));

    DeliveryQuote {
        distance_miles,
        minimum_order,
        cart_total,
        // remaining_needed is clamped at zero above, so this is the
        // "nothing left to add" check without a float equality.
        meets_minimum: remaining_needed <= 0.0,
        remaining_needed,
    }
}

/// Map a distance in miles onto the minimum order step function.
fn minimum_for(distance_miles: f64) -> f64 {
    for &(bound, minimum) in TIERS {
        if distance_miles <= bound {
            return minimum;
        }
    }

    TOP_TIER_MINIMUM
}

/// Great-circle distance between two points, in miles.
fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn tier_bounds_are_inclusive() {
        assert_eq!(minimum_for(0.0), 60.0);
        assert_eq!(minimum_for(10.0), 60.0);
        assert_eq!(minimum_for(10.01), 75.0);
        assert_eq!(minimum_for(20.0), 75.0);
        assert_eq!(minimum_for(20.01), 90.0);
        assert_eq!(minimum_for(35.0), 90.0);
        assert_eq!(minimum_for(35.01), 111.0);
        assert_eq!(minimum_for(50.0), 111.0);
    }

    #[test]
    fn no_upper_distance_cutoff() {
        assert_eq!(minimum_for(51.0), 111.0);
        assert_eq!(minimum_for(500.0), 111.0);
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        let d = haversine_miles(PICKUP_FALLBACK, PICKUP_FALLBACK);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn haversine_is_symmetric() {
        let a = Coordinates {
            lat: 42.7325,
            lon: -84.5555,
        };
        let forward = haversine_miles(PICKUP_FALLBACK, a);
        let back = haversine_miles(a, PICKUP_FALLBACK);
        assert!((forward - back).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_sixty_nine_miles() {
        let south = Coordinates {
            lat: 42.0,
            lon: -84.0,
        };
        let north = Coordinates {
            lat: 43.0,
            lon: -84.0,
        };
        let d = haversine_miles(south, north);
        assert!((d - 69.1).abs() < 0.1, "got {d}");
    }

    #[test]
    fn distance_is_rounded_before_tier_mapping() {
        // 10.004 rounds down to 10.00 and stays in the first tier; mapping
        // the raw distance would charge the second tier while showing 10.00.
        let q = quote(10.004, 0.0);
        assert_eq!(q.distance_miles, 10.0);
        assert_eq!(q.minimum_order, 60.0);

        let q = quote(10.006, 0.0);
        assert_eq!(q.distance_miles, 10.01);
        assert_eq!(q.minimum_order, 75.0);
    }

    #[test]
    fn remaining_needed_counts_up_to_the_minimum() {
        let q = quote(15.0, 50.0);
        assert_eq!(q.minimum_order, 75.0);
        assert_eq!(q.remaining_needed, 25.0);
        assert!(!q.meets_minimum);
    }

    #[test]
    fn remaining_needed_clamps_at_zero_when_over_minimum() {
        let q = quote(15.0, 100.0);
        assert_eq!(q.remaining_needed, 0.0);
        assert!(q.meets_minimum);
    }

    #[test]
    fn exact_minimum_qualifies() {
        let q = quote(15.0, 75.0);
        assert_eq!(q.remaining_needed, 0.0);
        assert!(q.meets_minimum);
    }

    #[test]
    fn sub_cent_shortfall_rounds_away() {
        // A shortfall under half a cent disappears in the rounding, so the
        // cart qualifies; a full cent short does not.
        let q = quote(15.0, 74.999);
        assert_eq!(q.remaining_needed, 0.0);
        assert!(q.meets_minimum);

        let q = quote(15.0, 74.99);
        assert_eq!(q.remaining_needed, 0.01);
        assert!(!q.meets_minimum);
    }

    #[test]
    fn cart_total_is_echoed_unmodified() {
        let q = quote(5.0, 123.456);
        assert_eq!(q.cart_total, 123.456);
    }
}
