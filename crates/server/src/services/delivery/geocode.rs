//! Forward-geocoding client for a Nominatim-compatible service.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Request timeout for geocoding lookups.
const TIMEOUT: Duration = Duration::from_secs(10);

/// A resolved point on the globe.
#[derive(Debug, Clone, Copy)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Errors from a geocoding lookup.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service returned zero results for the query.
    #[error("no results for address")]
    NotFound,

    /// Transport or HTTP-level failure.
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with something we could not interpret.
    #[error("malformed geocoding response: {0}")]
    Malformed(String),
}

/// One result row from the search endpoint.
///
/// Nominatim returns coordinates as decimal strings, not numbers.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Client for forward geocoding.
///
/// Cheap to clone; the underlying HTTP client and base URL are shared.
#[derive(Clone)]
pub struct GeocodeClient {
    inner: Arc<GeocodeClientInner>,
}

struct GeocodeClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl GeocodeClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .user_agent(concat!("budbar-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(GeocodeClientInner { client, base_url }),
        })
    }

    /// Resolve a freeform address to coordinates, taking the first match.
    ///
    /// # Errors
    ///
    /// Returns `GeocodeError::NotFound` if the service has no results.
    /// Returns `GeocodeError::Http` on transport or HTTP-status failures.
    /// Returns `GeocodeError::Malformed` if the response cannot be parsed.
    pub async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let url = self
            .inner
            .base_url
            .join("search")
            .map_err(|e| GeocodeError::Malformed(e.to_string()))?;

        let places: Vec<Place> = self
            .inner
            .client
            .get(url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let place = places.first().ok_or(GeocodeError::NotFound)?;

        let lat = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("non-numeric latitude: {}", place.lat)))?;
        let lon = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("non-numeric longitude: {}", place.lon)))?;

        Ok(Coordinates { lat, lon })
    }
}
