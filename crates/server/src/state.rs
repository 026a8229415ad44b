//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::AppConfig;
use crate::services::auth::AuthService;
use crate::services::delivery::{DeliveryPolicy, GeocodeClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database handle and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    db: Database,
    auth: AuthService,
    delivery: DeliveryPolicy,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `db` - `MongoDB` database handle
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the geocoding HTTP client cannot be
    /// built.
    pub fn new(config: AppConfig, db: Database) -> Result<Self, reqwest::Error> {
        let auth = AuthService::new(&config.jwt_secret);
        let geocoder = GeocodeClient::new(config.geocoder_base_url.clone())?;
        let delivery = DeliveryPolicy::new(geocoder);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                auth,
                delivery,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database handle.
    #[must_use]
    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    /// Get a reference to the token service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }

    /// Get a reference to the delivery policy.
    #[must_use]
    pub fn delivery(&self) -> &DeliveryPolicy {
        &self.inner.delivery
    }
}
