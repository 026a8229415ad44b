//! Admin account domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use budbar_core::{AdminUserId, Email};

/// An admin account for the dashboard.
///
/// Carries an Argon2id password hash. No API response ever includes this
/// type directly; login exchanges it for a bearer token instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique account ID.
    pub id: AdminUserId,
    /// Login email, unique per account.
    pub email: Email,
    /// Argon2id PHC-format hash of the password.
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    /// Build a new admin account with a freshly generated id.
    #[must_use]
    pub fn new(email: Email, password_hash: String) -> Self {
        Self {
            id: AdminUserId::generate(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
