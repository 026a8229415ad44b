//! Startup provisioning of the admin account.

use mongodb::Database;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::info;

use crate::config::AdminSeedConfig;
use crate::db::RepositoryError;
use crate::db::admin_users::AdminUserRepository;
use crate::models::admin_user::AdminUser;
use crate::services::auth::{AuthError, hash_password};

/// Errors from admin provisioning.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Ensure the configured admin account exists with the configured password.
///
/// Runs on every startup. If the account already exists its password hash
/// is overwritten, so rotating `ADMIN_PASSWORD` and restarting is the whole
/// password-reset story. Lockout is impossible as long as the process can
/// start.
///
/// # Errors
///
/// Returns `BootstrapError` if hashing or the database write fails.
pub async fn ensure_default_admin(
    db: &Database,
    seed: &AdminSeedConfig,
) -> Result<(), BootstrapError> {
    let repo = AdminUserRepository::new(db);
    let password_hash = hash_password(seed.password.expose_secret())?;

    if repo.find_by_email(&seed.email).await?.is_some() {
        repo.set_password_hash(&seed.email, &password_hash).await?;
        info!(email = %seed.email, "Admin password reset from configuration");
    } else {
        let admin = AdminUser::new(seed.email.clone(), password_hash);
        repo.insert(&admin).await?;
        info!(email = %seed.email, "Default admin account created");
    }

    Ok(())
}
