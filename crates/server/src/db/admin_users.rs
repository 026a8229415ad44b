//! Admin account repository for `MongoDB` operations.

use mongodb::bson::doc;
use mongodb::{Collection, Database};

use budbar_core::Email;

use super::RepositoryError;
use crate::models::admin_user::AdminUser;

/// Collection holding admin accounts.
const COLLECTION: &str = "admin_users";

/// Repository for admin account operations.
pub struct AdminUserRepository {
    collection: Collection<AdminUser>,
}

impl AdminUserRepository {
    /// Create a new admin account repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Look up an account by login email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let admin = self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?;

        Ok(admin)
    }

    /// Persist a new admin account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, admin: &AdminUser) -> Result<(), RepositoryError> {
        self.collection.insert_one(admin).await?;
        Ok(())
    }

    /// Replace the stored password hash for an account.
    ///
    /// Returns `false` if no account has that email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<bool, RepositoryError> {
        let result = self
            .collection
            .update_one(
                doc! { "email": email.as_str() },
                doc! { "$set": { "password_hash": password_hash } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }
}
