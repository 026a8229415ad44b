//! Inquiry repository for `MongoDB` operations.

use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson};
use mongodb::{Collection, Database};

use budbar_core::InquiryStatus;

use super::{LIST_LIMIT, RepositoryError};
use crate::models::inquiry::Inquiry;

/// Collection holding customer inquiries.
const COLLECTION: &str = "inquiries";

/// Repository for inquiry operations.
pub struct InquiryRepository {
    collection: Collection<Inquiry>,
}

impl InquiryRepository {
    /// Create a new inquiry repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// Persist a new inquiry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, inquiry: &Inquiry) -> Result<(), RepositoryError> {
        self.collection.insert_one(inquiry).await?;
        Ok(())
    }

    /// List inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_newest_first(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let inquiries = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(LIST_LIMIT)
            .await?
            .try_collect()
            .await?;

        Ok(inquiries)
    }

    /// Set an inquiry's workflow status.
    ///
    /// Returns `false` if no inquiry has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    /// Returns `RepositoryError::Serialization` if the status cannot be
    /// converted to BSON.
    pub async fn set_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<bool, RepositoryError> {
        let update = doc! { "$set": { "status": to_bson(&status)? } };
        let result = self
            .collection
            .update_one(doc! { "id": id }, update)
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Delete an inquiry. Returns `false` if no inquiry has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }
}
