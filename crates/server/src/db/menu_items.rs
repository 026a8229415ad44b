//! Catalog repository for `MongoDB` operations.
//!
//! Listing filters are built through [`ItemQuery`], which translates the
//! public query parameters into a BSON filter in one place, so the mapping
//! from API surface to storage query stays auditable.

use futures::TryStreamExt;
use mongodb::bson::{Document, doc, to_document};
use mongodb::{Collection, Database};
use serde::Deserialize;

use super::{LIST_LIMIT, RepositoryError};
use crate::models::menu_item::{MenuItem, MenuItemPayload};

/// Collection holding catalog items.
const COLLECTION: &str = "menu_items";

/// Filters accepted by the public listing endpoint.
///
/// Empty strings are treated as absent, matching how browsers submit blank
/// query fields. `search` does a case-insensitive substring match across
/// title, description, and detail text; the term is escaped so regex
/// metacharacters in user input match literally.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    pub category: Option<String>,
    pub item_type: Option<String>,
    pub search: Option<String>,
}

impl ItemQuery {
    /// Translate the query into a BSON filter document.
    #[must_use]
    pub fn to_filter(&self) -> Document {
        let mut filter = Document::new();

        if let Some(category) = non_empty(&self.category) {
            filter.insert("categories", category);
        }

        if let Some(item_type) = non_empty(&self.item_type) {
            filter.insert("item_type", item_type);
        }

        if let Some(term) = non_empty(&self.search) {
            let pattern = doc! { "$regex": regex::escape(term), "$options": "i" };
            let branches = vec![
                doc! { "title": pattern.clone() },
                doc! { "description": pattern.clone() },
                doc! { "meta_details": pattern },
            ];
            filter.insert("$or", branches);
        }

        filter
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Repository for catalog item operations.
pub struct MenuItemRepository {
    collection: Collection<MenuItem>,
}

impl MenuItemRepository {
    /// Create a new catalog repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }

    /// List items matching the query, ordered by manual position with
    /// creation time as the tiebreaker.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, query: &ItemQuery) -> Result<Vec<MenuItem>, RepositoryError> {
        let items = self
            .collection
            .find(query.to_filter())
            .sort(doc! { "display_order": 1, "created_at": 1 })
            .limit(LIST_LIMIT)
            .await?
            .try_collect()
            .await?;

        Ok(items)
    }

    /// Distinct category labels currently in use, sorted for stable output.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn distinct_categories(&self) -> Result<Vec<String>, RepositoryError> {
        let labels = self.collection.distinct("categories", doc! {}).await?;

        let mut categories: Vec<String> = labels
            .iter()
            .filter_map(|label| label.as_str().map(ToOwned::to_owned))
            .collect();
        categories.sort();

        Ok(categories)
    }

    /// Persist a new catalog item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, item: &MenuItem) -> Result<(), RepositoryError> {
        self.collection.insert_one(item).await?;
        Ok(())
    }

    /// Overwrite an item's client-editable fields.
    ///
    /// Returns `false` if no item has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    /// Returns `RepositoryError::Serialization` if the payload cannot be
    /// converted to BSON.
    pub async fn update(
        &self,
        id: &str,
        payload: &MenuItemPayload,
    ) -> Result<bool, RepositoryError> {
        let update = doc! { "$set": to_document(payload)? };
        let result = self
            .collection
            .update_one(doc! { "id": id }, update)
            .await?;

        Ok(result.matched_count > 0)
    }

    /// Delete an item. Returns `false` if no item has that id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Set the manual sort position for one item.
    ///
    /// Unknown ids are ignored rather than reported: bulk reorder keeps
    /// going when the client's view of the catalog is slightly stale.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_display_order(
        &self,
        id: &str,
        display_order: i64,
    ) -> Result<(), RepositoryError> {
        self.collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "display_order": display_order } },
            )
            .await?;

        Ok(())
    }

    /// Remove a category label from every item carrying it.
    ///
    /// Items themselves are kept; only the label is pulled. Returns the
    /// number of items modified.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn remove_category_label(&self, name: &str) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .update_many(
                doc! { "categories": name },
                doc! { "$pull": { "categories": name } },
            )
            .await?;

        Ok(result.modified_count)
    }
}
