//! Catalog route handlers.
//!
//! Public browsing plus the admin CRUD surface. Admin handlers take the
//! bearer-token extractor; the claims feed the request span so catalog
//! edits are attributable.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::MessageResponse;
use crate::db::menu_items::{ItemQuery, MenuItemRepository};
use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::menu_item::{MenuItem, MenuItemPayload};
use crate::state::AppState;

/// Response for the category listing endpoint.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response for category deletion, reporting how many items lost the label.
#[derive(Debug, Serialize)]
pub struct CategoryDeletedResponse {
    pub message: String,
    pub products_updated: u64,
}

/// One entry in a bulk reorder request.
#[derive(Debug, Deserialize)]
pub struct ReorderEntry {
    pub id: String,
    pub display_order: i64,
}

/// List catalog items, filtered and sorted for display.
///
/// GET /api/menu/items?category=&item_type=&search=
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<Vec<MenuItem>>, AppError> {
    let items = MenuItemRepository::new(state.db()).list(&query).await?;
    Ok(Json(items))
}

/// List every category label currently in use.
///
/// GET /api/menu/categories
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = MenuItemRepository::new(state.db())
        .distinct_categories()
        .await?;
    Ok(Json(CategoriesResponse { categories }))
}

/// Create a catalog item.
///
/// POST /api/admin/menu/items
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the payload fails validation.
/// Returns `AppError::Database` if the insert fails.
#[instrument(skip_all, fields(admin = %claims.email, title = %payload.title))]
pub async fn create_item(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Json(payload): Json<MenuItemPayload>,
) -> Result<Json<MenuItem>, AppError> {
    payload.validate()?;

    let item = MenuItem::new(payload);
    MenuItemRepository::new(state.db()).insert(&item).await?;

    tracing::info!(item_id = %item.id, "Catalog item created");
    Ok(Json(item))
}

/// Replace a catalog item's editable fields.
///
/// PUT /api/admin/menu/items/{id}
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the payload fails validation.
/// Returns `AppError::NotFound` if no item has that id.
#[instrument(skip_all, fields(admin = %claims.email, item_id = %id))]
pub async fn update_item(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    let updated = MenuItemRepository::new(state.db())
        .update(&id, &payload)
        .await?;
    if !updated {
        return Err(AppError::NotFound("Item".to_string()));
    }

    Ok(Json(MessageResponse::new("Item updated successfully")))
}

/// Delete a catalog item.
///
/// DELETE /api/admin/menu/items/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if no item has that id.
#[instrument(skip_all, fields(admin = %claims.email, item_id = %id))]
pub async fn delete_item(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = MenuItemRepository::new(state.db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Item".to_string()));
    }

    Ok(Json(MessageResponse::new("Item deleted successfully")))
}

/// Apply manual sort positions in bulk.
///
/// PUT /api/admin/menu/reorder
///
/// Entries with unknown ids are skipped, not reported: the dashboard sends
/// its whole current view, which may be stale against concurrent deletes.
///
/// # Errors
///
/// Returns `AppError::Database` if an update fails.
pub async fn reorder_items(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
    Json(updates): Json<Vec<ReorderEntry>>,
) -> Result<Json<MessageResponse>, AppError> {
    let repository = MenuItemRepository::new(state.db());
    for entry in &updates {
        repository
            .set_display_order(&entry.id, entry.display_order)
            .await?;
    }

    Ok(Json(MessageResponse::new("Menu order updated successfully")))
}

/// Remove a category label from every item carrying it.
///
/// DELETE /api/admin/categories/{name}
///
/// Succeeds even when no item has the label (`products_updated: 0`).
///
/// # Errors
///
/// Returns `AppError::Database` if the update fails.
#[instrument(skip_all, fields(admin = %claims.email, category = %name))]
pub async fn delete_category(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CategoryDeletedResponse>, AppError> {
    let products_updated = MenuItemRepository::new(state.db())
        .remove_category_label(&name)
        .await?;

    Ok(Json(CategoryDeletedResponse {
        message: "Category deleted successfully".to_string(),
        products_updated,
    }))
}
