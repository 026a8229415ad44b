//! Inquiry route handlers.
//!
//! Submission is public and unauthenticated; everything after that
//! (listing, status changes, deletion) is admin-only.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use budbar_core::InquiryStatus;

use super::MessageResponse;
use crate::db::inquiries::InquiryRepository;
use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::inquiry::{Inquiry, InquiryPayload};
use crate::state::AppState;

/// Query string for the status-update endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

/// Submit a purchase inquiry.
///
/// POST /api/inquiries
///
/// Line items are stored exactly as submitted; referenced catalog items are
/// not checked for existence, since the snapshot is what staff follow up on.
///
/// # Errors
///
/// Returns `AppError::Database` if the insert fails.
#[instrument(skip_all, fields(first_name = %payload.first_name))]
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(payload): Json<InquiryPayload>,
) -> Result<Json<Inquiry>, AppError> {
    let inquiry = Inquiry::new(payload);
    InquiryRepository::new(state.db()).insert(&inquiry).await?;

    tracing::info!(inquiry_id = %inquiry.id, "Inquiry submitted");
    Ok(Json(inquiry))
}

/// List all inquiries, newest first.
///
/// GET /api/admin/inquiries
///
/// # Errors
///
/// Returns `AppError::Database` if the query fails.
pub async fn list_inquiries(
    _admin: RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<Inquiry>>, AppError> {
    let inquiries = InquiryRepository::new(state.db())
        .list_newest_first()
        .await?;
    Ok(Json(inquiries))
}

/// Set an inquiry's workflow status.
///
/// PUT /api/admin/inquiries/{id}/status?status=
///
/// The status value is parsed before the store is touched, so an invalid
/// value can never clobber the stored one.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the status is missing or not one of
/// `pending`/`complete`. Returns `AppError::NotFound` if no inquiry has
/// that id.
#[instrument(skip_all, fields(admin = %claims.email, inquiry_id = %id))]
pub async fn update_status(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let raw = query
        .status
        .ok_or_else(|| AppError::BadRequest("status query parameter is required".to_string()))?;
    let status: InquiryStatus = raw.parse().map_err(AppError::BadRequest)?;

    let updated = InquiryRepository::new(state.db())
        .set_status(&id, status)
        .await?;
    if !updated {
        return Err(AppError::NotFound("Inquiry".to_string()));
    }

    Ok(Json(MessageResponse::new("Status updated successfully")))
}

/// Delete an inquiry.
///
/// DELETE /api/admin/inquiries/{id}
///
/// # Errors
///
/// Returns `AppError::NotFound` if no inquiry has that id.
#[instrument(skip_all, fields(admin = %claims.email, inquiry_id = %id))]
pub async fn delete_inquiry(
    RequireAdminAuth(claims): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = InquiryRepository::new(state.db()).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Inquiry".to_string()));
    }

    Ok(Json(MessageResponse::new("Inquiry deleted successfully")))
}
