//! Admin login route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use budbar_core::Email;

use crate::db::admin_users::AdminUserRepository;
use crate::error::AppError;
use crate::services::auth::{AuthError, verify_password};
use crate::state::AppState;

/// Login credentials.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Exchange admin credentials for a bearer token.
///
/// POST /api/admin/login
///
/// Every failure path (unparseable email, unknown account, wrong password)
/// collapses to the same 401 so the response does not reveal which
/// accounts exist.
///
/// # Errors
///
/// Returns `AppError::Auth` with `InvalidCredentials` on any credential
/// failure.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = Email::parse(&request.email).map_err(|_| AuthError::InvalidCredentials)?;

    let admin = AdminUserRepository::new(state.db())
        .find_by_email(&email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    verify_password(&request.password, &admin.password_hash)?;

    let access_token = state.auth().issue_token(&admin)?;

    tracing::info!(admin_id = %admin.id, "Admin logged in");
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
