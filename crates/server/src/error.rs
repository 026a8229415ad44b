//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::ValidationError;
use crate::services::auth::AuthError;
use crate::services::delivery::DeliveryError;

/// Application-level error type for the menu API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Delivery validation failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Resource not found. Carries the resource noun ("Item", "Inquiry").
    #[error("{0} not found")]
    NotFound(String),

    /// Request lacks valid admin credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture anything that will surface as a 5xx
        if matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Delivery(DeliveryError::Upstream(_))
                | Self::Auth(AuthError::TokenSigning(_) | AuthError::PasswordHash)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::TokenExpired
                | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
                AuthError::TokenSigning(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Delivery(err) => match err {
                DeliveryError::AddressNotFound(_) => StatusCode::BAD_REQUEST,
                DeliveryError::Upstream(_) => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::TokenExpired
                | AuthError::TokenInvalid => err.to_string(),
                AuthError::TokenSigning(_) | AuthError::PasswordHash => {
                    "Internal server error".to_string()
                }
            },
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}
