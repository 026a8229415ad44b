//! Authentication extractor for admin routes.
//!
//! Admin handlers take [`RequireAdminAuth`] as an argument; the request is
//! rejected with 401 before the handler body runs if the bearer token is
//! missing or does not verify.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};

use crate::services::auth::{AuthError, TokenClaims};
use crate::state::AppState;

/// Extractor that requires a valid admin bearer token.
///
/// Carries the verified token claims so handlers can attribute the action
/// to an admin account.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(claims): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", claims.email)
/// }
/// ```
pub struct RequireAdminAuth(pub TokenClaims);

/// Rejection returned when admin authentication fails.
///
/// Responses mirror the login flow's wording so clients see one vocabulary
/// for auth failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAuthRejection {
    /// No `Authorization` header on the request.
    MissingHeader,
    /// Header present but not a `Bearer` scheme.
    NotBearer,
    /// Token past its expiry.
    Expired,
    /// Bad signature or malformed token.
    Invalid,
}

impl AdminAuthRejection {
    const fn message(self) -> &'static str {
        match self {
            Self::MissingHeader => "Missing authorization header",
            Self::NotBearer | Self::Invalid => "Invalid token",
            Self::Expired => "Token expired",
        }
    }
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.message()).into_response()
    }
}

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AdminAuthRejection::MissingHeader)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AdminAuthRejection::NotBearer)?;

        let claims = state.auth().verify_token(token).map_err(|err| match err {
            AuthError::TokenExpired => AdminAuthRejection::Expired,
            _ => AdminAuthRejection::Invalid,
        })?;

        Ok(Self(claims))
    }
}
