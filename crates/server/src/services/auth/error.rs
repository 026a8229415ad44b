//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// The `Display` strings of the credential and token variants are returned
/// to clients verbatim, so they stay deliberately vague.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token past its expiry.
    #[error("Token expired")]
    TokenExpired,

    /// Bad signature, malformed structure, or any other validation failure.
    #[error("Invalid token")]
    TokenInvalid,

    /// Token could not be signed.
    #[error("token signing failed: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
