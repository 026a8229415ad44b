//! Authentication service.
//!
//! Issues and verifies the bearer tokens used by the admin dashboard, and
//! provides Argon2id password hashing for stored credentials. There is no
//! token revocation: a token stays valid until it expires, even if the
//! admin password changes underneath it.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::models::admin_user::AdminUser;

/// How long an issued token stays valid.
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims embedded in an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Admin's login email.
    pub email: String,
    /// Admin's account id.
    pub id: String,
    /// Absolute expiry as a Unix timestamp.
    pub exp: i64,
}

/// Issues and verifies admin bearer tokens (HS256).
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    /// Create a service signing with the given shared secret.
    #[must_use]
    pub fn new(jwt_secret: &SecretString) -> Self {
        let secret = jwt_secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for an admin, expiring seven days from issuance.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenSigning` if encoding fails.
    pub fn issue_token(&self, admin: &AdminUser) -> Result<String, AuthError> {
        let exp = (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp();
        let claims = TokenClaims {
            email: admin.email.as_str().to_string(),
            id: admin.id.as_str().to_string(),
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::TokenSigning)
    }

    /// Decode and validate a token, returning the embedded claims.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` if the token is past its expiry.
    /// Returns `AuthError::TokenInvalid` for any other validation failure.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })
    }
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored hash.
///
/// # Errors
///
/// Returns `AuthError::InvalidCredentials` if the hash is malformed or the
/// password does not match.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
