//! Database operations for the menu API's `MongoDB` store.
//!
//! # Database
//!
//! All state lives in a single database (name from `DB_NAME`):
//!
//! ## Collections
//!
//! - `menu_items` - Catalog items with variants and ordering metadata
//! - `inquiries` - Customer purchase inquiries
//! - `admin_users` - Dashboard accounts
//!
//! Documents carry string UUIDs in an `id` field and RFC 3339 timestamp
//! strings, so they stay readable from shell tooling without BSON-specific
//! types. Lexicographic order on the timestamps matches chronological order.

pub mod admin_users;
pub mod inquiries;
pub mod menu_items;

use mongodb::bson::doc;
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

/// Upper bound on documents returned by list queries.
pub const LIST_LIMIT: i64 = 1000;

/// Errors returned by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Driver error from `MongoDB`.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A payload could not be converted into a BSON document.
    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

/// Connect to `MongoDB` and select the application database.
///
/// The driver connects lazily, so this issues a `ping` to make
/// misconfiguration fail at startup instead of on the first request.
///
/// # Arguments
///
/// * `mongo_url` - `MongoDB` connection string (wrapped in `SecretString`)
/// * `db_name` - Database to select
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI is malformed or the server
/// is unreachable.
pub async fn connect(
    mongo_url: &secrecy::SecretString,
    db_name: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_url.expose_secret()).await?;
    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}
