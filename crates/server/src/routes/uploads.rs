//! Image upload route handler.
//!
//! Uploaded images are not written to disk or object storage; each file is
//! returned to the caller as a base64 data URI, and the admin dashboard
//! stores those URIs on the menu item itself.

use axum::{Json, extract::Multipart};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::middleware::auth::RequireAdminAuth;

/// Content type assumed when the client does not declare one.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Data URIs for the uploaded files, in submission order.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub images: Vec<String>,
}

/// Convert uploaded images to data URIs.
///
/// POST /api/admin/upload-images
///
/// Every part of the multipart body is treated as a file; part names are
/// not significant. An empty body yields an empty list.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the multipart body is malformed or a
/// part's bytes cannot be read.
#[instrument(skip_all, fields(admin = %claims.email))]
pub async fn upload_images(
    RequireAdminAuth(claims): RequireAdminAuth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut images = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        images.push(encode_data_uri(&content_type, &bytes));
    }

    tracing::info!(count = images.len(), "Images encoded");
    Ok(Json(UploadResponse { images }))
}

/// Encode raw bytes as a `data:` URI with the given content type.
fn encode_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_carries_content_type_and_payload() {
        let uri = encode_data_uri("image/png", b"fake png bytes");
        assert!(uri.starts_with("data:image/png;base64,"));

        let encoded = uri.strip_prefix("data:image/png;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"fake png bytes");
    }

    #[test]
    fn empty_file_still_produces_a_valid_uri() {
        assert_eq!(
            encode_data_uri(FALLBACK_CONTENT_TYPE, b""),
            "data:application/octet-stream;base64,"
        );
    }
}
