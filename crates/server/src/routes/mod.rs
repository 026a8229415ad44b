//! HTTP route handlers for the menu API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/                       - API banner
//!
//! # Catalog (public)
//! GET  /api/menu/items             - List items (category/item_type/search filters)
//! GET  /api/menu/categories        - Distinct category labels
//!
//! # Inquiries (public submit)
//! POST /api/inquiries              - Submit a purchase inquiry
//!
//! # Delivery (public)
//! POST /api/validate-delivery      - Distance-based minimum-order check
//!
//! # Admin (bearer token except login)
//! POST   /api/admin/login                  - Exchange credentials for a token
//! POST   /api/admin/menu/items             - Create catalog item
//! PUT    /api/admin/menu/items/{id}        - Replace catalog item fields
//! DELETE /api/admin/menu/items/{id}        - Delete catalog item
//! PUT    /api/admin/menu/reorder           - Bulk display-order update
//! DELETE /api/admin/categories/{name}      - Pull a label from every item
//! POST   /api/admin/upload-images          - Multipart upload, returns data URIs
//! GET    /api/admin/inquiries              - List inquiries, newest first
//! PUT    /api/admin/inquiries/{id}/status  - Set inquiry status (?status=)
//! DELETE /api/admin/inquiries/{id}         - Delete inquiry
//! ```
//!
//! Liveness (`/health`) and readiness (`/health/ready`) live outside the
//! `/api` prefix and are wired in `main`.

pub mod auth;
pub mod delivery;
pub mod inquiries;
pub mod menu;
pub mod uploads;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use serde::Serialize;

use crate::state::AppState;

/// Generic `{"message": ...}` body used by mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API banner, kept as a quick smoke-test target.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("BudBar Digital Menu API"))
}

/// Create the admin routes router.
///
/// Login is the one route here that takes no token; it issues the tokens
/// every other handler's [`crate::middleware::auth::RequireAdminAuth`]
/// extractor checks.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/menu/items", post(menu::create_item))
        .route(
            "/menu/items/{id}",
            put(menu::update_item).delete(menu::delete_item),
        )
        .route("/menu/reorder", put(menu::reorder_items))
        .route("/categories/{name}", delete(menu::delete_category))
        .route(
            "/upload-images",
            // Menu photos routinely exceed axum's default 2 MB body cap.
            post(uploads::upload_images).layer(DefaultBodyLimit::disable()),
        )
        .route("/inquiries", get(inquiries::list_inquiries))
        .route("/inquiries/{id}/status", put(inquiries::update_status))
        .route("/inquiries/{id}", delete(inquiries::delete_inquiry))
}

/// Create all routes for the menu API, nested under `/api`.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/", get(root))
        .route("/menu/items", get(menu::list_items))
        .route("/menu/categories", get(menu::list_categories))
        .route("/inquiries", post(inquiries::create_inquiry))
        .route("/validate-delivery", post(delivery::validate_delivery))
        .nest("/admin", admin_routes());

    Router::new().nest("/api", api)
}
