//! Integration tests for the BudBar menu API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB
//! docker run -d -p 27017:27017 mongo:7
//!
//! # Start the server
//! cargo run -p budbar-server
//!
//! # Run the live-server tests
//! cargo test -p budbar-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_catalog` - Menu CRUD and category management over live HTTP
//! - `api_inquiries` - Inquiry submission and the admin workflow
//! - `api_delivery` - Delivery validation against the live geocoder
//! - `token_lifetime` - Bearer token expiry semantics (no server required)
//!
//! Live tests are `#[ignore]`d so `cargo test` stays green without a
//! running stack. They create their own records (titles carry a UUID) and
//! clean up after themselves, but they do assume the database is
//! disposable.
