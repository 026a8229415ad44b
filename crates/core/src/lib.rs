//! BudBar Core - Shared types library.
//!
//! This crate provides common types used across all BudBar components:
//! - `server` - The public storefront and admin REST API
//! - `integration-tests` - Live-API test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
