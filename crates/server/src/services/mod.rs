//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Admin bearer tokens and password hashing
//! - `delivery` - Distance-based delivery validation against the pickup location

pub mod auth;
pub mod delivery;
