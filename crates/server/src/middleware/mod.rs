//! Middleware and extractors for the admin API.

pub mod auth;
