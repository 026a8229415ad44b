//! BudBar menu API library.
//!
//! Exposes the server's modules as a library so handlers, services, and
//! repositories can be exercised from the integration test crate without
//! going through the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
