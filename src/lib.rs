//! The `taskboard` library crate.
//!
//! This crate contains the core business logic for the taskboard backend:
//! domain models, the authentication stack (password hashing, token issuance
//! and verification, the per-request access control guard), the domain store
//! over PostgreSQL, routing configuration, and error handling. It is used by
//! the main binary (`main.rs`) to construct and run the application.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use crate::config::Config;
pub use crate::error::AppError;
