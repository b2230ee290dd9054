//! Car Sharing Store - SQLite persistence
//!
//! Provides:
//! - Connection bootstrap (open, configure, migrate)
//! - Embedded schema migrations with checksums
//! - SQLite implementations of the core repository traits

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteCarRepo, SqliteCompanyRepo, SqliteCustomerRepo};
