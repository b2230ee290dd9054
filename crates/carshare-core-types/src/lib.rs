//! Core types shared across the car sharing crates
//!
//! This crate provides foundational types used by the domain, storage and
//! console layers:
//!
//! - **Identifiers**: CompanyId, CarId, CustomerId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{CarId, CompanyId, CustomerId};
