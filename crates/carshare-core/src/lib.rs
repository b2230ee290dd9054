//! Car Sharing Core - domain model, services and repository contracts
//!
//! This crate provides:
//! - Company, Car and Customer models
//! - Repository traits implemented by the storage layer
//! - An in-memory store for tests and experiments
//! - Services enforcing uniqueness and rental rules
//! - The error and structured logging facilities shared by all crates

pub mod errors;
pub mod logging_facility;
pub mod memory;
pub mod model;
pub mod repository;
pub mod services;

#[doc(hidden)]
pub use carshare_core_types as core_types;

// Re-export commonly used types
pub use carshare_core_types::{CarId, CompanyId, CustomerId};
pub use errors::{CarShareError, ExError, ExErrorKind, Result};
pub use memory::InMemoryStore;
pub use model::{Car, Company, Customer};
pub use repository::{CarRepository, CompanyRepository, CustomerRepository, RepoResult};
pub use services::{CarService, CompanyService, CustomerService};
