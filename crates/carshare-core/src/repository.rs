//! Repository contracts
//!
//! One trait per table. Services depend on these traits only, so the SQLite
//! implementations in `carshare-store` and the [`InMemoryStore`] used in
//! tests are interchangeable.
//!
//! Every method reports storage failures as [`ExError`]; "not found" is an
//! `Ok(None)`, never an error.
//!
//! [`InMemoryStore`]: crate::memory::InMemoryStore

use carshare_core_types::{CarId, CompanyId, CustomerId};

use crate::errors::ExError;
use crate::model::{Car, Company, Customer};

/// Result type for repository operations
pub type RepoResult<T> = std::result::Result<T, ExError>;

/// Persistence operations for the `company` table
pub trait CompanyRepository {
    /// Insert a company unless one with this name exists
    ///
    /// Returns the stored company, or `None` if the name was taken.
    fn create(&self, name: &str) -> RepoResult<Option<Company>>;

    /// Check whether a company with exactly this name exists
    fn exists(&self, name: &str) -> RepoResult<bool>;

    fn get_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>>;

    /// All companies in storage order
    fn list_all(&self) -> RepoResult<Vec<Company>>;

    /// Rename a company; returns whether a row changed
    fn update(&self, old_name: &str, new_name: &str) -> RepoResult<bool>;

    /// Delete a company by name; returns whether a row was removed
    ///
    /// Fails while cars still reference the company.
    fn delete(&self, name: &str) -> RepoResult<bool>;
}

/// Persistence operations for the `car` table
pub trait CarRepository {
    /// Insert a car for `company_id` unless a car with this name exists in any company
    fn create(&self, company_id: CompanyId, name: &str) -> RepoResult<Option<Car>>;

    fn exists(&self, name: &str) -> RepoResult<bool>;

    /// Cars of `company_id` that no customer is currently renting
    fn list_available(&self, company_id: CompanyId) -> RepoResult<Vec<Car>>;

    fn get_by_id(&self, id: CarId) -> RepoResult<Option<Car>>;
}

/// Persistence operations for the `customer` table
pub trait CustomerRepository {
    /// Insert a customer unless one with this name exists
    fn create(&self, name: &str) -> RepoResult<Option<Customer>>;

    fn exists(&self, name: &str) -> RepoResult<bool>;

    fn get_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>>;

    /// All customers in storage order
    fn list_all(&self) -> RepoResult<Vec<Customer>>;

    /// Persist name and rental state of an existing customer
    ///
    /// Fails with `NotFound` if no row has `customer.id`.
    fn update(&self, customer: &Customer) -> RepoResult<()>;
}
