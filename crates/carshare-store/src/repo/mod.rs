//! SQLite implementations of the core repository traits
//!
//! Each repository borrows the application's single connection and owns the
//! statements for one table.

mod car_repo;
mod company_repo;
mod customer_repo;

pub use car_repo::SqliteCarRepo;
pub use company_repo::SqliteCompanyRepo;
pub use customer_repo::SqliteCustomerRepo;
