pub mod car;
pub mod company;
pub mod customer;

pub use car::Car;
pub use company::Company;
pub use customer::Customer;
