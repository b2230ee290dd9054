use carshare_core::{Car, Company, Customer, InMemoryStore};
use carshare_core::{CarService, CompanyService, CustomerService};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> InMemoryStore {
    InMemoryStore::new()
}

/// Create a company through the service, panicking on failure
#[allow(dead_code)]
pub fn create_test_company(store: &InMemoryStore, name: &str) -> Company {
    CompanyService::new(store)
        .create_company(name)
        .expect("company should be created")
}

/// Create a car through the service, panicking on failure
#[allow(dead_code)]
pub fn create_test_car(store: &InMemoryStore, company: &Company, name: &str) -> Car {
    CarService::new(store)
        .create_car(company, name)
        .expect("car should be created")
}

/// Create a customer through the service, panicking on failure
#[allow(dead_code)]
pub fn create_test_customer(store: &InMemoryStore, name: &str) -> Customer {
    CustomerService::new(store)
        .create_customer(name)
        .expect("customer should be created")
}

/// Names of the given cars, in order
#[allow(dead_code)]
pub fn car_names(cars: &[Car]) -> Vec<&str> {
    cars.iter().map(|c| c.name.as_str()).collect()
}
