//! In-memory implementation of the repository traits
//!
//! Mirrors the SQLite store closely enough for service tests: ids are
//! assigned from 1 upwards per table, names are unique per table, and
//! foreign keys are checked on write.

use std::cell::RefCell;
use std::collections::BTreeMap;

use carshare_core_types::{CarId, CompanyId, CustomerId};

use crate::errors::{ExError, ExErrorKind};
use crate::model::{Car, Company, Customer};
use crate::repository::{CarRepository, CompanyRepository, CustomerRepository, RepoResult};

#[derive(Debug, Default)]
struct Tables {
    companies: BTreeMap<CompanyId, Company>,
    cars: BTreeMap<CarId, Car>,
    customers: BTreeMap<CustomerId, Customer>,
    next_company: i64,
    next_car: i64,
    next_customer: i64,
}

/// In-memory store for companies, cars and customers
///
/// Not thread-safe (RefCell) - designed for single-threaded use like the
/// console application itself.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RefCell<Tables>,
}

fn foreign_key_failed(op: &str, entity_id: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op(op.to_string())
        .with_entity_id(entity_id)
        .with_message("FOREIGN KEY constraint failed")
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompanyRepository for InMemoryStore {
    fn create(&self, name: &str) -> RepoResult<Option<Company>> {
        if CompanyRepository::exists(self, name)? {
            return Ok(None);
        }

        let mut tables = self.tables.borrow_mut();
        tables.next_company += 1;
        let company = Company::new(CompanyId::new(tables.next_company), name);
        tables.companies.insert(company.id, company.clone());
        Ok(Some(company))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self
            .tables
            .borrow()
            .companies
            .values()
            .any(|c| c.name == name))
    }

    fn get_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>> {
        Ok(self.tables.borrow().companies.get(&id).cloned())
    }

    fn list_all(&self) -> RepoResult<Vec<Company>> {
        Ok(self.tables.borrow().companies.values().cloned().collect())
    }

    fn update(&self, old_name: &str, new_name: &str) -> RepoResult<bool> {
        let mut tables = self.tables.borrow_mut();
        if old_name != new_name && tables.companies.values().any(|c| c.name == new_name) {
            return Err(ExError::new(ExErrorKind::Persistence)
                .with_op("company_update")
                .with_entity_id(new_name)
                .with_message("UNIQUE constraint failed: company.name"));
        }

        match tables.companies.values_mut().find(|c| c.name == old_name) {
            Some(company) => {
                company.name = new_name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let mut tables = self.tables.borrow_mut();
        let Some(id) = tables
            .companies
            .values()
            .find(|c| c.name == name)
            .map(|c| c.id)
        else {
            return Ok(false);
        };

        if tables.cars.values().any(|car| car.belongs_to(id)) {
            return Err(foreign_key_failed("company_delete", name));
        }

        tables.companies.remove(&id);
        Ok(true)
    }
}

impl CarRepository for InMemoryStore {
    fn create(&self, company_id: CompanyId, name: &str) -> RepoResult<Option<Car>> {
        if CarRepository::exists(self, name)? {
            return Ok(None);
        }

        let mut tables = self.tables.borrow_mut();
        if !tables.companies.contains_key(&company_id) {
            return Err(foreign_key_failed("car_create", company_id.to_string()));
        }

        tables.next_car += 1;
        let car = Car::new(CarId::new(tables.next_car), name, company_id);
        tables.cars.insert(car.id, car.clone());
        Ok(Some(car))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self.tables.borrow().cars.values().any(|c| c.name == name))
    }

    fn list_available(&self, company_id: CompanyId) -> RepoResult<Vec<Car>> {
        let tables = self.tables.borrow();
        Ok(tables
            .cars
            .values()
            .filter(|car| car.belongs_to(company_id))
            .filter(|car| {
                !tables
                    .customers
                    .values()
                    .any(|customer| customer.rented_car_id == Some(car.id))
            })
            .cloned()
            .collect())
    }

    fn get_by_id(&self, id: CarId) -> RepoResult<Option<Car>> {
        Ok(self.tables.borrow().cars.get(&id).cloned())
    }
}

impl CustomerRepository for InMemoryStore {
    fn create(&self, name: &str) -> RepoResult<Option<Customer>> {
        if CustomerRepository::exists(self, name)? {
            return Ok(None);
        }

        let mut tables = self.tables.borrow_mut();
        tables.next_customer += 1;
        let customer = Customer::new(CustomerId::new(tables.next_customer), name);
        tables.customers.insert(customer.id, customer.clone());
        Ok(Some(customer))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self
            .tables
            .borrow()
            .customers
            .values()
            .any(|c| c.name == name))
    }

    fn get_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        Ok(self.tables.borrow().customers.get(&id).cloned())
    }

    fn list_all(&self) -> RepoResult<Vec<Customer>> {
        Ok(self.tables.borrow().customers.values().cloned().collect())
    }

    fn update(&self, customer: &Customer) -> RepoResult<()> {
        let mut tables = self.tables.borrow_mut();
        if let Some(car_id) = customer.rented_car_id {
            if !tables.cars.contains_key(&car_id) {
                return Err(foreign_key_failed("customer_update", customer.id.to_string()));
            }
        }

        match tables.customers.get_mut(&customer.id) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(())
            }
            None => Err(ExError::new(ExErrorKind::NotFound)
                .with_op("customer_update")
                .with_entity_id(customer.id.to_string())
                .with_message("No customer row to update")),
        }
    }
}
