use std::time::Instant;

use carshare_core_types::{CarId, CustomerId};

use super::{observe, validate_name};
use crate::errors::{CarShareError, Result};
use crate::logging_facility::INCONSISTENCY_TARGET;
use crate::model::{Car, Customer};
use crate::repository::CustomerRepository;
use crate::{log_op_end, log_op_error, log_op_start};

/// Customer registration and rental bookkeeping
pub struct CustomerService<'r> {
    repo: &'r dyn CustomerRepository,
}

impl<'r> CustomerService<'r> {
    pub fn new(repo: &'r dyn CustomerRepository) -> Self {
        Self { repo }
    }

    /// Register a new customer
    ///
    /// # Errors
    /// * `InvalidName` - If the name is blank
    /// * `CustomerAlreadyExists` - If a customer with this name is stored
    /// * `Storage` - If the store fails
    pub fn create_customer(&self, name: &str) -> Result<Customer> {
        log_op_start!("customer_create", name = name);
        let start = Instant::now();

        let result = self.create_customer_impl(name).map_err(|e| {
            log_op_error!(
                "customer_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "customer_create",
            duration_ms = start.elapsed().as_millis() as u64,
            customer_id = result.id.get()
        );

        Ok(result)
    }

    fn create_customer_impl(&self, name: &str) -> Result<Customer> {
        let name = validate_name(name)?;
        self.repo
            .create(&name)?
            .ok_or(CarShareError::CustomerAlreadyExists { name })
    }

    /// # Errors
    /// * `Storage` - If the store fails
    pub fn exists(&self, name: &str) -> Result<bool> {
        observe("customer_exists", || Ok(self.repo.exists(name)?))
    }

    /// # Errors
    /// * `Storage` - If the store fails
    pub fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        observe("customer_get", || Ok(self.repo.get_by_id(id)?))
    }

    /// All customers in storage order
    ///
    /// # Errors
    /// * `Storage` - If the store fails
    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        observe("customer_list", || Ok(self.repo.list_all()?))
    }

    pub fn is_renting(&self, customer: &Customer) -> bool {
        customer.is_renting()
    }

    /// Rent `car` for `customer` and persist the rental
    ///
    /// On success `customer.rented_car_id` is `Some(car.id)`. If the write
    /// fails the in-memory value is restored and written back once more.
    ///
    /// # Errors
    /// * `AlreadyRenting` - If the customer already holds a car
    /// * `Storage` - If persisting the rental fails
    pub fn rent_car(&self, customer: &mut Customer, car: &Car) -> Result<()> {
        log_op_start!(
            "customer_rent",
            customer_id = customer.id.get(),
            car_id = car.id.get()
        );
        let start = Instant::now();

        let result = match customer.rented_car_id {
            Some(car_id) => Err(CarShareError::AlreadyRenting {
                customer_id: customer.id,
                car_id,
            }),
            None => self.update_rental(customer, Some(car.id)),
        };

        match &result {
            Ok(()) => {
                log_op_end!(
                    "customer_rent",
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
            Err(e) => {
                log_op_error!(
                    "customer_rent",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    /// Return the car `customer` is renting
    ///
    /// Returns the id of the returned car.
    ///
    /// # Errors
    /// * `NotRenting` - If the customer holds no car
    /// * `Storage` - If persisting the return fails
    pub fn return_car(&self, customer: &mut Customer) -> Result<CarId> {
        log_op_start!("customer_return", customer_id = customer.id.get());
        let start = Instant::now();

        let result = match customer.rented_car_id {
            Some(car_id) => self.update_rental(customer, None).map(|()| car_id),
            None => Err(CarShareError::NotRenting {
                customer_id: customer.id,
            }),
        };

        match &result {
            Ok(car_id) => {
                log_op_end!(
                    "customer_return",
                    duration_ms = start.elapsed().as_millis() as u64,
                    car_id = car_id.get()
                );
            }
            Err(e) => {
                log_op_error!(
                    "customer_return",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
        }
        result
    }

    /// Write a new rental state, undoing the in-memory change on failure
    fn update_rental(&self, customer: &mut Customer, rented_car_id: Option<CarId>) -> Result<()> {
        let previous = customer.rented_car_id;
        customer.rented_car_id = rented_car_id;

        if let Err(err) = self.repo.update(customer) {
            customer.rented_car_id = previous;
            if let Err(undo_err) = self.repo.update(customer) {
                tracing::warn!(
                    target: INCONSISTENCY_TARGET,
                    customer_id = customer.id.get(),
                    err_code = undo_err.code(),
                    "Restoring previous rental state failed"
                );
            }
            return Err(err.into());
        }

        Ok(())
    }
}
