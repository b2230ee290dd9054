use std::time::Instant;

use super::{observe, validate_name};
use crate::errors::{CarShareError, Result};
use crate::model::{Car, Company, Customer};
use crate::repository::CarRepository;
use crate::{log_op_end, log_op_error, log_op_start};

/// Car operations for both manager and customer menus
pub struct CarService<'r> {
    repo: &'r dyn CarRepository,
}

impl<'r> CarService<'r> {
    pub fn new(repo: &'r dyn CarRepository) -> Self {
        Self { repo }
    }

    /// Register a new car under `company`
    ///
    /// Car names are unique across all companies, not per company.
    ///
    /// # Errors
    /// * `InvalidName` - If the name is blank
    /// * `CarAlreadyExists` - If any company already has a car with this name
    /// * `Storage` - If the store fails
    pub fn create_car(&self, company: &Company, name: &str) -> Result<Car> {
        log_op_start!("car_create", company_id = company.id.get(), name = name);
        let start = Instant::now();

        let result = self.create_car_impl(company, name).map_err(|e| {
            log_op_error!(
                "car_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "car_create",
            duration_ms = start.elapsed().as_millis() as u64,
            car_id = result.id.get()
        );

        Ok(result)
    }

    fn create_car_impl(&self, company: &Company, name: &str) -> Result<Car> {
        let name = validate_name(name)?;
        self.repo
            .create(company.id, &name)?
            .ok_or(CarShareError::CarAlreadyExists { name })
    }

    /// # Errors
    /// * `Storage` - If the store fails
    pub fn exists(&self, name: &str) -> Result<bool> {
        observe("car_exists", || Ok(self.repo.exists(name)?))
    }

    /// Cars of `company` nobody is renting right now
    ///
    /// # Errors
    /// * `Storage` - If the store fails
    pub fn available_cars(&self, company: &Company) -> Result<Vec<Car>> {
        observe("car_list_available", || {
            Ok(self.repo.list_available(company.id)?)
        })
    }

    /// The car `customer` is renting
    ///
    /// # Errors
    /// * `NotRenting` - If the customer holds no car
    /// * `RentedCarMissing` - If the rented car id has no row (data integrity break)
    /// * `Storage` - If the store fails
    pub fn rented_car(&self, customer: &Customer) -> Result<Car> {
        observe("car_rented", || {
            let car_id = customer
                .rented_car_id
                .ok_or(CarShareError::NotRenting {
                    customer_id: customer.id,
                })?;

            self.repo
                .get_by_id(car_id)?
                .ok_or(CarShareError::RentedCarMissing {
                    customer_id: customer.id,
                    car_id,
                })
        })
    }
}
