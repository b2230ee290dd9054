use std::io::{BufRead, Write};

use carshare_core::Customer;

use super::Menu;
use crate::errors::Result;
use crate::messages::{
    ListKind, ALREADY_RENTING, BACK, INVALID_SELECTION, NOT_RENTING, OPERATION_FAILED,
};

impl<I: BufRead, O: Write> Menu<'_, I, O> {
    pub(super) fn create_customer(&mut self) -> Result<()> {
        self.console.line("Enter the customer name:")?;
        let name = self.console.read_line()?;
        match self.customers.create_customer(&name) {
            Ok(_) => self.console.say("The customer was added!"),
            Err(e) => self.report(e),
        }
    }

    pub(super) fn customer_login(&mut self) -> Result<()> {
        let mut customers = match self.customers.list_customers() {
            Ok(customers) => customers,
            Err(e) => return self.report(e),
        };
        customers.sort_by_key(|c| c.id);

        let names: Vec<&str> = customers.iter().map(|c| c.name.as_str()).collect();
        let picked = self
            .console
            .choose(Some("Choose a customer:"), ListKind::Customer, &names)?;

        match picked {
            Some(i) => self.customer_menu(customers.swap_remove(i)),
            None => Ok(()),
        }
    }

    fn customer_menu(&mut self, mut customer: Customer) -> Result<()> {
        loop {
            self.console
                .lines(&["1. Rent a car", "2. Return a rented car", "3. My rented car"])?;
            self.console.say(BACK)?;

            match self.console.read_choice()? {
                Some(1) => self.rent_car(&mut customer)?,
                Some(2) => self.return_car(&mut customer)?,
                Some(3) => self.show_rented_car(&customer)?,
                Some(0) => return Ok(()),
                Some(_) => self.console.say(INVALID_SELECTION)?,
                None => {}
            }
        }
    }

    fn rent_car(&mut self, customer: &mut Customer) -> Result<()> {
        if self.customers.is_renting(customer) {
            return self.console.line(ALREADY_RENTING);
        }

        let Some(company) = self.select_company()? else {
            return Ok(());
        };

        let mut cars = match self.cars.available_cars(&company) {
            Ok(cars) => cars,
            Err(e) => return self.report(e),
        };
        cars.sort_by_key(|c| c.id);

        let names: Vec<&str> = cars.iter().map(|c| c.name.as_str()).collect();
        let Some(i) = self
            .console
            .choose(Some("Choose a car:"), ListKind::Car, &names)?
        else {
            return Ok(());
        };

        let car = &cars[i];
        match self.customers.rent_car(customer, car) {
            Ok(()) => self.console.line(&format!("You rented '{}'", car.name)),
            Err(e) => self.report(e),
        }
    }

    fn return_car(&mut self, customer: &mut Customer) -> Result<()> {
        if !self.customers.is_renting(customer) {
            return self.console.say(NOT_RENTING);
        }

        match self.customers.return_car(customer) {
            Ok(_) => self.console.say("You've returned a rented car!"),
            Err(e) => self.report(e),
        }
    }

    fn show_rented_car(&mut self, customer: &Customer) -> Result<()> {
        let car = match self.cars.rented_car(customer) {
            Ok(car) => car,
            Err(e) => return self.report(e),
        };

        match self.companies.get_company(car.company_id) {
            Ok(Some(company)) => {
                self.console.lines(&[
                    "You rented car:",
                    car.name.as_str(),
                    "Company:",
                    company.name.as_str(),
                ])?;
                self.console.blank()
            }
            Ok(None) => {
                tracing::error!(
                    car_id = %car.id,
                    company_id = %car.company_id,
                    "Rented car belongs to a missing company"
                );
                self.console.say(OPERATION_FAILED)
            }
            Err(e) => self.report(e),
        }
    }
}
