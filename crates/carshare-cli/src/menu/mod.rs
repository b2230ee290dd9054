//! Console menus
//!
//! A tree of looping menus: each one re-prints its options until the user
//! picks "0", which returns to the parent. The root's "0" ends the session,
//! as does end of input anywhere.

use std::io::{BufRead, Write};

use carshare_core::{CarService, CarShareError, CompanyService, CustomerService};

use crate::console::Console;
use crate::errors::{CliError, Result};
use crate::messages::{message_for, EXIT, INVALID_SELECTION};

mod customer;
mod manager;

pub struct Menu<'r, I, O> {
    companies: CompanyService<'r>,
    cars: CarService<'r>,
    customers: CustomerService<'r>,
    console: Console<I, O>,
}

impl<'r, I: BufRead, O: Write> Menu<'r, I, O> {
    pub fn new(
        companies: CompanyService<'r>,
        cars: CarService<'r>,
        customers: CustomerService<'r>,
        console: Console<I, O>,
    ) -> Self {
        Self {
            companies,
            cars,
            customers,
            console,
        }
    }

    /// Run the session until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(CliError::InputClosed) => {
                tracing::debug!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.console.lines(&[
                "1. Log in as a manager",
                "2. Log in as a customer",
                "3. Create a customer",
            ])?;
            self.console.say(EXIT)?;

            match self.console.read_choice()? {
                Some(1) => self.manager_menu()?,
                Some(2) => self.customer_login()?,
                Some(3) => self.create_customer()?,
                Some(0) => return Ok(()),
                Some(_) => self.console.say(INVALID_SELECTION)?,
                None => {}
            }
        }
    }

    /// Tell the user a service call failed
    ///
    /// Failures that aren't a broken business rule are logged here; the
    /// session carries on either way.
    fn report(&mut self, err: CarShareError) -> Result<()> {
        let text = message_for(&err);
        if matches!(
            err,
            CarShareError::Storage(_)
                | CarShareError::RentedCarMissing { .. }
                | CarShareError::CompanyNotFound { .. }
        ) {
            tracing::error!(error = %err, "Menu action failed");
        }
        match err {
            CarShareError::AlreadyRenting { .. } => self.console.line(text),
            _ => self.console.say(text),
        }
    }
}
