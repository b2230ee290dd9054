//! Car sharing console
//!
//! Managers register companies and their cars; customers rent and return
//! them. State lives in a SQLite file chosen on the command line.

use std::io;

use carshare_core::logging_facility;
use carshare_core::{CarService, CompanyService, CustomerService};
use carshare_store::{SqliteCarRepo, SqliteCompanyRepo, SqliteCustomerRepo};
use clap::error::ErrorKind;

mod config;
mod console;
mod errors;
mod menu;
mod messages;

use config::Cli;
use console::Console;
use errors::Result;
use menu::Menu;

fn main() {
    let (cli, rejected) = match config::parse(std::env::args()) {
        Ok(cli) => (cli, None),
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => (Cli::default(), Some(e)),
    };

    logging_facility::init(cli.log_profile.into());
    if let Some(e) = rejected {
        tracing::warn!(error = %e, "Invalid command line, using defaults");
    }

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Session aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = cli.database_path();
    let conn = carshare_store::db::bootstrap(&path)?;
    tracing::info!(path = %path.display(), "Database opened");

    let company_repo = SqliteCompanyRepo::new(&conn);
    let car_repo = SqliteCarRepo::new(&conn);
    let customer_repo = SqliteCustomerRepo::new(&conn);

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut menu = Menu::new(
        CompanyService::new(&company_repo),
        CarService::new(&car_repo),
        CustomerService::new(&customer_repo),
        console,
    );
    menu.run()
}
