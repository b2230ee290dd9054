#![allow(clippy::result_large_err)]

use carshare_core::errors::{ExError, ExErrorKind};
use carshare_core::model::Customer;
use carshare_core::repository::{CustomerRepository, RepoResult};
use carshare_core_types::{CarId, CustomerId};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::errors::sqlite_op;

/// SQLite repository for the `customer` table
pub struct SqliteCustomerRepo<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteCustomerRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn customer_from_row(row: &Row<'_>) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let rented_car_id: Option<i64> = row.get(2)?;

    let mut customer = Customer::new(CustomerId::new(id), name);
    customer.rented_car_id = rented_car_id.map(CarId::new);
    Ok(customer)
}

impl CustomerRepository for SqliteCustomerRepo<'_> {
    fn create(&self, name: &str) -> RepoResult<Option<Customer>> {
        if self.exists(name)? {
            return Ok(None);
        }

        self.conn
            .execute("INSERT INTO customer (name) VALUES (?1)", [name])
            .map_err(sqlite_op("customer_create"))?;

        let id = CustomerId::new(self.conn.last_insert_rowid());
        Ok(Some(Customer::new(id, name)))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM customer WHERE name = ?1", [name], |_| Ok(()))
            .optional()
            .map_err(sqlite_op("customer_exists"))?;

        Ok(found.is_some())
    }

    fn get_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        self.conn
            .query_row(
                "SELECT id, name, rented_car_id FROM customer WHERE id = ?1",
                [id.get()],
                customer_from_row,
            )
            .optional()
            .map_err(sqlite_op("customer_get"))
    }

    fn list_all(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, rented_car_id FROM customer")
            .map_err(sqlite_op("customer_list"))?;

        let customers = stmt
            .query_map([], customer_from_row)
            .map_err(sqlite_op("customer_list"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_op("customer_list"))?;

        Ok(customers)
    }

    fn update(&self, customer: &Customer) -> RepoResult<()> {
        // NULL marks "not renting"
        let changed = self
            .conn
            .execute(
                "UPDATE customer SET name = ?1, rented_car_id = ?2 WHERE id = ?3",
                rusqlite::params![
                    customer.name,
                    customer.rented_car_id.map(CarId::get),
                    customer.id.get(),
                ],
            )
            .map_err(sqlite_op("customer_update"))?;

        if changed == 0 {
            return Err(ExError::new(ExErrorKind::NotFound)
                .with_op("customer_update")
                .with_entity_id(customer.id.to_string())
                .with_message("No customer row to update"));
        }

        Ok(())
    }
}
