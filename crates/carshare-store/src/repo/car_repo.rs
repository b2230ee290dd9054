#![allow(clippy::result_large_err)]

use carshare_core::model::Car;
use carshare_core::repository::{CarRepository, RepoResult};
use carshare_core_types::{CarId, CompanyId};
use rusqlite::{Connection, OptionalExtension, Row};

use crate::errors::sqlite_op;

/// SQLite repository for the `car` table
pub struct SqliteCarRepo<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteCarRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn query_cars(&self, op: &str, sql: &str, company_id: CompanyId) -> RepoResult<Vec<Car>> {
        let mut stmt = self.conn.prepare(sql).map_err(sqlite_op(op))?;

        let cars = stmt
            .query_map([company_id.get()], car_from_row)
            .map_err(sqlite_op(op))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_op(op))?;

        Ok(cars)
    }
}

fn car_from_row(row: &Row<'_>) -> rusqlite::Result<Car> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let company_id: i64 = row.get(2)?;
    Ok(Car::new(CarId::new(id), name, CompanyId::new(company_id)))
}

impl CarRepository for SqliteCarRepo<'_> {
    fn create(&self, company_id: CompanyId, name: &str) -> RepoResult<Option<Car>> {
        if self.exists(name)? {
            return Ok(None);
        }

        self.conn
            .execute(
                "INSERT INTO car (name, company_id) VALUES (?1, ?2)",
                rusqlite::params![name, company_id.get()],
            )
            .map_err(sqlite_op("car_create"))?;

        let id = CarId::new(self.conn.last_insert_rowid());
        Ok(Some(Car::new(id, name, company_id)))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM car WHERE name = ?1", [name], |_| Ok(()))
            .optional()
            .map_err(sqlite_op("car_exists"))?;

        Ok(found.is_some())
    }

    fn list_available(&self, company_id: CompanyId) -> RepoResult<Vec<Car>> {
        self.query_cars(
            "car_list_available",
            "SELECT car.id, car.name, car.company_id
             FROM car
             LEFT JOIN customer ON car.id = customer.rented_car_id
             WHERE customer.id IS NULL AND car.company_id = ?1",
            company_id,
        )
    }

    fn get_by_id(&self, id: CarId) -> RepoResult<Option<Car>> {
        self.conn
            .query_row(
                "SELECT id, name, company_id FROM car WHERE id = ?1",
                [id.get()],
                car_from_row,
            )
            .optional()
            .map_err(sqlite_op("car_get"))
    }
}
