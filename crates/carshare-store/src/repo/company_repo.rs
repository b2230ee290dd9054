#![allow(clippy::result_large_err)]

use carshare_core::model::Company;
use carshare_core::repository::{CompanyRepository, RepoResult};
use carshare_core_types::CompanyId;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::errors::sqlite_op;

/// SQLite repository for the `company` table
pub struct SqliteCompanyRepo<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteCompanyRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn company_from_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    Ok(Company::new(CompanyId::new(id), name))
}

impl CompanyRepository for SqliteCompanyRepo<'_> {
    fn create(&self, name: &str) -> RepoResult<Option<Company>> {
        if self.exists(name)? {
            return Ok(None);
        }

        self.conn
            .execute("INSERT INTO company (name) VALUES (?1)", [name])
            .map_err(sqlite_op("company_create"))?;

        let id = CompanyId::new(self.conn.last_insert_rowid());
        Ok(Some(Company::new(id, name)))
    }

    fn exists(&self, name: &str) -> RepoResult<bool> {
        let found = self
            .conn
            .query_row("SELECT 1 FROM company WHERE name = ?1", [name], |_| Ok(()))
            .optional()
            .map_err(sqlite_op("company_exists"))?;

        Ok(found.is_some())
    }

    fn get_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>> {
        self.conn
            .query_row(
                "SELECT id, name FROM company WHERE id = ?1",
                [id.get()],
                company_from_row,
            )
            .optional()
            .map_err(sqlite_op("company_get"))
    }

    fn list_all(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM company")
            .map_err(sqlite_op("company_list"))?;

        let companies = stmt
            .query_map([], company_from_row)
            .map_err(sqlite_op("company_list"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sqlite_op("company_list"))?;

        Ok(companies)
    }

    fn update(&self, old_name: &str, new_name: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute(
                "UPDATE company SET name = ?1 WHERE name = ?2",
                [new_name, old_name],
            )
            .map_err(sqlite_op("company_update"))?;

        Ok(changed > 0)
    }

    fn delete(&self, name: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM company WHERE name = ?1", [name])
            .map_err(sqlite_op("company_delete"))?;

        Ok(removed > 0)
    }
}
