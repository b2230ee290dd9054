use std::time::Instant;

use carshare_core_types::CompanyId;

use super::{observe, validate_name};
use crate::errors::{CarShareError, Result};
use crate::model::Company;
use crate::repository::CompanyRepository;
use crate::{log_op_end, log_op_error, log_op_start};

/// Company operations used by the manager menus
pub struct CompanyService<'r> {
    repo: &'r dyn CompanyRepository,
}

impl<'r> CompanyService<'r> {
    pub fn new(repo: &'r dyn CompanyRepository) -> Self {
        Self { repo }
    }

    /// Register a new company
    ///
    /// # Errors
    /// * `InvalidName` - If the name is blank
    /// * `CompanyAlreadyExists` - If a company with this name is stored
    /// * `Storage` - If the store fails
    pub fn create_company(&self, name: &str) -> Result<Company> {
        log_op_start!("company_create", name = name);
        let start = Instant::now();

        let result = self.create_company_impl(name).map_err(|e| {
            log_op_error!(
                "company_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "company_create",
            duration_ms = start.elapsed().as_millis() as u64,
            company_id = result.id.get()
        );

        Ok(result)
    }

    fn create_company_impl(&self, name: &str) -> Result<Company> {
        let name = validate_name(name)?;
        self.repo
            .create(&name)?
            .ok_or(CarShareError::CompanyAlreadyExists { name })
    }

    /// Check whether a company with this name exists
    ///
    /// # Errors
    /// * `Storage` - If the store fails
    pub fn exists(&self, name: &str) -> Result<bool> {
        observe("company_exists", || Ok(self.repo.exists(name)?))
    }

    /// Look up a company by id
    ///
    /// # Errors
    /// * `Storage` - If the store fails
    pub fn get_company(&self, id: CompanyId) -> Result<Option<Company>> {
        observe("company_get", || Ok(self.repo.get_by_id(id)?))
    }

    /// All companies in storage order
    ///
    /// # Errors
    /// * `Storage` - If the store fails
    pub fn list_companies(&self) -> Result<Vec<Company>> {
        observe("company_list", || Ok(self.repo.list_all()?))
    }

    /// Rename a company
    ///
    /// # Errors
    /// * `InvalidName` - If the new name is blank
    /// * `CompanyNotFound` - If no company is called `old_name`
    /// * `Storage` - If the store fails, including a clash with another company's name
    pub fn rename_company(&self, old_name: &str, new_name: &str) -> Result<()> {
        observe("company_rename", || {
            let new_name = validate_name(new_name)?;
            if self.repo.update(old_name, &new_name)? {
                Ok(())
            } else {
                Err(CarShareError::CompanyNotFound {
                    company: old_name.to_string(),
                })
            }
        })
    }

    /// Delete a company by name
    ///
    /// # Errors
    /// * `CompanyNotFound` - If no company has this name
    /// * `Storage` - If the store fails, including while cars still reference the company
    pub fn delete_company(&self, name: &str) -> Result<()> {
        observe("company_delete", || {
            if self.repo.delete(name)? {
                Ok(())
            } else {
                Err(CarShareError::CompanyNotFound {
                    company: name.to_string(),
                })
            }
        })
    }
}
