use std::io::{BufRead, Write};

use carshare_core::Company;

use super::Menu;
use crate::errors::Result;
use crate::messages::{ListKind, BACK, INVALID_SELECTION};

impl<I: BufRead, O: Write> Menu<'_, I, O> {
    pub(super) fn manager_menu(&mut self) -> Result<()> {
        loop {
            self.console
                .lines(&["1. Company list", "2. Create a company"])?;
            self.console.say(BACK)?;

            match self.console.read_choice()? {
                Some(1) => {
                    if let Some(company) = self.select_company()? {
                        self.car_menu(&company)?;
                    }
                }
                Some(2) => self.create_company()?,
                Some(0) => return Ok(()),
                Some(_) => self.console.say(INVALID_SELECTION)?,
                None => {}
            }
        }
    }

    fn car_menu(&mut self, company: &Company) -> Result<()> {
        self.console.line(&format!("'{}' company", company.name))?;
        loop {
            self.console.lines(&["1. Car list", "2. Create a car"])?;
            self.console.say(BACK)?;

            match self.console.read_choice()? {
                Some(1) => self.list_available_cars(company)?,
                Some(2) => self.create_car(company)?,
                Some(0) => return Ok(()),
                Some(_) => self.console.say(INVALID_SELECTION)?,
                None => {}
            }
        }
    }

    /// Pick a company from the full list, ordered by id
    pub(super) fn select_company(&mut self) -> Result<Option<Company>> {
        let mut companies = match self.companies.list_companies() {
            Ok(companies) => companies,
            Err(e) => {
                self.report(e)?;
                return Ok(None);
            }
        };
        companies.sort_by_key(|c| c.id);

        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        let picked = self
            .console
            .choose(Some("Choose the company:"), ListKind::Company, &names)?;

        Ok(picked.map(|i| companies.swap_remove(i)))
    }

    /// Cars of `company` that are on the lot right now
    fn list_available_cars(&mut self, company: &Company) -> Result<()> {
        match self.cars.available_cars(company) {
            Ok(mut cars) => {
                cars.sort_by_key(|c| c.id);
                let names: Vec<&str> = cars.iter().map(|c| c.name.as_str()).collect();
                self.console.list(ListKind::Car, &names)?;
                if !names.is_empty() {
                    self.console.blank()?;
                }
                Ok(())
            }
            Err(e) => self.report(e),
        }
    }

    fn create_company(&mut self) -> Result<()> {
        self.console.line("Enter the company name:")?;
        let name = self.console.read_line()?;
        match self.companies.create_company(&name) {
            Ok(_) => self.console.say("The company was created!"),
            Err(e) => self.report(e),
        }
    }

    fn create_car(&mut self, company: &Company) -> Result<()> {
        self.console.line("Enter the car name:")?;
        let name = self.console.read_line()?;
        match self.cars.create_car(company, &name) {
            Ok(_) => self.console.say("The car was created!"),
            Err(e) => self.report(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use carshare_core::{CarRepository, CompanyRepository, CustomerRepository, InMemoryStore};

    use crate::menu::tests::run_script;

    #[test]
    fn test_duplicate_company_is_reported() {
        let store = InMemoryStore::new();
        let out = run_script(&store, "1\n2\nHertz\n2\nHertz\n0\n0\n");

        assert!(out.contains("Error: The company already exists in the database."));
        assert_eq!(CompanyRepository::list_all(&store).unwrap().len(), 1);
    }

    #[test]
    fn test_blank_company_name_is_rejected() {
        let store = InMemoryStore::new();
        let out = run_script(&store, "1\n2\n   \n0\n0\n");

        assert!(out.contains("Error: The name must not be empty."));
        assert!(CompanyRepository::list_all(&store).unwrap().is_empty());
    }

    #[test]
    fn test_empty_company_list_returns_to_manager_menu() {
        let out = run_script(&InMemoryStore::new(), "1\n1\n0\n0\n");

        assert!(out.contains("The company list is empty!"));
        assert_eq!(out.matches("1. Company list").count(), 2);
    }

    #[test]
    fn test_companies_listed_in_id_order() {
        let store = InMemoryStore::new();
        CompanyRepository::create(&store, "Sixt").unwrap();
        CompanyRepository::create(&store, "Avis").unwrap();

        let out = run_script(&store, "1\n1\n0\n0\n0\n");

        assert!(out.contains("Company list:\n1. Sixt\n2. Avis\n"));
    }

    #[test]
    fn test_manager_car_list_leaves_out_rented_cars() {
        let store = InMemoryStore::new();
        let hertz = CompanyRepository::create(&store, "Hertz").unwrap().unwrap();
        let model3 = CarRepository::create(&store, hertz.id, "Model3")
            .unwrap()
            .unwrap();
        CarRepository::create(&store, hertz.id, "Golf").unwrap();
        let mut alice = CustomerRepository::create(&store, "Alice").unwrap().unwrap();
        alice.rented_car_id = Some(model3.id);
        CustomerRepository::update(&store, &alice).unwrap();

        let out = run_script(&store, "1\n1\n1\n1\n0\n0\n0\n");

        assert!(out.contains("'Hertz' company"));
        assert!(out.contains("Car list:\n1. Golf\n"));
        assert!(!out.contains("Model3"));
    }

    #[test]
    fn test_empty_car_list() {
        let store = InMemoryStore::new();
        CompanyRepository::create(&store, "Hertz").unwrap();

        let out = run_script(&store, "1\n1\n1\n1\n0\n0\n0\n");

        assert!(out.contains("The car list is empty!"));
    }
}
