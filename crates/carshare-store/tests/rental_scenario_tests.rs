// End-to-end rental scenario through the services on a SQLite file

mod common;

use carshare_core::{CarService, CarShareError, CompanyService, CustomerService};
use carshare_store::{SqliteCarRepo, SqliteCompanyRepo, SqliteCustomerRepo};

#[test]
fn test_hertz_rent_and_return_on_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let conn = carshare_store::db::bootstrap(dir.path().join("scenario.db")).unwrap();
    let company_repo = SqliteCompanyRepo::new(&conn);
    let car_repo = SqliteCarRepo::new(&conn);
    let customer_repo = SqliteCustomerRepo::new(&conn);
    let companies = CompanyService::new(&company_repo);
    let cars = CarService::new(&car_repo);
    let customers = CustomerService::new(&customer_repo);

    let hertz = companies.create_company("Hertz").unwrap();
    assert!(matches!(
        companies.create_company("Hertz"),
        Err(CarShareError::CompanyAlreadyExists { .. })
    ));

    let model3 = cars.create_car(&hertz, "Model3").unwrap();
    assert_eq!(cars.available_cars(&hertz).unwrap(), vec![model3.clone()]);

    let mut alice = customers.create_customer("Alice").unwrap();
    customers.rent_car(&mut alice, &model3).unwrap();
    assert!(customers.is_renting(&alice));
    assert!(cars.available_cars(&hertz).unwrap().is_empty());
    assert_eq!(cars.rented_car(&alice).unwrap(), model3);

    customers.return_car(&mut alice).unwrap();
    assert!(!customers.is_renting(&alice));
    assert_eq!(cars.available_cars(&hertz).unwrap(), vec![model3]);
}

#[test]
fn test_rental_state_is_persisted_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persist.db");
    {
        let conn = carshare_store::db::bootstrap(&path).unwrap();
        let company_repo = SqliteCompanyRepo::new(&conn);
        let car_repo = SqliteCarRepo::new(&conn);
        let customer_repo = SqliteCustomerRepo::new(&conn);
        let hertz = CompanyService::new(&company_repo)
            .create_company("Hertz")
            .unwrap();
        let model3 = CarService::new(&car_repo)
            .create_car(&hertz, "Model3")
            .unwrap();
        let customers = CustomerService::new(&customer_repo);
        let mut alice = customers.create_customer("Alice").unwrap();
        customers.rent_car(&mut alice, &model3).unwrap();
    }

    let conn = carshare_store::db::bootstrap(&path).unwrap();
    let customer_repo = SqliteCustomerRepo::new(&conn);
    let car_repo = SqliteCarRepo::new(&conn);
    let alice = CustomerService::new(&customer_repo)
        .list_customers()
        .unwrap()
        .into_iter()
        .find(|c| c.name == "Alice")
        .unwrap();

    let car = CarService::new(&car_repo).rented_car(&alice).unwrap();
    assert_eq!(car.name, "Model3");
}
