mod common;

use carshare_core::errors::ExErrorKind;
use carshare_core::{
    CarId, CarRepository, CompanyId, CompanyRepository, Customer, CustomerId, CustomerRepository,
};
use carshare_store::{SqliteCarRepo, SqliteCompanyRepo, SqliteCustomerRepo};
use common::{setup_test_db, sorted_names};

// ===== COMPANY =====

#[test]
fn test_company_create_and_lookup() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);

    let hertz = companies.create("Hertz").unwrap().unwrap();

    assert!(companies.exists("Hertz").unwrap());
    assert_eq!(companies.get_by_id(hertz.id).unwrap(), Some(hertz.clone()));
    assert_eq!(companies.list_all().unwrap(), vec![hertz]);
}

#[test]
fn test_company_duplicate_is_skipped() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    companies.create("Hertz").unwrap();

    assert_eq!(companies.create("Hertz").unwrap(), None);
    assert_eq!(companies.list_all().unwrap().len(), 1);
}

#[test]
fn test_company_get_unknown_is_none() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);

    assert_eq!(companies.get_by_id(CompanyId::new(404)).unwrap(), None);
}

#[test]
fn test_company_update_renames() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    let hertz = companies.create("Hertz").unwrap().unwrap();

    assert!(companies.update("Hertz", "Hertz Europe").unwrap());
    assert!(!companies.update("Nobody", "Somebody").unwrap());

    let renamed = companies.get_by_id(hertz.id).unwrap().unwrap();
    assert_eq!(renamed.name, "Hertz Europe");
}

#[test]
fn test_company_update_to_taken_name_fails() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    companies.create("Hertz").unwrap();
    companies.create("Avis").unwrap();

    let err = companies.update("Avis", "Hertz").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(err.op(), Some("company_update"));
}

#[test]
fn test_company_delete() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    companies.create("Hertz").unwrap();

    assert!(companies.delete("Hertz").unwrap());
    assert!(!companies.delete("Hertz").unwrap());
    assert!(!companies.exists("Hertz").unwrap());
}

#[test]
fn test_company_delete_with_cars_violates_foreign_key() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    let cars = SqliteCarRepo::new(&conn);
    let hertz = companies.create("Hertz").unwrap().unwrap();
    cars.create(hertz.id, "Model3").unwrap();

    let err = companies.delete("Hertz").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(companies.exists("Hertz").unwrap());
}

// ===== CAR =====

#[test]
fn test_car_create_is_tied_to_company() {
    let conn = setup_test_db();
    let hertz = SqliteCompanyRepo::new(&conn).create("Hertz").unwrap().unwrap();
    let cars = SqliteCarRepo::new(&conn);

    let model3 = cars.create(hertz.id, "Model3").unwrap().unwrap();

    assert_eq!(model3.company_id, hertz.id);
    assert_eq!(cars.get_by_id(model3.id).unwrap(), Some(model3));
    assert_eq!(cars.get_by_id(CarId::new(404)).unwrap(), None);
}

#[test]
fn test_car_name_unique_across_companies() {
    let conn = setup_test_db();
    let companies = SqliteCompanyRepo::new(&conn);
    let hertz = companies.create("Hertz").unwrap().unwrap();
    let avis = companies.create("Avis").unwrap().unwrap();
    let cars = SqliteCarRepo::new(&conn);
    cars.create(hertz.id, "Model3").unwrap();

    assert_eq!(cars.create(avis.id, "Model3").unwrap(), None);
    assert!(cars.list_available(avis.id).unwrap().is_empty());
}

#[test]
fn test_car_for_unknown_company_violates_foreign_key() {
    let conn = setup_test_db();
    let cars = SqliteCarRepo::new(&conn);

    let err = cars.create(CompanyId::new(9), "Ghost").unwrap_err();
    assert_eq!(err.op(), Some("car_create"));
}

#[test]
fn test_available_cars_exclude_rented() {
    let conn = setup_test_db();
    let hertz = SqliteCompanyRepo::new(&conn).create("Hertz").unwrap().unwrap();
    let cars = SqliteCarRepo::new(&conn);
    let customers = SqliteCustomerRepo::new(&conn);
    let model3 = cars.create(hertz.id, "Model3").unwrap().unwrap();
    cars.create(hertz.id, "Golf").unwrap();
    let mut alice = customers.create("Alice").unwrap().unwrap();
    customers.create("Bob").unwrap();

    alice.rented_car_id = Some(model3.id);
    customers.update(&alice).unwrap();

    let available = cars.list_available(hertz.id).unwrap();
    assert_eq!(sorted_names(&available, |c| c.name.as_str()), vec!["Golf"]);
}

// ===== CUSTOMER =====

#[test]
fn test_customer_roundtrip_of_rental_state() {
    let conn = setup_test_db();
    let hertz = SqliteCompanyRepo::new(&conn).create("Hertz").unwrap().unwrap();
    let model3 = SqliteCarRepo::new(&conn)
        .create(hertz.id, "Model3")
        .unwrap()
        .unwrap();
    let customers = SqliteCustomerRepo::new(&conn);
    let mut alice = customers.create("Alice").unwrap().unwrap();
    assert_eq!(alice.rented_car_id, None);

    alice.rented_car_id = Some(model3.id);
    customers.update(&alice).unwrap();
    assert_eq!(customers.get_by_id(alice.id).unwrap(), Some(alice.clone()));

    alice.rented_car_id = None;
    customers.update(&alice).unwrap();
    let stored: Option<i64> = conn
        .query_row(
            "SELECT rented_car_id FROM customer WHERE id = ?1",
            [alice.id.get()],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, None, "Not renting is stored as NULL");
}

#[test]
fn test_customer_duplicate_is_skipped() {
    let conn = setup_test_db();
    let customers = SqliteCustomerRepo::new(&conn);
    customers.create("Alice").unwrap();

    assert_eq!(customers.create("Alice").unwrap(), None);
    assert_eq!(customers.list_all().unwrap().len(), 1);
}

#[test]
fn test_customer_update_unknown_row_is_not_found() {
    let conn = setup_test_db();
    let customers = SqliteCustomerRepo::new(&conn);

    let err = customers
        .update(&Customer::new(CustomerId::new(3), "Ghost"))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_customer_rental_of_unknown_car_violates_foreign_key() {
    let conn = setup_test_db();
    let customers = SqliteCustomerRepo::new(&conn);
    let mut alice = customers.create("Alice").unwrap().unwrap();

    alice.rented_car_id = Some(CarId::new(404));
    let err = customers.update(&alice).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(customers.get_by_id(alice.id).unwrap().unwrap().rented_car_id, None);
}
