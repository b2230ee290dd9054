//! Console texts
//!
//! Everything the menus print that is not a list entry lives here, so the
//! wording stays consistent between flows.

use carshare_core::CarShareError;

pub const BACK: &str = "0. Back";
pub const EXIT: &str = "0. Exit";

pub const INVALID_SELECTION: &str = "Error: Invalid selection.";
pub const INVALID_NUMBER: &str = "Error: Invalid Input as number.";
pub const OPERATION_FAILED: &str = "Error: The operation was not successful.";

pub const ALREADY_RENTING: &str = "You've already rented a car!";
pub const NOT_RENTING: &str = "You didn't rent a car!";

/// Which table a numbered list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Company,
    Car,
    Customer,
}

impl ListKind {
    pub fn header(self) -> &'static str {
        match self {
            ListKind::Company => "Company list:",
            ListKind::Car => "Car list:",
            ListKind::Customer => "Customer list:",
        }
    }

    pub fn empty(self) -> &'static str {
        match self {
            ListKind::Company => "The company list is empty!",
            ListKind::Car => "The car list is empty!",
            ListKind::Customer => "The customer list is empty!",
        }
    }
}

/// Text shown to the user for a failed service call
///
/// Rule violations get their own wording; anything else is a storage or
/// consistency problem and gets the generic message.
pub fn message_for(err: &CarShareError) -> &'static str {
    match err {
        CarShareError::InvalidName { .. } => "Error: The name must not be empty.",
        CarShareError::CompanyAlreadyExists { .. } => {
            "Error: The company already exists in the database."
        }
        CarShareError::CarAlreadyExists { .. } => "Error: The car already exists in the database.",
        CarShareError::CustomerAlreadyExists { .. } => {
            "Error: The customer already exists in the database."
        }
        CarShareError::AlreadyRenting { .. } => ALREADY_RENTING,
        CarShareError::NotRenting { .. } => NOT_RENTING,
        CarShareError::CompanyNotFound { .. }
        | CarShareError::RentedCarMissing { .. }
        | CarShareError::Storage(_) => OPERATION_FAILED,
    }
}
