//! Domain services
//!
//! Thin wrappers over the repository traits. They validate input, turn
//! "insert skipped" into uniqueness errors, enforce the one-rental-per-customer
//! rule and emit the canonical operation logs.

use std::time::Instant;

use crate::errors::{CarShareError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

pub mod car_service;
pub mod company_service;
pub mod customer_service;

pub use car_service::CarService;
pub use company_service::CompanyService;
pub use customer_service::CustomerService;

/// Trim a user-supplied name and reject blank ones
pub(crate) fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CarShareError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Run a read-only operation between start and end/error log events
pub(crate) fn observe<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    let result = f();
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  Hertz ").unwrap(), "Hertz");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(matches!(
            validate_name(" \t"),
            Err(CarShareError::InvalidName { .. })
        ));
    }
}
