use carshare_core_types::{CarId, CustomerId};
use thiserror::Error;

/// Result type alias using CarShareError
pub type Result<T> = std::result::Result<T, CarShareError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions and console reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,
    ConstraintViolation,
    /// Stored rows disagree with each other (e.g. a rental pointing at a missing car)
    InvariantViolation,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context for debugging. The
/// storage layer reports every failure with this type.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for car sharing operations
#[derive(Error, Debug, Clone)]
pub enum CarShareError {
    // ===== Validation Errors =====
    /// Name was empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    // ===== Uniqueness Errors =====
    #[error("Company already exists: {name}")]
    CompanyAlreadyExists { name: String },

    /// Car names are unique across all companies
    #[error("Car already exists: {name}")]
    CarAlreadyExists { name: String },

    #[error("Customer already exists: {name}")]
    CustomerAlreadyExists { name: String },

    // ===== Lookup Errors =====
    #[error("Company not found: {company}")]
    CompanyNotFound { company: String },

    // ===== Rental Errors =====
    /// Customer tried to rent while holding a car
    #[error("Customer {customer_id} already rents car {car_id}")]
    AlreadyRenting {
        customer_id: CustomerId,
        car_id: CarId,
    },

    /// Customer tried to return or inspect a rental without one
    #[error("Customer {customer_id} is not renting a car")]
    NotRenting { customer_id: CustomerId },

    /// A rental points at a car row that does not exist
    #[error("Customer {customer_id} rents car {car_id}, but no such car is stored")]
    RentedCarMissing {
        customer_id: CustomerId,
        car_id: CarId,
    },

    // ===== Storage Errors =====
    /// Underlying store failed
    #[error("Storage failure: {0}")]
    Storage(ExError),
}

impl CarShareError {
    /// Whether this error came from the store rather than from a business rule
    pub fn is_storage(&self) -> bool {
        matches!(self, CarShareError::Storage(_))
    }
}

impl From<ExError> for CarShareError {
    fn from(err: ExError) -> Self {
        CarShareError::Storage(err)
    }
}

impl From<CarShareError> for ExError {
    fn from(err: CarShareError) -> Self {
        match err {
            CarShareError::InvalidName { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_name")
                .with_message(reason),

            CarShareError::CompanyAlreadyExists { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(name)
                    .with_message("Company already exists")
            }

            CarShareError::CarAlreadyExists { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(name)
                .with_message("Car already exists"),

            CarShareError::CustomerAlreadyExists { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_entity_id(name)
                    .with_message("Customer already exists")
            }

            CarShareError::CompanyNotFound { company } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(company)
                .with_message("Company not found"),

            CarShareError::AlreadyRenting {
                customer_id,
                car_id,
            } => ExError::new(ExErrorKind::ConstraintViolation)
                .with_entity_id(customer_id.to_string())
                .with_message(format!("Customer already rents car {}", car_id)),

            CarShareError::NotRenting { customer_id } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(customer_id.to_string())
                    .with_message("Customer is not renting a car")
            }

            CarShareError::RentedCarMissing {
                customer_id,
                car_id,
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_entity_id(customer_id.to_string())
                .with_message(format!("Rented car {} does not exist", car_id)),

            CarShareError::Storage(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
            (ExErrorKind::InvariantViolation, "ERR_INVARIANT_VIOLATION"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_message() {
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("disk I/O error");
        assert_eq!(
            err.to_string(),
            "[ERR_PERSISTENCE] in operation 'sqlite': disk I/O error"
        );
    }

    #[test]
    fn test_storage_variant_unwraps_to_inner_error() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("locked");
        let ex: ExError = CarShareError::from(inner).into();
        assert_eq!(ex.kind(), ExErrorKind::Persistence);
        assert_eq!(ex.message(), "locked");
    }

    #[test]
    fn test_rental_errors_keep_customer_context() {
        let ex: ExError = CarShareError::RentedCarMissing {
            customer_id: CustomerId::new(4),
            car_id: CarId::new(9),
        }
        .into();

        assert_eq!(ex.kind(), ExErrorKind::InvariantViolation);
        assert_eq!(ex.entity_id(), Some("4"));
        assert!(ex.message().contains('9'));
    }
}
