use carshare_core_types::{CarId, CompanyId};
use serde::{Deserialize, Serialize};

/// Car - a vehicle owned by exactly one company
///
/// Cars are immutable once created. Whether a car is available is not a
/// property of the car itself; it is derived from the customer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Row id assigned by the store
    pub id: CarId,

    /// Display name, unique across all companies
    pub name: String,

    /// Owning company
    pub company_id: CompanyId,
}

impl Car {
    /// Create a Car from a stored row
    pub fn new(id: CarId, name: impl Into<String>, company_id: CompanyId) -> Self {
        Self {
            id,
            name: name.into(),
            company_id,
        }
    }

    /// Check if this car belongs to the given company
    pub fn belongs_to(&self, company_id: CompanyId) -> bool {
        self.company_id == company_id
    }
}
