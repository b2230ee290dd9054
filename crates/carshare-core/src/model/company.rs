use carshare_core_types::CompanyId;
use serde::{Deserialize, Serialize};

/// Company - a rental company that owns cars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Row id assigned by the store
    pub id: CompanyId,

    /// Unique display name
    pub name: String,
}

impl Company {
    /// Create a Company from a stored row
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
