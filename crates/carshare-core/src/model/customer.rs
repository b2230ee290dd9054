use carshare_core_types::{CarId, CustomerId};
use serde::{Deserialize, Serialize};

/// Customer - a person who can rent at most one car at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Row id assigned by the store
    pub id: CustomerId,

    /// Unique display name
    pub name: String,

    /// Car currently rented, `None` when not renting
    pub rented_car_id: Option<CarId>,
}

impl Customer {
    /// Create a Customer that is not renting anything
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rented_car_id: None,
        }
    }

    /// Check if this customer currently holds a car
    pub fn is_renting(&self) -> bool {
        self.rented_car_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_is_not_renting() {
        let customer = Customer::new(CustomerId::new(1), "Alice");
        assert!(!customer.is_renting());
        assert_eq!(customer.rented_car_id, None);
    }

    #[test]
    fn test_is_renting_follows_rented_car_id() {
        let mut customer = Customer::new(CustomerId::new(1), "Alice");
        customer.rented_car_id = Some(CarId::new(9));
        assert!(customer.is_renting());
    }
}
