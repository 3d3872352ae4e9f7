use crate::domain::model::{Customer, Supplier};

/// (Country, City) 組合鍵，大小寫敏感的完全比對
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey<'a> {
    pub country: &'a str,
    pub city: &'a str,
}

impl<'a> LocationKey<'a> {
    pub fn new(country: &'a str, city: &'a str) -> Self {
        Self { country, city }
    }

    pub fn of_customer(customer: &'a Customer) -> Self {
        Self::new(&customer.country, &customer.city)
    }

    pub fn of_supplier(supplier: &'a Supplier) -> Self {
        Self::new(&supplier.country, &supplier.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_key_is_case_sensitive() {
        assert_eq!(LocationKey::new("UK", "London"), LocationKey::new("UK", "London"));
        assert_ne!(LocationKey::new("UK", "London"), LocationKey::new("UK", "london"));
        assert_ne!(LocationKey::new("UK", "London"), LocationKey::new("Uk", "London"));
    }
}
