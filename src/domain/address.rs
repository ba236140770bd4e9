use serde::{Deserialize, Serialize};

/// A postal address. Fields are independent; none is checked against another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street_address: String,
    city: String,
    state: String,
    zipcode: String,
    country: String,
}

impl Address {
    pub fn new(
        street_address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zipcode: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street_address: street_address.into(),
            city: city.into(),
            state: state.into(),
            zipcode: zipcode.into(),
            country: country.into(),
        }
    }

    pub fn street_address(&self) -> &str {
        &self.street_address
    }

    pub fn set_street_address(&mut self, street_address: impl Into<String>) {
        self.street_address = street_address.into();
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn set_zipcode(&mut self, zipcode: impl Into<String>) {
        self.zipcode = zipcode.into();
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address::new("1 Main St", "Springfield", "IL", "62701", "US")
    }

    #[test]
    fn test_new_address_keeps_fields() {
        let address = sample();
        assert_eq!(address.street_address(), "1 Main St");
        assert_eq!(address.city(), "Springfield");
        assert_eq!(address.state(), "IL");
        assert_eq!(address.zipcode(), "62701");
        assert_eq!(address.country(), "US");
    }

    #[test]
    fn test_setters_overwrite_single_field() {
        let mut address = sample();
        address.set_street_address("9 Elm Rd");
        address.set_city("Shelbyville");
        address.set_state("KY");
        address.set_zipcode("40065");
        address.set_country("USA");

        assert_eq!(address.street_address(), "9 Elm Rd");
        assert_eq!(address.city(), "Shelbyville");
        assert_eq!(address.state(), "KY");
        assert_eq!(address.zipcode(), "40065");
        assert_eq!(address.country(), "USA");
    }

    #[test]
    fn test_setters_accept_empty_text() {
        let mut address = sample();
        address.set_zipcode("");
        assert_eq!(address.zipcode(), "");
        assert_eq!(address.city(), "Springfield");
    }
}
