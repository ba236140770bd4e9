use crate::error::{AtmError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a well-formed PIN.
pub const PIN_LENGTH: usize = 4;

/// A card PIN, kept as the digit text it was given so leading zeros survive.
///
/// `Debug` never prints the digits.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(String);

impl Pin {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for exactly four ASCII digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == PIN_LENGTH && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl From<&str> for Pin {
    fn from(digits: &str) -> Self {
        Self::new(digits)
    }
}

impl From<String> for Pin {
    fn from(digits: String) -> Self {
        Self(digits)
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// A payment card issued to a customer.
///
/// `customer_name` is a copy of the holder's name; nothing keeps it in sync
/// with the owning customer, see `Customer::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    card_number: String,
    customer_name: String,
    card_expiry: NaiveDate,
    pin: Pin,
}

impl Card {
    pub fn new(
        card_number: impl Into<String>,
        customer_name: impl Into<String>,
        card_expiry: NaiveDate,
        pin: impl Into<Pin>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            customer_name: customer_name.into(),
            card_expiry,
            pin: pin.into(),
        }
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    pub fn set_card_number(&mut self, card_number: impl Into<String>) {
        self.card_number = card_number.into();
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, customer_name: impl Into<String>) {
        self.customer_name = customer_name.into();
    }

    pub fn card_expiry(&self) -> NaiveDate {
        self.card_expiry
    }

    pub fn set_card_expiry(&mut self, card_expiry: NaiveDate) {
        self.card_expiry = card_expiry;
    }

    pub fn pin(&self) -> &Pin {
        &self.pin
    }

    pub fn set_pin(&mut self, pin: impl Into<Pin>) {
        self.pin = pin.into();
    }

    /// A card is usable through the last day of its expiry date.
    pub fn is_expired_on(&self, date: NaiveDate) -> bool {
        date > self.card_expiry
    }

    pub fn validate(&self) -> Result<()> {
        if self.card_number.trim().is_empty() {
            return Err(AtmError::EmptyField("card_number"));
        }
        if !self.pin.is_well_formed() {
            return Err(AtmError::InvalidPin);
        }
        Ok(())
    }
}
