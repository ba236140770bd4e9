use crate::domain::account::Balance;
use crate::domain::ids::CustomerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Available balance {available} exceeds total balance {total}")]
    AvailableExceedsTotal { available: Balance, total: Balance },
    #[error("PIN must be a 4-digit code")]
    InvalidPin,
    #[error("Field '{0}' must not be blank")]
    EmptyField(&'static str),
    #[error("Card holder '{card_holder}' does not match customer '{customer}'")]
    CardHolderMismatch {
        customer: String,
        card_holder: String,
    },
    #[error("Card {0} is already owned by another customer")]
    DuplicateCard(String),
    #[error("Account {0} is already owned by another customer")]
    DuplicateAccount(String),
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, AtmError>;
