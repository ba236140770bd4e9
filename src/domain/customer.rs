use super::account::Account;
use super::address::Address;
use super::card::Card;
use super::ids::{AtmId, TransactionId};
use crate::error::{AtmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standing of a customer with the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum CustomerStatus {
    #[default]
    Active,
    Blocked,
    Banned,
    Compromised,
    Archived,
    Closed,
    Unknown,
}

impl CustomerStatus {
    /// Parse a status from text, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "blocked" => Some(Self::Blocked),
            "banned" => Some(Self::Banned),
            "compromised" => Some(Self::Compromised),
            "archived" => Some(Self::Archived),
            "closed" => Some(Self::Closed),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Banned => "banned",
            Self::Compromised => "compromised",
            Self::Archived => "archived",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A bank customer.
///
/// The customer owns its address, card and account outright. Card, account
/// and the ATM / transaction handles start out unset and are attached later
/// through their setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    email: String,
    phone: String,
    address: Address,
    status: CustomerStatus,
    card: Option<Card>,
    account: Option<Account>,
    atm: Option<AtmId>,
    transaction: Option<TransactionId>,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: Address,
        status: CustomerStatus,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address,
            status,
            card: None,
            account: None,
            atm: None,
            transaction: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the customer. The card's holder name is left as it was.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    pub fn set_status(&mut self, status: CustomerStatus) {
        self.status = status;
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    pub fn set_card(&mut self, card: Card) {
        self.card = Some(card);
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: Account) {
        self.account = Some(account);
    }

    pub fn atm(&self) -> Option<AtmId> {
        self.atm
    }

    pub fn set_atm(&mut self, atm: AtmId) {
        self.atm = Some(atm);
    }

    pub fn transaction(&self) -> Option<TransactionId> {
        self.transaction
    }

    pub fn set_transaction(&mut self, transaction: TransactionId) {
        self.transaction = Some(transaction);
    }

    /// Transactions are not supported; this always reports failure.
    pub fn make_transaction(&self) -> bool {
        false
    }

    /// Checks the customer together with the card and account it owns.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AtmError::EmptyField("name"));
        }
        if let Some(card) = &self.card {
            card.validate()?;
            if card.customer_name() != self.name {
                return Err(AtmError::CardHolderMismatch {
                    customer: self.name.clone(),
                    card_holder: card.customer_name().to_string(),
                });
            }
        }
        if let Some(account) = &self.account {
            account.validate()?;
        }
        Ok(())
    }
}
