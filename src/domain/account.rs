use crate::error::{AtmError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary value.
///
/// This is a wrapper around `rust_decimal::Decimal` so that balances cannot be
/// mixed up with other decimal quantities.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Decimal> for Balance {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A bank account held by a customer.
///
/// The available balance is fixed when the account is created; only the
/// total balance can be changed afterwards. `new` accepts any pair of
/// balances, `try_new` and `validate` check that available never exceeds
/// total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    account_number: String,
    total_balance: Balance,
    available_balance: Balance,
}

impl Account {
    pub fn new(
        account_number: impl Into<String>,
        available_balance: impl Into<Balance>,
        total_balance: impl Into<Balance>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            total_balance: total_balance.into(),
            available_balance: available_balance.into(),
        }
    }

    /// Creates an account, rejecting it if it breaks a balance rule.
    pub fn try_new(
        account_number: impl Into<String>,
        available_balance: impl Into<Balance>,
        total_balance: impl Into<Balance>,
    ) -> Result<Self> {
        let account = Self::new(account_number, available_balance, total_balance);
        account.validate()?;
        Ok(account)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn set_account_number(&mut self, account_number: impl Into<String>) {
        self.account_number = account_number.into();
    }

    pub fn total_balance(&self) -> Balance {
        self.total_balance
    }

    pub fn set_total_balance(&mut self, total_balance: impl Into<Balance>) {
        self.total_balance = total_balance.into();
    }

    pub fn available_balance(&self) -> Balance {
        self.available_balance
    }

    pub fn validate(&self) -> Result<()> {
        if self.account_number.trim().is_empty() {
            return Err(AtmError::EmptyField("account_number"));
        }
        if self.available_balance > self.total_balance {
            return Err(AtmError::AvailableExceedsTotal {
                available: self.available_balance,
                total: self.total_balance,
            });
        }
        Ok(())
    }
}
