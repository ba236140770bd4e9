use crate::domain::customer::Customer;
use crate::domain::ids::CustomerId;
use crate::domain::ports::CustomerStoreBox;
use crate::error::{AtmError, Result};
use tracing::{debug, warn};

/// The registry of enrolled customers.
///
/// `CustomerDirectory` owns the storage backend and guarantees that every
/// stored customer passes validation and that no card number or account
/// number is owned by more than one customer.
pub struct CustomerDirectory {
    store: CustomerStoreBox,
}

impl CustomerDirectory {
    /// Creates a new `CustomerDirectory` on top of `store`.
    pub fn new(store: CustomerStoreBox) -> Self {
        Self { store }
    }

    /// Validates and stores a new customer, returning its id.
    pub fn enroll(&mut self, customer: Customer) -> Result<CustomerId> {
        if let Err(e) = self.check(None, &customer) {
            warn!(customer = customer.name(), error = %e, "enrolment rejected");
            return Err(e);
        }

        let id = CustomerId::new();
        debug!(%id, customer = customer.name(), "customer enrolled");
        self.store.store(id, customer)?;
        Ok(id)
    }

    /// Replaces the record of an enrolled customer.
    pub fn update(&mut self, id: CustomerId, customer: Customer) -> Result<()> {
        if self.store.get(id)?.is_none() {
            return Err(AtmError::NotFound(id));
        }
        if let Err(e) = self.check(Some(id), &customer) {
            warn!(%id, error = %e, "update rejected");
            return Err(e);
        }

        debug!(%id, "customer updated");
        self.store.store(id, customer)
    }

    /// Drops an enrolled customer, freeing its card and account numbers.
    pub fn remove(&mut self, id: CustomerId) -> Result<Customer> {
        let removed = self.store.remove(id)?.ok_or(AtmError::NotFound(id))?;
        debug!(%id, "customer removed");
        Ok(removed)
    }

    /// Looks up a customer by id.
    pub fn get(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.store.get(id)
    }

    /// Finds the customer holding the card with `card_number`.
    pub fn find_by_card(&self, card_number: &str) -> Result<Option<(CustomerId, Customer)>> {
        match self.store.find_by_card(card_number)? {
            Some(id) => Ok(self.store.get(id)?.map(|customer| (id, customer))),
            None => Ok(None),
        }
    }

    /// Finds the customer holding the account with `account_number`.
    pub fn find_by_account(
        &self,
        account_number: &str,
    ) -> Result<Option<(CustomerId, Customer)>> {
        match self.store.find_by_account(account_number)? {
            Some(id) => Ok(self.store.get(id)?.map(|customer| (id, customer))),
            None => Ok(None),
        }
    }

    /// All enrolled customers in enrolment order.
    pub fn customers(&self) -> Result<Vec<(CustomerId, Customer)>> {
        self.store.get_all()
    }

    /// Number of enrolled customers.
    pub fn len(&self) -> Result<usize> {
        self.store.len()
    }

    /// True when nobody is enrolled.
    pub fn is_empty(&self) -> Result<bool> {
        self.store.is_empty()
    }

    fn check(&self, id: Option<CustomerId>, customer: &Customer) -> Result<()> {
        customer.validate()?;

        if let Some(card) = customer.card()
            && let Some(owner) = self.store.find_by_card(card.card_number())?
            && Some(owner) != id
        {
            return Err(AtmError::DuplicateCard(card.card_number().to_string()));
        }
        if let Some(account) = customer.account()
            && let Some(owner) = self.store.find_by_account(account.account_number())?
            && Some(owner) != id
        {
            return Err(AtmError::DuplicateAccount(
                account.account_number().to_string(),
            ));
        }
        Ok(())
    }
}
