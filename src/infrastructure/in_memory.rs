use crate::domain::customer::Customer;
use crate::domain::ids::CustomerId;
use crate::domain::ports::CustomerStore;
use crate::error::Result;
use std::collections::HashMap;

/// An in-memory store for customers.
///
/// Keeps insertion order alongside the map so `get_all` is stable, and
/// indexes card and account numbers so lookups do not scan the records.
#[derive(Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: HashMap<CustomerId, Customer>,
    order: Vec<CustomerId>,
    by_card: HashMap<String, CustomerId>,
    by_account: HashMap<String, CustomerId>,
}

impl InMemoryCustomerStore {
    /// Creates a new, empty in-memory customer store.
    pub fn new() -> Self {
        Self::default()
    }

    fn index(&mut self, id: CustomerId, customer: &Customer) {
        if let Some(card) = customer.card() {
            self.by_card.insert(card.card_number().to_string(), id);
        }
        if let Some(account) = customer.account() {
            self.by_account
                .insert(account.account_number().to_string(), id);
        }
    }

    fn unindex(&mut self, id: CustomerId, customer: &Customer) {
        if let Some(card) = customer.card()
            && self.by_card.get(card.card_number()) == Some(&id)
        {
            self.by_card.remove(card.card_number());
        }
        if let Some(account) = customer.account()
            && self.by_account.get(account.account_number()) == Some(&id)
        {
            self.by_account.remove(account.account_number());
        }
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn store(&mut self, id: CustomerId, customer: Customer) -> Result<()> {
        match self.customers.remove(&id) {
            Some(previous) => self.unindex(id, &previous),
            None => self.order.push(id),
        }
        self.index(id, &customer);
        self.customers.insert(id, customer);
        Ok(())
    }

    fn get(&self, id: CustomerId) -> Result<Option<Customer>> {
        Ok(self.customers.get(&id).cloned())
    }

    fn remove(&mut self, id: CustomerId) -> Result<Option<Customer>> {
        let removed = self.customers.remove(&id);
        if let Some(customer) = &removed {
            self.unindex(id, customer);
            self.order.retain(|other| *other != id);
        }
        Ok(removed)
    }

    fn get_all(&self) -> Result<Vec<(CustomerId, Customer)>> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.customers.get(id).map(|c| (*id, c.clone())))
            .collect())
    }

    fn find_by_card(&self, card_number: &str) -> Result<Option<CustomerId>> {
        Ok(self.by_card.get(card_number).copied())
    }

    fn find_by_account(&self, account_number: &str) -> Result<Option<CustomerId>> {
        Ok(self.by_account.get(account_number).copied())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.customers.len())
    }
}
