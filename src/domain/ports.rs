use super::customer::Customer;
use super::ids::CustomerId;
use crate::error::Result;

/// Storage for enrolled customers.
///
/// Implementations only keep records and their lookup indexes; ownership
/// rules are enforced by `CustomerDirectory`.
pub trait CustomerStore {
    fn store(&mut self, id: CustomerId, customer: Customer) -> Result<()>;
    fn get(&self, id: CustomerId) -> Result<Option<Customer>>;
    fn remove(&mut self, id: CustomerId) -> Result<Option<Customer>>;
    /// All stored customers, in the order they were first stored.
    fn get_all(&self) -> Result<Vec<(CustomerId, Customer)>>;
    /// Id of the customer holding the card with this number.
    fn find_by_card(&self, card_number: &str) -> Result<Option<CustomerId>>;
    /// Id of the customer holding the account with this number.
    fn find_by_account(&self, account_number: &str) -> Result<Option<CustomerId>>;
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

pub type CustomerStoreBox = Box<dyn CustomerStore>;
