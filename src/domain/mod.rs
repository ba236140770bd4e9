//! Domain layer: the customer, card, account and address records and the
//! rules that tie them together.

pub mod account;
pub mod address;
pub mod card;
pub mod customer;
pub mod ids;
pub mod ports;
