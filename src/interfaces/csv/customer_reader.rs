use crate::domain::account::Account;
use crate::domain::address::Address;
use crate::domain::card::Card;
use crate::domain::customer::{Customer, CustomerStatus};
use crate::error::{AtmError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One flat CSV row describing a customer with an optional card and account.
///
/// The card columns and the account columns are all-or-nothing: either every
/// column of the group is filled in or every one is empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CustomerRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub country: String,
    pub status: Option<String>,
    pub card_number: Option<String>,
    pub card_expiry: Option<NaiveDate>,
    pub pin: Option<String>,
    pub account_number: Option<String>,
    pub available_balance: Option<Decimal>,
    pub total_balance: Option<Decimal>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = AtmError;

    fn try_from(record: CustomerRecord) -> Result<Self> {
        let status = match record.status.as_deref() {
            None => CustomerStatus::default(),
            Some(text) => CustomerStatus::parse(text)
                .ok_or_else(|| AtmError::InvalidRecord(format!("unknown status '{text}'")))?,
        };

        let address = Address::new(
            record.street_address,
            record.city,
            record.state,
            record.zipcode,
            record.country,
        );
        let mut customer = Customer::new(
            record.name.clone(),
            record.email,
            record.phone,
            address,
            status,
        );

        match (record.card_number, record.card_expiry, record.pin) {
            (None, None, None) => {}
            (Some(number), Some(expiry), Some(pin)) => {
                customer.set_card(Card::new(number, record.name, expiry, pin));
            }
            _ => {
                return Err(AtmError::InvalidRecord(
                    "card_number, card_expiry and pin must be given together".to_string(),
                ));
            }
        }

        match (
            record.account_number,
            record.available_balance,
            record.total_balance,
        ) {
            (None, None, None) => {}
            (Some(number), Some(available), Some(total)) => {
                customer.set_account(Account::new(number, available, total));
            }
            _ => {
                return Err(AtmError::InvalidRecord(
                    "account_number, available_balance and total_balance must be given together"
                        .to_string(),
                ));
            }
        }

        Ok(customer)
    }
}

/// Reads customers from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// and yields one `Result<Customer>` per row.
pub struct CustomerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CustomerReader<R> {
    /// Creates a new `CustomerReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts rows.
    pub fn customers(self) -> impl Iterator<Item = Result<Customer>> {
        self.reader
            .into_deserialize::<CustomerRecord>()
            .map(|result| result.map_err(AtmError::from).and_then(Customer::try_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use rust_decimal_macros::dec;

    const HEADER: &str = "name, email, phone, street_address, city, state, zipcode, country, status, card_number, card_expiry, pin, account_number, available_balance, total_balance";

    fn read(rows: &str) -> Vec<Result<Customer>> {
        let data = format!("{HEADER}\n{rows}");
        CustomerReader::new(data.as_bytes()).customers().collect()
    }

    #[test]
    fn test_reader_full_row() {
        let results = read(
            "Jane Doe, jane@example.com, 555-1000, 1 Main St, Springfield, IL, 62701, US, active, 4000123412341234, 2028-06-30, 1234, 12345, 100.0, 150.0",
        );

        assert_eq!(results.len(), 1);
        let customer = results[0].as_ref().unwrap();
        assert_eq!(customer.name(), "Jane Doe");
        assert_eq!(customer.address().city(), "Springfield");
        assert_eq!(customer.status(), CustomerStatus::Active);

        let card = customer.card().unwrap();
        assert_eq!(card.customer_name(), "Jane Doe");
        assert_eq!(card.pin().as_str(), "1234");
        assert_eq!(
            card.card_expiry(),
            NaiveDate::from_ymd_opt(2028, 6, 30).unwrap()
        );

        let account = customer.account().unwrap();
        assert_eq!(account.account_number(), "12345");
        assert_eq!(account.available_balance(), Balance::new(dec!(100.0)));
        assert_eq!(account.total_balance(), Balance::new(dec!(150.0)));
    }

    #[test]
    fn test_reader_keeps_pin_digits() {
        let results = read(concat!(
            "Ann Poe, ann@example.com, 555-1, 1 Main St, Springfield, IL, 62701, US, active, 7000, 2028-06-30, 99999, , , \n",
            "Bob Poe, bob@example.com, 555-2, 1 Main St, Springfield, IL, 62701, US, active, 8000, 2028-06-30, 7, , , \n",
            "Cat Poe, cat@example.com, 555-3, 1 Main St, Springfield, IL, 62701, US, active, 9000, 2028-06-30, 0042, , , ",
        ));

        let pins: Vec<&str> = results
            .iter()
            .map(|r| r.as_ref().unwrap().card().unwrap().pin().as_str())
            .collect();
        assert_eq!(pins, vec!["99999", "7", "0042"]);

        assert!(matches!(results[0].as_ref().unwrap().validate(), Err(AtmError::InvalidPin)));
        assert!(matches!(results[1].as_ref().unwrap().validate(), Err(AtmError::InvalidPin)));
        assert!(results[2].as_ref().unwrap().validate().is_ok());
    }

    #[test]
    fn test_reader_without_card_or_account() {
        let results = read("John Roe, john@example.com, 555-2000, 2 Oak Ave, Ogdenville, IL, 62702, US, , , , , , , ");

        let customer = results[0].as_ref().unwrap();
        assert_eq!(customer.status(), CustomerStatus::Active);
        assert!(customer.card().is_none());
        assert!(customer.account().is_none());
    }

    #[test]
    fn test_reader_incomplete_card_group() {
        let results = read("John Roe, john@example.com, 555-2000, 2 Oak Ave, Ogdenville, IL, 62702, US, active, 4000, , 1234, , , ");
        assert!(matches!(results[0], Err(AtmError::InvalidRecord(_))));
    }

    #[test]
    fn test_reader_unknown_status() {
        let results = read("John Roe, john@example.com, 555-2000, 2 Oak Ave, Ogdenville, IL, 62702, US, platinum, , , , , , ");
        assert!(matches!(results[0], Err(AtmError::InvalidRecord(_))));
    }

    #[test]
    fn test_reader_malformed_line() {
        let results = read("Jane Doe, jane@example.com, 555-1000, 1 Main St, Springfield, IL, 62701, US, active, 4000, not-a-date, 1234, , , ");
        assert!(matches!(results[0], Err(AtmError::Csv(_))));
    }

    #[test]
    fn test_reader_keeps_inconsistent_balances() {
        // Reading does not validate; the directory does.
        let results = read("Jane Doe, jane@example.com, 555-1000, 1 Main St, Springfield, IL, 62701, US, active, , , , 12345, 500.0, 150.0");
        let customer = results[0].as_ref().unwrap();
        assert!(matches!(
            customer.validate(),
            Err(AtmError::AvailableExceedsTotal { .. })
        ));
    }
}
