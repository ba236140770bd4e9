use crate::domain::customer::Customer;
use crate::error::{AtmError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

/// One line of the consistency report.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ReportRow {
    pub name: String,
    pub card_number: Option<String>,
    pub account_number: Option<String>,
    pub available: Option<String>,
    pub total: Option<String>,
    pub status: String,
    pub valid: bool,
    pub issue: String,
}

impl ReportRow {
    /// Row for a customer that was enrolled. With `as_of`, an expired card is
    /// reported as an issue.
    pub fn accepted(customer: &Customer, as_of: Option<NaiveDate>) -> Self {
        let expired = match (customer.card(), as_of) {
            (Some(card), Some(date)) => card.is_expired_on(date),
            _ => false,
        };
        let issue = if expired { "card expired" } else { "" };
        Self::build(customer, true, issue.to_string())
    }

    /// Row for a customer the directory refused.
    pub fn rejected(customer: &Customer, error: &AtmError) -> Self {
        Self::build(customer, false, error.to_string())
    }

    fn build(customer: &Customer, valid: bool, issue: String) -> Self {
        let account = customer.account();
        Self {
            name: customer.name().to_string(),
            card_number: customer.card().map(|c| c.card_number().to_string()),
            account_number: account.map(|a| a.account_number().to_string()),
            available: account.map(|a| a.available_balance().to_string()),
            total: account.map(|a| a.total_balance().to_string()),
            status: customer.status().to_string(),
            valid,
            issue,
        }
    }
}

/// Writes report rows as CSV, header first.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn write_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a ReportRow>) -> Result<()> {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
