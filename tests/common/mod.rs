use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` well-formed customers, each with its own card and account.
pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "name",
        "email",
        "phone",
        "street_address",
        "city",
        "state",
        "zipcode",
        "country",
        "status",
        "card_number",
        "card_expiry",
        "pin",
        "account_number",
        "available_balance",
        "total_balance",
    ])?;

    for i in 1..=rows {
        wtr.write_record(vec![
            format!("Customer {i}"),
            format!("customer{i}@example.com"),
            "555-0000".to_string(),
            "1 Main St".to_string(),
            "Springfield".to_string(),
            "IL".to_string(),
            "62701".to_string(),
            "US".to_string(),
            "active".to_string(),
            format!("4000{i:012}"),
            "2030-12-31".to_string(),
            format!("{:04}", i % 10000),
            format!("ACC{i}"),
            "1.0".to_string(),
            "2.0".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
