use atm_model::application::directory::CustomerDirectory;
use atm_model::infrastructure::in_memory::InMemoryCustomerStore;
use atm_model::interfaces::csv::customer_reader::CustomerReader;
use atm_model::interfaces::csv::report_writer::{ReportRow, ReportWriter};
use chrono::NaiveDate;
use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input customers CSV file
    input: PathBuf,

    /// Report cards that have expired by this date (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Exit with an error if any row is rejected
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "atm_model=debug" } else { "atm_model=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut directory = CustomerDirectory::new(Box::new(InMemoryCustomerStore::new()));

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CustomerReader::new(file);

    let mut rows = Vec::new();
    let mut failures = 0usize;
    for (index, result) in reader.customers().enumerate() {
        match result {
            Ok(customer) => match directory.enroll(customer.clone()) {
                Ok(_) => rows.push(ReportRow::accepted(&customer, cli.as_of)),
                Err(e) => {
                    failures += 1;
                    rows.push(ReportRow::rejected(&customer, &e));
                }
            },
            Err(e) => {
                failures += 1;
                error!(row = index + 1, "Error reading customer: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_rows(&rows).into_diagnostic()?;
    writer.flush().into_diagnostic()?;

    info!(
        enrolled = directory.len().into_diagnostic()?,
        rejected = failures,
        "finished"
    );

    if cli.strict && failures > 0 {
        return Err(miette!("{} customer row(s) rejected", failures));
    }
    Ok(())
}
