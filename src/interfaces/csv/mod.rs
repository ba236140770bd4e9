pub mod customer_reader;
pub mod report_writer;
