//! Tokenize a `;`-separated file (or stdin) line by line
//!
//! Usage:
//!   cargo run --example tokenize_lines -- data.csv
//!   printf 'a;"b;c"\n' | cargo run --example tokenize_lines
//!
//! Set `RUST_LOG=csvline=debug` to see rows ending in unterminated quotes.

use csvline::CsvReader;
use std::error::Error;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

fn print_rows<R: BufRead>(mut reader: CsvReader<R>) -> Result<(), Box<dyn Error>> {
    for row_result in reader.rows() {
        let row = row_result?;
        println!("{:>9}: {:?}", describe(&row), row);
    }
    println!("Total rows read: {}", reader.row_count());
    Ok(())
}

fn describe(row: &[String]) -> String {
    format!("{} field{}", row.len(), if row.len() == 1 { "" } else { "s" })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(path) => print_rows(CsvReader::open(path)?),
        None => print_rows(CsvReader::from_reader(io::stdin().lock())),
    }
}
