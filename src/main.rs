//! Parse CSV from stdin and print the records as nested list literals.
//!
//! Usage:
//!   csvfsm < input.csv
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=csvfsm=debug`).

use csvfsm::{render, CsvReader};
use std::io;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let document = match CsvReader::from_reader(io::stdin().lock()).read_document() {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    info!(records = document.len(), "parsed input");
    println!("{}", render::to_list_literal(&document));
}
