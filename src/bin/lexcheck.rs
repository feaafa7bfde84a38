//! Command-line interface for lexcheck
//! Scans a source file, validates the token stream and writes the token listing.
//!
//! Usage:
//!   lexcheck `<input>` `<output>`
//!
//! Writes the newline separated token texts to `<output>` when the stream is well formed,
//! `ERROR` otherwise. Exit status: 0 accepted, 1 rejected, 2 fault.

use clap::{Arg, Command};
use lexcheck::lex::config::load_defaults;
use lexcheck::lex::driver;
use lexcheck::lex::logging;
use std::path::PathBuf;
use std::process;
use tracing::error;

fn main() {
    let matches = Command::new("lexcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validates a token stream and writes its canonical listing")
        .arg(
            Arg::new("input")
                .help("Path to the source file to scan")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path of the listing to write (overwritten)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .index(2),
        )
        .get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is a required argument");
    let output = matches
        .get_one::<PathBuf>("output")
        .expect("output is a required argument");

    let config = match load_defaults() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(2);
        }
    };
    logging::init(&config.logging);

    match driver::run(input, output, &config) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
