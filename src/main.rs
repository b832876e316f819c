//! Check markdown headings against a required outline.
//!
//! Exits with 0 when the document satisfies the outline, 1 when it does not
//! (or the document is missing), and 2 on any other error.

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    match cli::Cli::parse().run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(2)
        }
    }
}
