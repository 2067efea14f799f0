//! Contacts - personal contact book

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = contact_book::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
