//! Stowage - fleet load accounting
//!
//! Tracks cargo loaded onto capacity-capped carriers across named fleets.

use clap::Parser;
use stowage_cli::cli::Cli;
use stowage_cli::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
