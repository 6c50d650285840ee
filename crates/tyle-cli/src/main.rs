//! Tyle CLI - inspect the typography style catalog

use clap::Parser;
use tyle_cli::cli::Cli;

fn main() {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = tyle_cli::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
