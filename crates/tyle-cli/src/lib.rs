//! Command-line interface for the Tyle style catalog
//!
//! Argument definitions, subcommands and output formatting behind the
//! `tyle` binary. [`run`] dispatches a parsed [`cli::Cli`].

pub mod cli;
pub mod commands;
pub mod output;

use cli::{Cli, Commands};
use tyle_core::error::Result;

/// Run the subcommand selected on the command line
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Catalog(args) => commands::catalog::run(args),
    }
}
