//! Subcommand implementations

pub mod catalog;
pub mod info;
pub mod resolve;
