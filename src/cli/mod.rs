//! CLI command handlers.
//!
//! Each subcommand owns its clap arguments and an `execute` method returning
//! a [`CliResult`].

pub mod common;
pub mod config;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
