//! Configuration inspection CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::cli::generate::load_config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display the effective configuration
    Show(ConfigShowArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to a TOML configuration file (built-in defaults if omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let output = if self.json {
            serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
        } else {
            config
                .to_toml()
                .map_err(|e| CliError::io(format!("{e:#}")))?
        };

        println!("{output}");
        Ok(())
    }
}
