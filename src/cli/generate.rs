//! Generate command for the behaviors devicetree include.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::firmware::DtsiGenerator;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Generate the capslock behaviors devicetree include
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Path to a TOML configuration file (built-in defaults if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let generator = DtsiGenerator::new(&config)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let document = generator
            .generate_document()
            .map_err(|e| CliError::validation(format!("Failed to generate behaviors: {e:#}")))?;

        match &self.output {
            Some(path) => {
                atomic_write(path, &document)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("✓ Generated {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(document.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| CliError::io(format!("Failed to write to stdout: {e}")))?;
            }
        }

        Ok(())
    }
}

/// Loads the configuration, distinguishing a missing file from an invalid one.
pub(crate) fn load_config(path: Option<&Path>) -> CliResult<Config> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(CliError::io(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        debug!("Loading config from {}", path.display());
    }

    Config::load(path).map_err(|e| CliError::validation(format!("Invalid config: {e:#}")))
}

/// Writes `content` to a temporary sibling file, then renames it over `path`.
///
/// The target is never left partially written.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

/// `behaviors.dtsi` -> `behaviors.dtsi.tmp`
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        anyhow::bail!("Output path has no file name: {}", path.display());
    };
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
