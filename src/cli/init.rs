//! Init command writing a starter configuration file.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Write a starter configuration file
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to create the config file in (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> CliResult<()> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                CliError::io(format!("Failed to determine current directory: {e}"))
            })?,
        };

        if let Some(existing) = Config::discover(&dir) {
            return Err(CliError::validation(format!(
                "Config file already exists: {}",
                existing.display()
            )));
        }

        let path = dir.join("palettier.toml");
        Config::write_starter(&path).map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Created {}", path.display());
        Ok(())
    }
}
