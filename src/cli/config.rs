//! Configuration display CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
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
    /// Display the loaded configuration
    Show(ConfigShowArgs),
}

/// Display the loaded configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to config file (discovered in the current directory if omitted)
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

        if self.json {
            let json = serde_json::to_string(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("content:");
        for glob in &config.content {
            println!("  {glob}");
        }
        println!("plugins:");
        for plugin in &config.plugins {
            println!("  {plugin}");
        }
        println!("themes:");
        for spec in &config.themes {
            match spec {
                crate::resolver::ThemeSpec::Derived {
                    name,
                    base,
                    overrides,
                } => println!("  {name} (from {base}, {} overrides)", overrides.len()),
                crate::resolver::ThemeSpec::Named { name } => println!("  {name}"),
            }
        }
        println!("allow_new_keys: {}", config.allow_new_keys);

        Ok(())
    }
}
