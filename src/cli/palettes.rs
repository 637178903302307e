//! Inspection commands for the built-in palette catalog.

use crate::cli::common::{CliError, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::models::PaletteCatalog;
use clap::{Args, Subcommand};

/// Inspect the built-in palette catalog
#[derive(Args, Debug)]
pub struct PalettesArgs {
    #[command(subcommand)]
    command: PalettesCommand,
}

#[derive(Subcommand, Debug)]
enum PalettesCommand {
    /// List all built-in palette names
    List(PalettesListArgs),
    /// Display a single palette
    Show(PalettesShowArgs),
}

/// List all built-in palette names
#[derive(Args, Debug)]
pub struct PalettesListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Display a single palette
#[derive(Args, Debug)]
pub struct PalettesShowArgs {
    /// Palette name (e.g. "emerald")
    #[arg(value_name = "NAME")]
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl PalettesArgs {
    /// Execute palettes subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            PalettesCommand::List(args) => args.execute(),
            PalettesCommand::Show(args) => args.execute(),
        }
    }
}

impl PalettesListArgs {
    fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        if self.json {
            let names: Vec<&str> = catalog.names().collect();
            let json = serde_json::to_string(&names)
                .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;
            println!("{json}");
        } else {
            for name in catalog.names() {
                println!("{name}");
            }
        }

        Ok(())
    }
}

impl PalettesShowArgs {
    fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;

        let palette = catalog.get(&self.name).ok_or_else(|| {
            CliError::validation(format!(
                "Unknown palette '{}'. Run '{APP_BINARY_NAME} palettes list' to see available palettes",
                self.name
            ))
        })?;

        if self.json {
            let json = serde_json::to_string(palette)
                .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;
            println!("{json}");
        } else {
            println!("{}", palette.name);
            for (key, value) in &palette.colors {
                println!("  {key:<12} {value}");
            }
        }

        Ok(())
    }
}

fn load_catalog() -> CliResult<PaletteCatalog> {
    PaletteCatalog::load()
        .map_err(|e| CliError::io(format!("Failed to load palette catalog: {e:#}")))
}
