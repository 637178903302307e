//! Resolve command producing the final build configuration.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::models::PaletteCatalog;
use crate::resolver::{resolve_themes, ResolveOptions, ThemeDefinition};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Resolve the theme configuration into the final build configuration
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to config file (discovered in the current directory if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Allow overrides to introduce roles the base palette does not define
    #[arg(long)]
    pub allow_new_keys: bool,
}

/// The resolved build configuration handed to the CSS pipeline.
#[derive(Serialize, Debug)]
struct ResolvedOutput {
    /// Pass-through source globs.
    content: Vec<String>,
    /// Pass-through plugin names.
    plugins: Vec<String>,
    /// Fully-resolved themes, in configuration order.
    themes: Vec<ThemeDefinition>,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config(self.config.as_deref())?;

        let catalog = PaletteCatalog::load()
            .map_err(|e| CliError::io(format!("Failed to load palette catalog: {e:#}")))?;

        let options = ResolveOptions {
            allow_new_keys: self.allow_new_keys || config.allow_new_keys,
        };

        let themes = resolve_themes(&config.themes, &catalog, &options)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let resolved = ResolvedOutput {
            content: config.content,
            plugins: config.plugins,
            themes,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&resolved)
        } else {
            serde_json::to_string(&resolved)
        }
        .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;

        match &self.output {
            Some(path) => {
                fs::write(path, json).map_err(|e| {
                    CliError::io(format!("Failed to write output file {}: {e}", path.display()))
                })?;
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
