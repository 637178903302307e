//! Validation command for theme configuration files.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::models::PaletteCatalog;
use crate::resolver::resolve_themes;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a theme configuration file
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to config file (discovered in the current directory if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validation check status per area.
#[derive(Serialize, Debug)]
struct ValidationChecks {
    /// Config file readable and well-formed.
    config: String,
    /// Theme entries resolve against the catalog.
    themes: String,
}

impl ValidationChecks {
    fn all_passed() -> Self {
        Self {
            config: "passed".to_string(),
            themes: "passed".to_string(),
        }
    }
}

/// A single validation finding.
#[derive(Serialize, Debug)]
struct ValidationMessage {
    severity: String,
    message: String,
}

/// Full validation response.
#[derive(Serialize, Debug)]
struct ValidationResponse {
    valid: bool,
    checks: ValidationChecks,
    messages: Vec<ValidationMessage>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let mut checks = ValidationChecks::all_passed();
        let mut messages = Vec::new();

        let config = match load_config(self.config.as_deref()) {
            Ok(config) => Some(config),
            Err(e) => {
                checks.config = "failed".to_string();
                checks.themes = "skipped".to_string();
                messages.push(ValidationMessage {
                    severity: "error".to_string(),
                    message: e.to_string(),
                });
                None
            }
        };

        if let Some(config) = &config {
            let catalog = PaletteCatalog::load()
                .map_err(|e| CliError::io(format!("Failed to load palette catalog: {e:#}")))?;

            if config.themes.is_empty() {
                messages.push(ValidationMessage {
                    severity: "warning".to_string(),
                    message: "No themes defined; the consuming UI will have nothing to select"
                        .to_string(),
                });
            }

            if let Err(e) = resolve_themes(&config.themes, &catalog, &config.resolve_options()) {
                checks.themes = "failed".to_string();
                messages.push(ValidationMessage {
                    severity: "error".to_string(),
                    message: e.to_string(),
                });
            }
        }

        let valid = messages.iter().all(|m| m.severity != "error");
        let response = ValidationResponse {
            valid,
            checks,
            messages,
        };

        if self.json {
            let json = serde_json::to_string(&response)
                .map_err(|e| CliError::io(format!("Failed to serialize output: {e}")))?;
            println!("{json}");
        } else {
            print_human(&response);
        }

        if valid {
            Ok(())
        } else {
            Err(CliError::validation("Configuration is invalid"))
        }
    }
}

fn print_human(response: &ValidationResponse) {
    println!("config: {}", response.checks.config);
    println!("themes: {}", response.checks.themes);
    for message in &response.messages {
        println!("{}: {}", message.severity, message.message);
    }
    println!();
    if response.valid {
        println!("Configuration is valid");
    } else {
        println!("Configuration is invalid");
    }
}
