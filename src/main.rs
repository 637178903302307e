//! Palettier - theme configuration resolver
//!
//! Resolves a declarative theme configuration file against the built-in
//! palette catalog and emits the fully-resolved build configuration for a
//! utility-CSS pipeline.

use clap::{Parser, Subcommand};
use palettier::cli::{ConfigArgs, InitArgs, PalettesArgs, ResolveArgs, ValidateArgs};
use std::process;
use tracing_subscriber::EnvFilter;

/// Palettier - theme configuration resolver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the theme configuration into the final build configuration
    Resolve(ResolveArgs),
    /// Validate a theme configuration file
    Validate(ValidateArgs),
    /// Inspect the built-in palette catalog
    Palettes(PalettesArgs),
    /// Display the loaded configuration
    Config(ConfigArgs),
    /// Write a starter configuration file
    Init(InitArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::Palettes(args) => args.execute(),
        Commands::Config(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(e.exit_code() as i32);
    }
}
