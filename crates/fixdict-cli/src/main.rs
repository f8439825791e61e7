//! FixDict CLI
//!
//! Command-line interface for consolidating protocol dictionaries

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fixdict")]
#[command(about = "FixDict - Cross-version protocol dictionary consolidation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Consolidate a repository into the newest version's tables (JSON)
    Consolidate(commands::consolidate::ConsolidateArgs),
    /// Print the version catalog
    Catalog(commands::catalog::CatalogArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Consolidate(args) => commands::consolidate::execute(args),
        Commands::Catalog(args) => commands::catalog::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
