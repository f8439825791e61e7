//! Consolidate command
//!
//! Usage: fixdict consolidate <REPO> [--overrides DIR] [--config FILE]
//!        [--max-common-prefix N] [--output FILE] [--json-logs]

use clap::Args;
use fixdict_core::logging_facility::{init, Profile};
use fixdict_core::{ConsolidationConfig, Consolidator, DictError, ExError, OverrideSet};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConsolidateArgs {
    /// Repository directory with one sub-directory per protocol version
    pub repo: PathBuf,

    /// Directory holding override files
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prefix length for similar enum names (overrides the config file)
    #[arg(long)]
    pub max_common_prefix: Option<usize>,

    /// Write JSON here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Execute consolidate command
pub fn execute(args: ConsolidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    init(if args.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let mut config = match &args.config {
        Some(path) => fixdict_store::load_config(path)?,
        None => ConsolidationConfig::default(),
    };
    if let Some(max) = args.max_common_prefix {
        config.max_common_prefix = max;
        config.validate().map_err(ExError::from)?;
    }

    let catalog = config.catalog().map_err(ExError::from)?;
    let dict = fixdict_store::load_repository(&args.repo, &catalog)?;
    let overrides = match &args.overrides {
        Some(dir) => fixdict_store::load_overrides(dir)?,
        None => OverrideSet::default(),
    };

    let result = Consolidator::new(config)
        .consolidate(dict, &overrides)
        .map_err(ExError::from)?;

    let json = serde_json::to_string_pretty(&result.output())
        .map_err(|e| ExError::from(DictError::from(e)).with_op("write_output"))?;
    match &args.output {
        Some(path) => std::fs::write(path, json + "\n")?,
        None => println!("{}", json),
    }

    eprintln!(
        "Consolidated {} versions: {} fields, {} messages, {} components, {} warnings",
        result.catalog().len(),
        result.fields().len(),
        result.messages().len(),
        result.components().len(),
        result.report().warnings.len()
    );

    Ok(())
}
