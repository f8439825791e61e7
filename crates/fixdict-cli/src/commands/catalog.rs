//! Catalog command
//!
//! Usage: fixdict catalog [--config FILE]

use clap::Args;
use fixdict_core::{ConsolidationConfig, ExError};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// TOML configuration file with a custom catalog
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Print the version catalog, oldest first
pub fn execute(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => fixdict_store::load_config(path)?,
        None => ConsolidationConfig::default(),
    };
    let catalog = config.catalog().map_err(ExError::from)?;

    for ordinal in catalog.ordinals() {
        let Some(info) = catalog.info(ordinal) else {
            continue;
        };
        let target = catalog.diff_target(ordinal);
        if target != ordinal {
            println!(
                "{}\t{}\t{}\t{}\t(diffs as {})",
                ordinal.index(),
                info.label,
                info.suffix,
                info.max_tag,
                catalog.label(target)
            );
        } else {
            println!(
                "{}\t{}\t{}\t{}",
                ordinal.index(),
                info.label,
                info.suffix,
                info.max_tag
            );
        }
    }

    Ok(())
}
