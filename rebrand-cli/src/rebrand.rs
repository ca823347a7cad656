use anyhow::Result;
use rebrand_core::{default_root, rebrand_operation, RebrandConfig};

use crate::cli::Cli;

/// Build the run configuration from parsed arguments
pub fn config_from_cli(cli: Cli) -> Result<RebrandConfig> {
    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    Ok(RebrandConfig::new(root, cli.search, cli.replace))
}

pub fn handle_rebrand(config: &RebrandConfig) -> Result<()> {
    let summary = rebrand_operation(config)?;
    eprintln!("{}", summary.format_summary());
    Ok(())
}
