use crate::apply::process_file;
use crate::config::RebrandConfig;
use crate::output::{format_outcome_line, RunSummary};
use crate::scanner::walk_candidates;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Walk the configured tree and rewrite every candidate file that contains
/// the search string, writing one progress line per skipped or modified file
/// to `out` as soon as that file is done.
///
/// Files are processed one at a time. The first fatal error stops the run;
/// files rewritten before it stay rewritten.
pub fn rebrand_tree<W: Write>(config: &RebrandConfig, out: &mut W) -> Result<RunSummary> {
    config.validate()?;

    let mut summary = RunSummary::default();

    for candidate in walk_candidates(config) {
        let path = candidate?;
        let outcome = process_file(&path, config)?;

        if let Some(line) = format_outcome_line(&outcome) {
            writeln!(out, "{line}").context("Failed to write progress output")?;
            out.flush().context("Failed to write progress output")?;
        }

        summary.record(&outcome);
    }

    Ok(summary)
}

/// High-level rebrand operation - equivalent to running `rebrand`
pub fn rebrand_operation(config: &RebrandConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    rebrand_tree(config, &mut out)
}
