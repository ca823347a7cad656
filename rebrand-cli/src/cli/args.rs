use clap::Parser;
use rebrand_core::{DEFAULT_REPLACE, DEFAULT_SEARCH};
use std::path::PathBuf;

/// Rename a project identifier inside every .xaml and .cs file under a directory
#[derive(Parser, Debug)]
#[command(name = "rebrand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to process [default: two levels above the directory holding this executable]
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Exact, case-sensitive text to replace
    #[arg(long, default_value = DEFAULT_SEARCH)]
    pub search: String,

    /// Text written over every occurrence of the search text
    #[arg(long, default_value = DEFAULT_REPLACE)]
    pub replace: String,
}
