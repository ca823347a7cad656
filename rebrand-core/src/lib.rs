#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod scanner;

pub use apply::{process_file, write_atomic, FileOutcome};
pub use config::{
    default_root, default_root_for, ConfigError, RebrandConfig, DEFAULT_REPLACE, DEFAULT_SEARCH,
    QUALIFYING_EXTENSIONS,
};
pub use operations::{rebrand_operation, rebrand_tree};
pub use output::{format_outcome_line, RunSummary};
pub use pattern::{replace_literal, Replacement};
pub use scanner::{is_candidate, read_file_content, walk_candidates};
