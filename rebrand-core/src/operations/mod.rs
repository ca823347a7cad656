//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each rebrand operation,
//! separated from CLI concerns like argument parsing and exit codes.

pub mod rebrand;

pub use rebrand::{rebrand_operation, rebrand_tree};
