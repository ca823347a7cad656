use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Identifier being renamed away from
pub const DEFAULT_SEARCH: &str = "SerialPlotDN_WPF";

/// Identifier written in its place
pub const DEFAULT_REPLACE: &str = "PowerScope";

/// File name suffixes that mark a file as a candidate (case-sensitive)
pub const QUALIFYING_EXTENSIONS: &[&str] = &[".xaml", ".cs"];

/// Problems with a run configuration, reported before anything is touched
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search string must not be empty")]
    EmptySearch,
    #[error("root directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
}

/// Immutable settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebrandConfig {
    /// Directory the walk starts from
    pub root: PathBuf,
    /// Exact text to look for
    pub search: String,
    /// Text written over every occurrence of `search`
    pub replace: String,
    /// Suffixes a file name must end with to be processed
    pub extensions: Vec<String>,
}

impl RebrandConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            search: search.into(),
            replace: replace.into(),
            extensions: QUALIFYING_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }

    /// Config with the built-in search and replacement terms
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self::new(root, DEFAULT_SEARCH, DEFAULT_REPLACE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.is_empty() {
            return Err(ConfigError::EmptySearch);
        }
        if !self.root.exists() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::RootNotDirectory(self.root.clone()));
        }
        Ok(())
    }
}

/// Two directories above the one containing `location`.
///
/// For a binary at `<project>/target/release/rebrand` this is `<project>`.
pub fn default_root_for(location: &Path) -> Option<PathBuf> {
    location
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}

/// Default root derived from the running executable
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    default_root_for(&exe).with_context(|| {
        format!(
            "Executable path has no directory two levels up: {}",
            exe.display()
        )
    })
}
