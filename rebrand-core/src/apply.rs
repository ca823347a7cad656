use crate::config::RebrandConfig;
use crate::pattern::replace_literal;
use crate::scanner::read_file_content;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What happened to a single candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one occurrence was replaced and the file was rewritten
    Replaced { path: PathBuf, replacements: usize },
    /// The file is not valid UTF-8 and was left alone
    Skipped { path: PathBuf },
    /// The search string does not occur in the file
    Unchanged { path: PathBuf },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Replaced { path, .. } | Self::Skipped { path } | Self::Unchanged { path } => {
                path.as_path()
            },
        }
    }
}

/// Read, substitute and (if anything matched) rewrite one candidate file.
///
/// A file that fails to decode as UTF-8 is reported as `Skipped` and its bytes
/// are never touched. Every other I/O failure is returned as an error.
pub fn process_file(path: &Path, config: &RebrandConfig) -> Result<FileOutcome> {
    let bytes = read_file_content(path)?;

    let Ok(content) = String::from_utf8(bytes) else {
        return Ok(FileOutcome::Skipped {
            path: path.to_path_buf(),
        });
    };

    let Some(replacement) = replace_literal(&content, &config.search, &config.replace) else {
        return Ok(FileOutcome::Unchanged {
            path: path.to_path_buf(),
        });
    };

    write_atomic(path, &replacement.content)?;

    Ok(FileOutcome::Replaced {
        path: path.to_path_buf(),
        replacements: replacement.count,
    })
}

/// Replace the contents of `path` with `content` without ever leaving a
/// partially written file behind.
///
/// The data goes to a temp file in the same directory, is synced, receives the
/// original permissions and is then renamed over the original. A symlink is
/// resolved first so the link itself survives and its target is updated.
///
/// The rename gives the file a new inode owned by the current user, so hard
/// links to it keep the old content. When the directory does not allow a temp
/// file to be created, the file is truncated and rewritten in place instead.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = resolve_symlink(path)?;

    let original_permissions = fs::metadata(&target)
        .with_context(|| format!("Failed to read metadata for {}", target.display()))?
        .permissions();

    let temp_path = temp_path_for(&target);

    {
        let mut temp_file = match File::create(&temp_path) {
            Ok(file) => file,
            // Writable file in a read-only directory
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                return write_in_place(&target, content);
            },
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create {}", temp_path.display()));
            },
        };
        temp_file
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        temp_file.sync_all()?;
    }

    if let Err(err) = finish_atomic_write(&temp_path, &target, original_permissions) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

fn finish_atomic_write(
    temp_path: &Path,
    target: &Path,
    permissions: fs::Permissions,
) -> Result<()> {
    fs::set_permissions(temp_path, permissions)
        .with_context(|| format!("Failed to set permissions on {}", temp_path.display()))?;

    fs::rename(temp_path, target)
        .with_context(|| format!("Failed to atomically replace {}", target.display()))?;

    // Sync parent directory on Unix
    #[cfg(unix)]
    {
        if let Some(parent) = target.parent() {
            let dir = File::open(parent)?;
            dir.sync_all()?;
        }
    }

    Ok(())
}

fn write_in_place(target: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(target)
        .with_context(|| format!("Failed to open {} for writing", target.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", target.display()))?;
    file.sync_all()?;
    Ok(())
}

fn resolve_symlink(path: &Path) -> Result<Cow<'_, Path>> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.file_type().is_symlink() {
        let resolved = fs::canonicalize(path)
            .with_context(|| format!("Failed to resolve symlink {}", path.display()))?;
        Ok(Cow::Owned(resolved))
    } else {
        Ok(Cow::Borrowed(path))
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension(format!("{}.rebrand.tmp", std::process::id()))
}
