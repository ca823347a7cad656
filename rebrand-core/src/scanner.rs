use crate::config::RebrandConfig;
use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Files above this size are read with a plain buffered read instead of mmap
const MMAP_LIMIT: u64 = 50 * 1024 * 1024;

/// Returns true if the file name of `path` ends with one of `extensions`.
///
/// The comparison is a case-sensitive suffix match on the raw bytes of the
/// file name only, so `Main.XAML` and `Util.cs.bak` do not qualify while a
/// name that is not valid UTF-8 still does.
pub fn is_candidate<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };

    let name = name.as_encoded_bytes();
    extensions
        .iter()
        .any(|ext| name.ends_with(ext.as_ref().as_bytes()))
}

/// Lazily walk every candidate file under the configured root.
///
/// Hidden files and directories are included and no ignore files are
/// consulted. Directory symlinks are not followed. Any other symlink with a
/// qualifying name is yielded, including a dangling one, so reading it fails
/// the run. Any walk error is returned with the offending path attached.
pub fn walk_candidates(config: &RebrandConfig) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let qualifies = is_candidate(entry.path(), config.extensions.as_slice())
                    && !is_dir_like(&entry);
                if qualifies {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            },
            Err(err) => {
                let path = err
                    .path()
                    .map_or_else(|| config.root.clone(), Path::to_path_buf);
                Some(Err(anyhow::Error::new(err)
                    .context(format!("Failed to walk {}", path.display()))))
            },
        })
}

fn is_dir_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return true;
    }
    // Unresolvable links are kept so the read reports them
    file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
}

/// Read a whole file into memory. The file handle is closed before returning.
pub fn read_file_content(path: &Path) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() == 0 || metadata.len() > MMAP_LIMIT {
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(content)
    } else {
        // SAFETY: the mapping is copied out immediately and dropped with `file`.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to map {}", path.display()))?;
        Ok(mmap.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXTS: &[&str] = &[".xaml", ".cs"];

    fn collect_candidates(config: &RebrandConfig) -> Result<Vec<PathBuf>> {
        walk_candidates(config).collect()
    }

    #[test]
    fn test_is_candidate_extensions() {
        assert!(is_candidate(Path::new("a/Main.xaml"), EXTS));
        assert!(is_candidate(Path::new("a/b/Util.cs"), EXTS));
        assert!(!is_candidate(Path::new("readme.md"), EXTS));
        assert!(!is_candidate(Path::new("App.xaml.bak"), EXTS));
    }

    #[test]
    fn test_is_candidate_case_sensitive() {
        assert!(!is_candidate(Path::new("Main.XAML"), EXTS));
        assert!(!is_candidate(Path::new("Util.CS"), EXTS));
    }

    #[test]
    fn test_is_candidate_matches_name_not_directory() {
        assert!(!is_candidate(Path::new("project.cs/readme.txt"), EXTS));
        assert!(is_candidate(Path::new("dir/.cs"), EXTS));
    }

    #[test]
    fn test_is_candidate_suffix_without_dot() {
        // "Ucs" does not end with ".cs"
        assert!(!is_candidate(Path::new("Ucs"), EXTS));
        assert!(is_candidate(Path::new("App.g.i.cs"), EXTS));
    }

    #[test]
    fn test_collect_candidates_nested_and_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b/c")).unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join("Top.cs"), "").unwrap();
        fs::write(root.join("a/Main.xaml"), "").unwrap();
        fs::write(root.join("a/b/c/Deep.cs"), "").unwrap();
        fs::write(root.join(".hidden/Secret.cs"), "").unwrap();
        fs::write(root.join("a/readme.md"), "").unwrap();

        let config = RebrandConfig::with_defaults(root);
        let mut found = collect_candidates(&config).unwrap();
        found.sort();

        let mut expected = vec![
            root.join(".hidden/Secret.cs"),
            root.join("Top.cs"),
            root.join("a/Main.xaml"),
            root.join("a/b/c/Deep.cs"),
        ];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_collect_candidates_skips_matching_directory_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Views.xaml")).unwrap();
        fs::write(root.join("Views.xaml/notes.txt"), "").unwrap();

        let config = RebrandConfig::with_defaults(root);
        assert!(collect_candidates(&config).unwrap().is_empty());
    }

    #[test]
    fn test_collect_candidates_missing_root_errors() {
        let temp_dir = TempDir::new().unwrap();
        let config = RebrandConfig::with_defaults(temp_dir.path().join("missing"));
        let err = collect_candidates(&config).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to walk"));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_file_is_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("Real.txt"), "").unwrap();
        std::os::unix::fs::symlink(root.join("Real.txt"), root.join("Link.cs")).unwrap();

        let config = RebrandConfig::with_defaults(root);
        assert_eq!(collect_candidates(&config).unwrap(), vec![root.join("Link.cs")]);
    }

    #[test]
    #[cfg(unix)]
    fn test_is_candidate_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"Vue\xff.cs");
        assert!(is_candidate(Path::new(name), EXTS));
        assert!(!is_candidate(Path::new(OsStr::from_bytes(b"Vue\xff.md")), EXTS));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_name_is_walked() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let path = root.join(OsStr::from_bytes(b"Vue\xff.cs"));
        if fs::write(&path, "").is_err() {
            // Some filesystems refuse names that are not valid UTF-8
            return;
        }

        let config = RebrandConfig::with_defaults(root);
        assert_eq!(collect_candidates(&config).unwrap(), vec![path]);
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_is_candidate() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("missing.txt"), root.join("Dangling.cs")).unwrap();

        let config = RebrandConfig::with_defaults(root);
        assert_eq!(
            collect_candidates(&config).unwrap(),
            vec![root.join("Dangling.cs")]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_directory_with_candidate_name_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("Views.cs")).unwrap();

        let config = RebrandConfig::with_defaults(root);
        assert!(collect_candidates(&config).unwrap().is_empty());
    }

    #[test]
    fn test_read_file_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Main.xaml");
        fs::write(&path, b"<Window Title=\"x\"/>").unwrap();
        assert_eq!(read_file_content(&path).unwrap(), b"<Window Title=\"x\"/>");
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Empty.cs");
        fs::write(&path, b"").unwrap();
        assert!(read_file_content(&path).unwrap().is_empty());
    }
}
