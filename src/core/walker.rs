//! Source file discovery.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::errors::{Result, SrcmaintError};
use crate::core::file_utils::{relative_path, FileReader};

/// A file selected for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as reached from the walk root (root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the walk root
    pub relative: PathBuf,
}

/// Check that `root` is a directory.
///
/// A root that cannot be stat'ed (usually because it does not exist) yields
/// `Ok(None)`: there is simply nothing to process.
pub fn resolve_root(root: &Path) -> Result<Option<PathBuf>> {
    let metadata = match std::fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Nothing to process, cannot read root {}: {}", root.display(), e);
            return Ok(None);
        }
    };

    if !metadata.is_dir() {
        return Err(SrcmaintError::config_field(
            format!("Root must be a directory: {}", root.display()),
            "root",
        ));
    }

    Ok(Some(root.to_path_buf()))
}

/// Recursively collect files under `root` whose names end with one of
/// `extensions`, in file-name order.
///
/// Symlinked directories are not descended into. A missing root and
/// unreadable directories are logged and skipped; only per-file reads and
/// writes done by the callers are fatal.
pub fn collect_source_files<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<SourceFile>> {
    let Some(root) = resolve_root(root)? else {
        return Ok(Vec::new());
    };
    let walker = WalkDir::new(&root).sort_by_file_name();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();

        // `is_file` follows symlinks, so linked files are still picked up.
        if !path.is_file() || !FileReader::has_extension(path, extensions) {
            continue;
        }

        files.push(SourceFile {
            path: path.to_path_buf(),
            relative: relative_path(path, &root),
        });
    }

    debug!("Found {} matching files under {}", files.len(), root.display());
    Ok(files)
}
