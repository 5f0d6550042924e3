//! File utilities for reading and rewriting source files.
//!
//! Reads are strict: a file that is not valid UTF-8 aborts the run instead of
//! being decoded lossily, since writing lossy text back would corrupt it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::errors::{Result, SrcmaintError};

/// Text file reading and in-place rewriting
pub struct FileReader;

impl FileReader {
    /// Read a file to string, failing on invalid UTF-8
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        let bytes = fs::read(file_path)
            .map_err(|e| SrcmaintError::io_at("Failed to read file", file_path, e))?;

        String::from_utf8(bytes).map_err(|e| {
            SrcmaintError::encoding(
                file_path,
                format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
            )
        })
    }

    /// Overwrite a file with new content
    pub fn write(file_path: &Path, content: &str) -> Result<()> {
        debug!("Writing {} bytes to {}", content.len(), file_path.display());
        fs::write(file_path, content)
            .map_err(|e| SrcmaintError::io_at("Failed to write file", file_path, e))
    }

    /// Check whether a file name ends with one of the given suffixes.
    ///
    /// This is a plain, case-sensitive suffix test on the name, so a file
    /// literally named `.h` matches `.h`.
    pub fn has_extension<S: AsRef<str>>(file_path: &Path, extensions: &[S]) -> bool {
        match file_path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy();
                extensions.iter().any(|ext| name.ends_with(ext.as_ref()))
            }
            None => false,
        }
    }
}

/// Path of `path` relative to `root`, or `path` itself if it is outside `root`
pub fn relative_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(PathBuf::from)
        .unwrap_or_else(|_| path.to_path_buf())
}
