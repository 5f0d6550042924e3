//! Path comment stamping.
//!
//! Every matching file gets a first line of the form `// File: <relative path>`.
//! A stamp already present on the first line is replaced, so repeated runs do
//! not stack comments. Only the first line is inspected; a stamp anywhere else
//! is left as ordinary text.

use std::path::Path;

use tracing::{debug, info};

use crate::core::config::{StampConfig, STAMP_MARKER};
use crate::core::errors::Result;
use crate::core::file_utils::FileReader;
use crate::core::walker::collect_source_files;
use crate::report::{FileChange, Operation, RunReport};

/// Printed once after a stamping pass completes.
pub const COMPLETION_NOTICE: &str = "File path comments added.";

/// Build the stamp line (including its newline) for a relative path.
pub fn stamp_line(relative_path: &Path) -> String {
    format!("{STAMP_MARKER} {}\n", relative_path.display())
}

/// Return `content` with its first line set to the stamp for `relative_path`.
///
/// The first line runs up to and including the first `\n`, or is the whole
/// content when there is none. Everything after it is kept byte-for-byte.
pub fn stamp_content(content: &str, relative_path: &Path) -> String {
    let (first, rest) = match content.find('\n') {
        Some(idx) => content.split_at(idx + 1),
        None => (content, ""),
    };

    let body = if first.starts_with(STAMP_MARKER) {
        rest
    } else {
        content
    };

    let mut stamped = stamp_line(relative_path);
    stamped.push_str(body);
    stamped
}

/// Walks a directory tree and stamps each matching file.
pub struct PathStamper {
    config: StampConfig,
}

impl PathStamper {
    /// Create a stamper, validating the configuration first.
    pub fn new(config: StampConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &StampConfig {
        &self.config
    }

    /// Stamp every matching file under the root.
    ///
    /// Files are rewritten even when the stamp was already correct; the
    /// report only lists files whose content actually changed. The first
    /// error aborts the pass, leaving earlier files already written.
    pub fn run(&self) -> Result<RunReport> {
        let root = &self.config.root;
        let files = collect_source_files(root, &self.config.extensions)?;
        let mut report = RunReport::new(Operation::Stamp, root.clone(), self.config.dry_run);

        info!("Stamping {} files under {}", files.len(), root.display());

        for file in files {
            report.files_scanned += 1;

            let content = FileReader::read_to_string(&file.path)?;
            let stamped = stamp_content(&content, &file.relative);
            let changed = stamped != content;

            if !self.config.dry_run {
                FileReader::write(&file.path, &stamped)?;
            }
            debug!(
                "{} {}",
                if changed { "Stamped" } else { "Unchanged" },
                file.path.display()
            );

            if changed {
                report.changes.push(FileChange {
                    path: file.path,
                    relative: file.relative,
                    replacements: None,
                });
            }
        }

        info!(
            "Stamp pass finished: {} of {} files changed",
            report.changes.len(),
            report.files_scanned
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "stamp_tests.rs"]
mod tests;
