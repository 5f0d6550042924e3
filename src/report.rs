//! Per-run summaries shared by both utilities.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::errors::Result;

/// Which utility produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Path comment stamping
    Stamp,
    /// Prefix rewriting
    Rewrite,
}

/// A file whose content differs after processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// Path as reached from the run root
    pub path: PathBuf,
    /// Path relative to the run root
    pub relative: PathBuf,
    /// Number of substitutions made (rewrites only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<usize>,
}

/// Outcome of one stamping or rewriting pass.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Utility that ran
    pub operation: Operation,
    /// Root that was walked
    pub root: PathBuf,
    /// Whether writes were suppressed
    pub dry_run: bool,
    /// Number of files with a matching extension
    pub files_scanned: usize,
    /// Files whose content changed, in walk order
    pub changes: Vec<FileChange>,
}

impl RunReport {
    /// Start an empty report.
    pub fn new(operation: Operation, root: PathBuf, dry_run: bool) -> Self {
        Self {
            operation,
            root,
            dry_run,
            files_scanned: 0,
            changes: Vec::new(),
        }
    }

    /// Returns true if any file changed (or would change, in a dry run).
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Total substitutions across all changed files.
    pub fn total_replacements(&self) -> usize {
        self.changes.iter().filter_map(|c| c.replacements).sum()
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
