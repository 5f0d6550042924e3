//! Literal prefix rewriting.
//!
//! Replaces every occurrence of one fixed string with another across the
//! matching files of a tree. Files without an occurrence are never opened for
//! writing, so their modification times stay put.

use std::path::Path;

use tracing::{debug, info};

use crate::core::config::RewriteConfig;
use crate::core::errors::Result;
use crate::core::file_utils::FileReader;
use crate::core::walker::collect_source_files;
use crate::report::{FileChange, Operation, RunReport};

/// Result of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Content after substitution
    pub content: String,
    /// Number of occurrences replaced
    pub replacements: usize,
}

/// Replace all occurrences of `old` in `content` with `new`.
///
/// Occurrences are matched left to right without overlap, in a single pass:
/// text produced by a substitution is not searched again. Returns `None` when
/// `old` does not occur.
pub fn rewrite_content(content: &str, old: &str, new: &str) -> Option<Rewrite> {
    if old.is_empty() {
        return None;
    }

    let replacements = content.matches(old).count();
    if replacements == 0 {
        return None;
    }

    Some(Rewrite {
        content: content.replace(old, new),
        replacements,
    })
}

/// Notice printed for each modified file.
pub fn update_notice(path: &Path) -> String {
    format!("✔ Updated paths in: {}", path.display())
}

/// Walks a directory tree and rewrites a literal prefix in each matching file.
pub struct PrefixRewriter {
    config: RewriteConfig,
}

impl PrefixRewriter {
    /// Create a rewriter, validating the configuration first.
    pub fn new(config: RewriteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    /// Rewrite every matching file under the root that contains the old prefix.
    ///
    /// `on_change` is invoked after each file is written (or would be, in a dry
    /// run), in walk order. The first error aborts the pass, leaving earlier
    /// files already written.
    pub fn run_with<F>(&self, mut on_change: F) -> Result<RunReport>
    where
        F: FnMut(&FileChange),
    {
        let config = &self.config;
        let files = collect_source_files(&config.root, &config.extensions)?;
        let mut report = RunReport::new(Operation::Rewrite, config.root.clone(), config.dry_run);

        info!(
            "Rewriting '{}' -> '{}' in {} files under {}",
            config.old_prefix,
            config.new_prefix,
            files.len(),
            config.root.display()
        );

        for file in files {
            report.files_scanned += 1;

            let content = FileReader::read_to_string(&file.path)?;
            let Some(rewrite) = rewrite_content(&content, &config.old_prefix, &config.new_prefix)
            else {
                continue;
            };

            if !config.dry_run {
                FileReader::write(&file.path, &rewrite.content)?;
            }
            debug!(
                "Replaced {} occurrence(s) in {}",
                rewrite.replacements,
                file.path.display()
            );

            let change = FileChange {
                path: file.path,
                relative: file.relative,
                replacements: Some(rewrite.replacements),
            };
            on_change(&change);
            report.changes.push(change);
        }

        info!(
            "Rewrite pass finished: {} of {} files changed, {} replacements",
            report.changes.len(),
            report.files_scanned,
            report.total_replacements()
        );
        Ok(report)
    }

    /// Rewrite without per-file callbacks.
    pub fn run(&self) -> Result<RunReport> {
        self.run_with(|_| {})
    }
}
