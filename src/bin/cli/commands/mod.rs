//! CLI Command Implementations
//!
//! - stamp: path comment stamping
//! - rewrite: prefix rewriting
//! - config: configuration file loading and printing

pub mod config;
pub mod rewrite;
pub mod stamp;

use anyhow::bail;

use crate::cli::args::RunArgs;
use srcmaint::RunReport;

pub use config::{load_file_config, print_default_config};
pub use rewrite::rewrite_command;
pub use stamp::stamp_command;

/// Replace the configured extensions when any were given on the command line.
pub fn apply_extension_override(extensions: &mut Vec<String>, run: &RunArgs) {
    let overrides: Vec<String> = run
        .extensions
        .iter()
        .filter(|ext| !ext.trim().is_empty())
        .cloned()
        .collect();

    if !overrides.is_empty() {
        *extensions = overrides;
    }
}

/// Fail the command in `--check` mode when the run found pending changes.
pub fn enforce_check(report: &RunReport, run: &RunArgs) -> anyhow::Result<()> {
    if run.check && report.has_changes() {
        bail!(
            "{} file(s) under {} need updating",
            report.changes.len(),
            report.root.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcmaint::{FileChange, Operation};
    use std::path::PathBuf;

    #[test]
    fn extension_override_replaces_defaults() {
        let mut extensions = vec![".cpp".to_string(), ".h".to_string()];
        let run = RunArgs {
            extensions: vec![".hpp".to_string(), " ".to_string()],
            ..RunArgs::default()
        };
        apply_extension_override(&mut extensions, &run);
        assert_eq!(extensions, vec![".hpp"]);
    }

    #[test]
    fn no_override_keeps_configured_extensions() {
        let mut extensions = vec![".cc".to_string()];
        apply_extension_override(&mut extensions, &RunArgs::default());
        assert_eq!(extensions, vec![".cc"]);
    }

    #[test]
    fn check_fails_only_with_changes() {
        let mut report = RunReport::new(Operation::Stamp, PathBuf::from("."), true);
        let run = RunArgs {
            check: true,
            ..RunArgs::default()
        };
        assert!(enforce_check(&report, &run).is_ok());

        report.changes.push(FileChange {
            path: PathBuf::from("./a.h"),
            relative: PathBuf::from("a.h"),
            replacements: None,
        });
        assert!(enforce_check(&report, &run).is_err());
        assert!(enforce_check(&report, &RunArgs::default()).is_ok());
    }
}
