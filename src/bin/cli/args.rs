//! CLI Argument Structures
//!
//! Command and flag definitions for the srcmaint binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maintenance utilities for C++ source trees
#[derive(Parser)]
#[command(name = "srcmaint")]
#[command(version = VERSION)]
#[command(about = "Maintenance utilities for C++ source trees")]
#[command(long_about = "
Stamp source files with their relative path and rewrite hardcoded path
prefixes, in place.

Common Usage:

  # Add '// File: <relative path>' to every .cpp/.h under the current directory
  srcmaint stamp

  # Replace 'bin/data/' with 'data/' in every .cpp/.h under ./src
  srcmaint rewrite

  # Preview changes without writing anything
  srcmaint rewrite --dry-run

  # Fail in CI if any file is missing its stamp
  srcmaint stamp --check
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to .srcmaint.yml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepend a '// File: <relative path>' comment to every matching file
    Stamp(StampArgs),

    /// Replace a literal path prefix in every matching file
    Rewrite(RewriteArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,
}

/// Options shared by both utilities
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// File name suffix to process (repeatable) [default: .cpp .h]
    #[arg(long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with an error if any file would change
    #[arg(long)]
    pub check: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RunArgs {
    /// Whether files must be left untouched
    pub fn is_dry_run(&self) -> bool {
        self.dry_run || self.check
    }
}

#[derive(Args, Clone, Debug)]
pub struct StampArgs {
    /// Directory to stamp; paths are written relative to it [default: .]
    #[arg(long)]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Args, Clone, Debug)]
pub struct RewriteArgs {
    /// Directory to rewrite [default: src]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Literal text to replace [default: bin/data/]
    #[arg(long)]
    pub old_prefix: Option<String>,

    /// Replacement text [default: data/]
    #[arg(long)]
    pub new_prefix: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable notices
    #[default]
    Text,
    /// Run report as JSON
    Json,
}
