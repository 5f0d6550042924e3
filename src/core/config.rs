//! Configuration types for the path stamper and prefix rewriter.
//!
//! Both utilities work without any configuration; the YAML file and CLI flags
//! only override the built-in defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, SrcmaintError};

/// File name suffixes processed by default.
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".cpp", ".h"];

/// Prefix that identifies a generated path comment.
pub const STAMP_MARKER: &str = "// File:";

/// Root scanned by the prefix rewriter when none is given.
pub const DEFAULT_REWRITE_ROOT: &str = "src";

/// Prefix replaced by the prefix rewriter when none is given.
pub const DEFAULT_OLD_PREFIX: &str = "bin/data/";

/// Replacement prefix used by the prefix rewriter when none is given.
pub const DEFAULT_NEW_PREFIX: &str = "data/";

/// Names probed in the working directory when no `--config` is passed.
pub const IMPLICIT_CONFIG_FILES: [&str; 2] = [".srcmaint.yml", ".srcmaint.yaml"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SrcmaintConfig {
    /// Path stamper settings
    pub stamp: StampConfig,

    /// Prefix rewriter settings
    pub rewrite: RewriteConfig,
}

impl SrcmaintConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| SrcmaintError::io_at("Failed to read config file", &path, e))?;

        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Serialize configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Find the implicit configuration file inside `dir`, if one exists
    pub fn find_implicit(dir: &Path) -> Option<PathBuf> {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        self.stamp.validate()?;
        self.rewrite.validate()?;
        Ok(())
    }
}

/// Path stamper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Directory whose files are stamped; stamps are relative to it
    pub root: PathBuf,

    /// File name suffixes to process
    pub extensions: Vec<String>,

    /// Compute changes without writing them
    #[serde(skip)]
    pub dry_run: bool,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: default_extensions(),
            dry_run: false,
        }
    }
}

impl StampConfig {
    /// Create a configuration with defaults for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Validate stamper configuration
    pub fn validate(&self) -> Result<()> {
        validate_extensions(&self.extensions, "stamp.extensions")
    }
}

/// Prefix rewriter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Directory whose files are rewritten
    pub root: PathBuf,

    /// Literal text to search for
    pub old_prefix: String,

    /// Literal text substituted for every occurrence of `old_prefix`
    pub new_prefix: String,

    /// File name suffixes to process
    pub extensions: Vec<String>,

    /// Compute changes without writing them
    #[serde(skip)]
    pub dry_run: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_REWRITE_ROOT),
            old_prefix: DEFAULT_OLD_PREFIX.to_string(),
            new_prefix: DEFAULT_NEW_PREFIX.to_string(),
            extensions: default_extensions(),
            dry_run: false,
        }
    }
}

impl RewriteConfig {
    /// Create a configuration with default prefixes for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Replace the prefix pair
    pub fn with_prefixes(mut self, old_prefix: impl Into<String>, new_prefix: impl Into<String>) -> Self {
        self.old_prefix = old_prefix.into();
        self.new_prefix = new_prefix.into();
        self
    }

    /// Validate rewriter configuration
    pub fn validate(&self) -> Result<()> {
        // An empty needle matches between every character.
        if self.old_prefix.is_empty() {
            return Err(SrcmaintError::config_field(
                "old prefix must not be empty",
                "rewrite.old_prefix",
            ));
        }
        validate_extensions(&self.extensions, "rewrite.extensions")
    }
}

fn validate_extensions(extensions: &[String], field: &str) -> Result<()> {
    if extensions.is_empty() {
        return Err(SrcmaintError::config_field(
            "at least one extension is required",
            field,
        ));
    }
    if extensions.iter().any(|ext| ext.trim().is_empty()) {
        return Err(SrcmaintError::config_field(
            "extensions must not be blank",
            field,
        ));
    }
    Ok(())
}
