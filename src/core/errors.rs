//! Error types for the srcmaint library.
//!
//! Every failure in a maintenance run is fatal: errors carry enough context
//! (the file or directory involved) to be reported once at the process
//! boundary.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for srcmaint operations.
pub type Result<T> = std::result::Result<T, SrcmaintError>;

/// Error type for all srcmaint operations.
#[derive(Error, Debug)]
pub enum SrcmaintError {
    /// I/O related errors (reading, writing, metadata)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// File or directory the operation targeted
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// File content is not valid UTF-8 text
    #[error("Encoding error in {}: {message}", .path.display())]
    Encoding {
        /// File that failed to decode
        path: PathBuf,
        /// Error description
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being handled
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SrcmaintError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source,
        }
    }

    /// Create a new I/O error tied to a specific path
    pub fn io_at(message: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::Io {
            message: format!("{}: {}", message.into(), path.display()),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// Create a new encoding error
    pub fn encoding(path: &Path, message: impl Into<String>) -> Self {
        Self::Encoding {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Path associated with the error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            Self::Encoding { path, .. } => Some(path),
            Self::Config { .. } | Self::Serialization { .. } => None,
        }
    }
}

impl From<io::Error> for SrcmaintError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for SrcmaintError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for SrcmaintError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_creation() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = SrcmaintError::io_at("Failed to write file", Path::new("src/a.cpp"), io_err);

        if let SrcmaintError::Io {
            message,
            path,
            source,
        } = &err
        {
            assert_eq!(message, "Failed to write file: src/a.cpp");
            assert_eq!(path.as_deref(), Some(Path::new("src/a.cpp")));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        } else {
            panic!("Expected Io error");
        }
    }

    #[test]
    fn test_config_field_error() {
        let err = SrcmaintError::config_field("must not be empty", "old_prefix");

        if let SrcmaintError::Config { message, field } = &err {
            assert_eq!(message, "must not be empty");
            assert_eq!(field.as_deref(), Some("old_prefix"));
        } else {
            panic!("Expected Config error");
        }
        assert!(err.path().is_none());
    }

    #[test]
    fn test_encoding_error_display() {
        let err = SrcmaintError::encoding(Path::new("widgets/a.h"), "invalid UTF-8");
        assert_eq!(err.to_string(), "Encoding error in widgets/a.h: invalid UTF-8");
        assert_eq!(err.path(), Some(Path::new("widgets/a.h")));
    }

    #[test]
    fn test_from_io_error() {
        let err: SrcmaintError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SrcmaintError::Io { path: None, .. }));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let err: SrcmaintError = yaml_err.into();
        assert!(matches!(
            err,
            SrcmaintError::Serialization {
                data_type: Some(_),
                ..
            }
        ));
    }
}
