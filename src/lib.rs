//! # srcmaint: C++ source tree maintenance
//!
//! Two single-pass utilities that mutate a source tree in place:
//!
//! - **Path stamping** ([`stamp`]): every `.cpp`/`.h` file gets a first line
//!   `// File: <path relative to root>`, replacing a stale stamp if present.
//! - **Prefix rewriting** ([`rewrite`]): every literal occurrence of one path
//!   prefix (default `bin/data/`) becomes another (default `data/`), and only
//!   files that contained it are written.
//!
//! Both walk the tree synchronously and stop at the first I/O or encoding
//! error; files already processed stay modified.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use srcmaint::{PathStamper, PrefixRewriter, RewriteConfig, StampConfig};
//!
//! fn main() -> srcmaint::Result<()> {
//!     PathStamper::new(StampConfig::new("."))?.run()?;
//!
//!     let report = PrefixRewriter::new(RewriteConfig::default())?.run()?;
//!     println!("{} files updated", report.changes.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod core {
    //! Errors, configuration, and filesystem helpers.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
    pub mod walker;
}

pub mod report;
pub mod rewrite;
pub mod stamp;

pub use crate::core::config::{RewriteConfig, SrcmaintConfig, StampConfig};
pub use crate::core::errors::{Result, SrcmaintError};
pub use report::{FileChange, Operation, RunReport};
pub use rewrite::PrefixRewriter;
pub use stamp::PathStamper;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
