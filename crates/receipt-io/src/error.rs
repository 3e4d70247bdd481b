//! # File System Error Types
//!
//! Error types for reading baskets and writing receipts.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error (no path attached)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  IoError (this module) ← Adds the path and the operation               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  anyhow::Error (in receipt-cli) ← Reported, process exits non-zero     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File system errors.
#[derive(Debug, Error)]
pub enum IoError {
    /// The input directory is missing or not a directory.
    #[error("Input directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// Listing a directory failed.
    #[error("Unable to list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a basket file failed.
    ///
    /// ## When This Occurs
    /// - Permission denied
    /// - File is not valid UTF-8
    #[error("Unable to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating the output directory failed.
    #[error("Unable to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a receipt file failed.
    #[error("Unable to write to output file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IoError {
    /// Returns the path the failed operation touched.
    pub fn path(&self) -> &Path {
        match self {
            IoError::MissingDirectory { path }
            | IoError::ReadDir { path, .. }
            | IoError::ReadFile { path, .. }
            | IoError::CreateDir { path, .. }
            | IoError::WriteFile { path, .. } => path,
        }
    }
}

/// Result type for file system operations.
pub type IoResult<T> = Result<T, IoError>;
