//! # Basket Source
//!
//! Reads one basket per file from an input directory.
//!
//! ## Reading Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input/                                                                 │
//! │    ├── basket1   ──► "1 book at 12.49\n1 music CD at 14.99\n"          │
//! │    ├── basket2        │                                                 │
//! │    └── basket3        ▼  split on '\n' (a trailing '\r' stays)          │
//! │                  ["1 book at 12.49", "1 music CD at 14.99", ""]        │
//! │                                                                         │
//! │  Files are visited in file-name order. Subdirectories are skipped.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are handed over raw. Blank lines and stray `\r` are the
//! pipeline's business, not this module's.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{IoError, IoResult};

// =============================================================================
// Raw Basket
// =============================================================================

/// The unparsed lines of one basket file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBasket {
    /// File the lines came from.
    pub path: PathBuf,
    /// Every `\n`-separated line, including empty ones.
    pub lines: Vec<String>,
}

impl RawBasket {
    /// Splits file contents into lines.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        RawBasket {
            path: path.into(),
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// File name without the directory, for log fields.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl AsRef<[String]> for RawBasket {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

// =============================================================================
// Basket Source
// =============================================================================

/// An input directory of basket files.
///
/// ## Example
/// ```rust,ignore
/// let baskets = BasketSource::new("./input").read_baskets()?;
/// let receipts = BasketPipeline::default().process(&baskets)?;
/// ```
#[derive(Debug, Clone)]
pub struct BasketSource {
    dir: PathBuf,
}

impl BasketSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        BasketSource { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists the regular files of the directory, sorted by file name.
    ///
    /// ## Errors
    /// - `MissingDirectory` if the directory does not exist
    /// - `ReadDir` if it cannot be listed
    pub fn list_files(&self) -> IoResult<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(IoError::MissingDirectory {
                path: self.dir.clone(),
            });
        }

        let read_dir_error = |source: std::io::Error| IoError::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            } else {
                debug!(path = %path.display(), "Skipping non-file entry");
            }
        }

        files.sort();
        Ok(files)
    }

    /// Reads every basket file.
    ///
    /// An empty file yields a basket with a single empty line.
    pub fn read_baskets(&self) -> IoResult<Vec<RawBasket>> {
        let files = self.list_files()?;
        info!(
            dir = %self.dir.display(),
            files = files.len(),
            "Reading basket files"
        );

        files
            .into_iter()
            .map(|path| {
                let text = fs::read_to_string(&path).map_err(|source| IoError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                let basket = RawBasket::from_text(path, &text);
                debug!(
                    file = %basket.file_name(),
                    lines = basket.lines.len(),
                    "Basket file read"
                );
                Ok(basket)
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
