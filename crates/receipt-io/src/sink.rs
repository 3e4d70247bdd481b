//! # Receipt Sink
//!
//! Writes each receipt to its own file: `<dir>/output0`, `<dir>/output1`, ...
//! The index is the basket's position in the run, starting at 0. Files hold
//! the receipt text exactly, with no trailing newline.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{IoError, IoResult};

/// File name prefix for receipt files.
pub const OUTPUT_FILE_PREFIX: &str = "output";

/// An output directory for receipt files.
#[derive(Debug, Clone)]
pub struct ReceiptSink {
    dir: PathBuf,
}

impl ReceiptSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReceiptSink { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the receipt file for a basket index.
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}{}", OUTPUT_FILE_PREFIX, index))
    }

    /// Creates the output directory (and parents) when missing.
    pub fn prepare(&self) -> IoResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| IoError::CreateDir {
            path: self.dir.clone(),
            source,
        })
    }

    /// Writes one receipt, replacing any previous file.
    pub fn write(&self, index: usize, receipt: &str) -> IoResult<PathBuf> {
        let path = self.path_for(index);
        fs::write(&path, receipt).map_err(|source| IoError::WriteFile {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "Receipt written");
        Ok(path)
    }

    /// Prepares the directory and writes every receipt by position.
    pub fn write_all<S: AsRef<str>>(&self, receipts: &[S]) -> IoResult<Vec<PathBuf>> {
        self.prepare()?;
        let paths = receipts
            .iter()
            .enumerate()
            .map(|(index, receipt)| self.write(index, receipt.as_ref()))
            .collect::<IoResult<Vec<_>>>()?;

        info!(
            dir = %self.dir.display(),
            count = paths.len(),
            "Receipts written"
        );
        Ok(paths)
    }
}
