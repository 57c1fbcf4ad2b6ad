//! Plain-text log file sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::record::LogRecord;
use crate::error::{Error, Result};

/// Appends one line per record to a file, creating it on first use.
///
/// No rotation, locking or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the record's [`file_line`](LogRecord::file_line).
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileSink`] if the file cannot be created or written.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        let wrap = |source: std::io::Error| Error::FileSink {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(wrap)?;
        file.write_all(record.file_line().as_bytes()).map_err(wrap)
    }
}
