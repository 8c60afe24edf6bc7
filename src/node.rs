//! Writable control nodes.

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A kernel attribute file that toggles a feature when `0` or `1` is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlNode {
    path: PathBuf,
}

impl ControlNode {
    /// Bind to the node at `path`. The file is not touched until written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the node.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `1` or `0` to the node, without a trailing newline.
    ///
    /// The node must already exist. The file handle is closed before this
    /// returns, whether or not the write succeeded.
    pub fn write(&self, value: bool) -> Result<()> {
        let payload: &[u8] = if value { b"1" } else { b"0" };

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| self.write_error(e))?;

        file.write_all(payload).map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::ControlWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl From<PathBuf> for ControlNode {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
