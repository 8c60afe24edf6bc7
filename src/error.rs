//! Error types for gesture capability discovery and control.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tapwake operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or driving a gesture control node.
#[derive(Debug, Error)]
pub enum Error {
    /// The bus subsystem could not be enumerated.
    #[error("cannot enumerate {subsystem} bus: {source}")]
    BusUnavailable {
        /// Bus subsystem name (e.g. `i2c`).
        subsystem: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing to a control node failed.
    #[error("failed to write control node {}: {source}", .path.display())]
    ControlWrite {
        /// Path of the control node.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// No property with this name exists on the backend.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// The property can be read but not written.
    #[error("property is read-only: {0}")]
    ReadOnlyProperty(String),

    /// A property was assigned a value of the wrong type.
    #[error("property {name} expects a {expected} value")]
    PropertyType {
        /// Property name.
        name: String,
        /// Expected value type.
        expected: &'static str,
    },

    /// Configuration could not be loaded or stored.
    #[error("config error: {0}")]
    Config(String),

    /// Thread-related error.
    #[error("thread error: {0}")]
    ThreadError(String),
}

impl Error {
    /// Whether this error came from a failed write to hardware, as opposed
    /// to discovery or API misuse.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Error::ControlWrite { .. })
    }
}
