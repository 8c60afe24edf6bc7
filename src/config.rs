//! Backend selection settings.
//!
//! With the `serde` feature, [`Config`] can be stored as JSON:
//!
//! ```json
//! {
//!   "touchpanel_dt2w_node": "/proc/touchpanel/double_tap_enable",
//!   "scanner": { "subsystem": "i2c" }
//! }
//! ```
//!
//! Missing fields take their defaults.

use crate::scanner::ScannerConfig;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::path::Path;

/// Settings used by [`Gestures::select`](crate::Gestures::select).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Control node for the generic backend, used when no FocalTech
    /// controller is found.
    pub touchpanel_dt2w_node: Option<PathBuf>,
    /// FocalTech scan settings.
    pub scanner: ScannerConfig,
}

impl Config {
    /// Default settings: scan `/sys`, no generic node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generic backend's control node.
    pub fn with_touchpanel_dt2w_node(mut self, node: impl Into<PathBuf>) -> Self {
        self.touchpanel_dt2w_node = Some(node.into());
        self
    }

    /// Replace the scan settings.
    pub fn with_scanner(mut self, scanner: ScannerConfig) -> Self {
        self.scanner = scanner;
        self
    }

    /// Load settings from a JSON file.
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&json).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.scanner.validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Store settings as a JSON file.
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json).map_err(|e| {
            Error::Config(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
