//! Control node discovery.
//!
//! The scanner walks every device on a bus subsystem and picks the first one
//! whose driver exposes a marker attribute. The control node is the device's
//! canonical directory joined with a fixed suffix. Nothing else about the
//! device (vendor, model, name) is looked at.
//!
//! # Example
//!
//! ```no_run
//! use tapwake::scanner::{Scanner, ScannerConfig};
//!
//! let scanner = Scanner::new(ScannerConfig::default());
//! match scanner.find_control_node() {
//!     Some(node) => println!("control node: {}", node.display()),
//!     None => println!("double-tap-to-wake not available"),
//! }
//! ```

use crate::bus::DeviceBus;
use crate::error::{Error, Result};
use crate::gestures::focaltech;
use crate::platform::SysfsBus;
use std::path::{Component, Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sysfs mount point.
pub const SYSFS_ROOT: &str = "/sys";

/// Where and what to scan for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// sysfs mount point.
    pub sysfs_root: PathBuf,
    /// Bus subsystem to enumerate.
    pub subsystem: String,
    /// Attribute whose presence marks a matching device.
    pub marker_attribute: String,
    /// Path appended to the device directory to form the control node.
    pub control_suffix: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::focaltech()
    }
}

impl ScannerConfig {
    /// Settings for FocalTech touch controllers.
    pub fn focaltech() -> Self {
        Self {
            sysfs_root: PathBuf::from(SYSFS_ROOT),
            subsystem: focaltech::SUBSYSTEM.to_string(),
            marker_attribute: focaltech::MARKER_ATTRIBUTE.to_string(),
            control_suffix: focaltech::CONTROL_NODE.to_string(),
        }
    }

    /// Scan a different sysfs mount.
    pub fn with_sysfs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sysfs_root = root.into();
        self
    }

    /// Scan a different bus subsystem.
    pub fn with_subsystem(mut self, subsystem: impl Into<String>) -> Self {
        self.subsystem = subsystem.into();
        self
    }

    /// Match on a different marker attribute.
    pub fn with_marker_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attribute = attribute.into();
        self
    }

    /// Use a different control node suffix.
    ///
    /// The suffix must stay inside the device directory; see
    /// [`validate`](Self::validate).
    pub fn with_control_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.control_suffix = suffix.into();
        self
    }

    /// Check that the control suffix is a non-empty relative path made only
    /// of plain names, so joining it to a device directory cannot leave it.
    pub fn validate(&self) -> Result<()> {
        let suffix = Path::new(&self.control_suffix);
        let mut components = suffix.components().peekable();

        if components.peek().is_none()
            || !components.all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(Error::Config(format!(
                "control suffix must be a relative path below the device: {:?}",
                self.control_suffix
            )));
        }

        Ok(())
    }
}

/// Finds the double-tap-to-wake control node on a bus.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    /// Create a scanner with the given settings.
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Enumerate the configured bus and return the control node of the first
    /// matching device.
    ///
    /// Returns `None` when the bus cannot be opened or no device matches.
    /// The bus snapshot is dropped before this returns.
    pub fn find_control_node(&self) -> Option<PathBuf> {
        let bus = match SysfsBus::open(&self.config.sysfs_root, &self.config.subsystem) {
            Ok(bus) => bus,
            Err(e) => {
                log::debug!("Skipping scan: {}", e);
                return None;
            }
        };

        self.find_on(&bus)
    }

    /// Search an already enumerated bus.
    ///
    /// Devices are visited in the order the bus reports them. The scan stops
    /// at the first device that carries the marker and resolves; a device
    /// whose path cannot be resolved is skipped. An invalid control suffix
    /// matches nothing.
    pub fn find_on<B: DeviceBus + ?Sized>(&self, bus: &B) -> Option<PathBuf> {
        if let Err(e) = self.config.validate() {
            log::warn!("Skipping scan: {}", e);
            return None;
        }

        let marker = &self.config.marker_attribute;

        for device in bus.devices() {
            if !bus.has_attribute(device, marker) {
                continue;
            }

            match bus.canonical_path(device) {
                Ok(dir) => {
                    let node = dir.join(&self.config.control_suffix);
                    log::debug!(
                        "Found {} on {} device {}: {}",
                        marker,
                        bus.subsystem(),
                        device.sysname,
                        node.display()
                    );
                    return Some(node);
                }
                Err(e) => {
                    log::debug!(
                        "Cannot resolve {}: {}",
                        device.syspath.display(),
                        e
                    );
                }
            }
        }

        log::debug!("No {} device exposes {}", bus.subsystem(), marker);
        None
    }

    /// Whether a control node can be found, without keeping it.
    pub fn is_capability_present(&self) -> bool {
        self.find_control_node().is_some()
    }
}

/// Find the FocalTech control node on the running system.
pub fn find_control_node() -> Option<PathBuf> {
    Scanner::default().find_control_node()
}

/// Whether the running system has a FocalTech control node.
pub fn is_capability_present() -> bool {
    find_control_node().is_some()
}
