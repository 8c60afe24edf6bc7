//! Bus enumeration abstraction.
//!
//! The scanner only needs three things from a bus: the list of devices that
//! were registered when the bus was opened, whether a device exposes a given
//! driver attribute, and the canonical location of a device on disk. The
//! sysfs implementation lives in the platform module; tests provide their own.

use std::io;
use std::path::PathBuf;

/// A device registered on a bus subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusDevice {
    /// Kernel name of the device (e.g. `2-0038`).
    pub sysname: String,
    /// Path of the device entry as listed by the bus. Usually a symlink.
    pub syspath: PathBuf,
}

impl BusDevice {
    /// Create a device entry.
    pub fn new(sysname: impl Into<String>, syspath: impl Into<PathBuf>) -> Self {
        Self {
            sysname: sysname.into(),
            syspath: syspath.into(),
        }
    }
}

/// An enumerated bus subsystem.
///
/// Implementations hold a snapshot of the devices present when the bus was
/// opened. Device order is whatever the operating system reported and is not
/// sorted.
pub trait DeviceBus {
    /// Name of the subsystem (e.g. `i2c`).
    fn subsystem(&self) -> &str;

    /// Devices in enumeration order.
    fn devices(&self) -> &[BusDevice];

    /// Whether the device's driver exposes `attribute`.
    fn has_attribute(&self, device: &BusDevice, attribute: &str) -> bool;

    /// Resolve the device's canonical directory, following symlinks.
    fn canonical_path(&self, device: &BusDevice) -> io::Result<PathBuf>;
}
