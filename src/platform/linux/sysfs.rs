//! sysfs bus enumeration.

use crate::bus::{BusDevice, DeviceBus};
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Snapshot of the devices registered on a sysfs bus subsystem.
///
/// The directory listing is taken once in [`SysfsBus::open`]; later hotplug
/// events are not observed. Dropping the value releases nothing but memory.
#[derive(Debug)]
pub struct SysfsBus {
    subsystem: String,
    devices: Vec<BusDevice>,
}

impl SysfsBus {
    /// Enumerate `<root>/bus/<subsystem>/devices`.
    pub fn open(root: &Path, subsystem: &str) -> Result<Self> {
        let dir = root.join("bus").join(subsystem).join("devices");

        let entries = fs::read_dir(&dir).map_err(|e| Error::BusUnavailable {
            subsystem: subsystem.to_string(),
            source: e,
        })?;

        let mut devices = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let sysname = entry.file_name().to_string_lossy().into_owned();
                    devices.push(BusDevice::new(sysname, entry.path()));
                }
                Err(e) => {
                    log::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                }
            }
        }

        log::debug!("{} bus lists {} devices", subsystem, devices.len());

        Ok(Self {
            subsystem: subsystem.to_string(),
            devices,
        })
    }
}

impl DeviceBus for SysfsBus {
    fn subsystem(&self) -> &str {
        &self.subsystem
    }

    fn devices(&self) -> &[BusDevice] {
        &self.devices
    }

    fn has_attribute(&self, device: &BusDevice, attribute: &str) -> bool {
        // An attribute exists only if its value can be read, same as udev.
        fs::read(device.syspath.join(attribute)).is_ok()
    }

    fn canonical_path(&self, device: &BusDevice) -> io::Result<PathBuf> {
        fs::canonicalize(&device.syspath)
    }
}
