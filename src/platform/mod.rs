//! Platform-specific bus implementations.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::*;

// Other platforms have no sysfs; every scan reports the bus as unavailable.
#[cfg(not(target_os = "linux"))]
mod stub {
    use crate::bus::{BusDevice, DeviceBus};
    use crate::error::{Error, Result};
    use std::io;
    use std::path::{Path, PathBuf};

    pub struct SysfsBus {
        subsystem: String,
    }

    impl SysfsBus {
        pub fn open(_root: &Path, subsystem: &str) -> Result<Self> {
            Err(Error::BusUnavailable {
                subsystem: subsystem.to_string(),
                source: io::Error::new(io::ErrorKind::Unsupported, "sysfs requires Linux"),
            })
        }
    }

    impl DeviceBus for SysfsBus {
        fn subsystem(&self) -> &str {
            &self.subsystem
        }

        fn devices(&self) -> &[BusDevice] {
            &[]
        }

        fn has_attribute(&self, _device: &BusDevice, _attribute: &str) -> bool {
            false
        }

        fn canonical_path(&self, _device: &BusDevice) -> io::Result<PathBuf> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "sysfs requires Linux"))
        }
    }
}

#[cfg(not(target_os = "linux"))]
pub use stub::*;
