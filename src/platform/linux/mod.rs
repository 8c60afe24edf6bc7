//! Linux platform implementation.
//!
//! Devices are discovered through sysfs. Each bus subsystem lists its devices
//! as symlinks under `/sys/bus/<subsystem>/devices`, pointing at the real
//! device directory in `/sys/devices`. Driver attributes are plain files in
//! that directory.
//!
//! ## Permissions
//!
//! Enumeration and attribute reads work as any user. Writing a control node
//! normally requires root or a udev rule granting write access:
//! ```text
//! ACTION=="add", SUBSYSTEM=="i2c", ATTR{fts_gesture_mode}=="*", \
//!     RUN+="/bin/chmod 0664 %S%p/fts_gesture_mode"
//! ```

mod sysfs;

pub use sysfs::SysfsBus;
