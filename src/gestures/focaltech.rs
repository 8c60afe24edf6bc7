//! FocalTech touch controllers.
//!
//! FocalTech i2c drivers expose a `fts_gesture_mode` attribute on the touch
//! controller's device. Its presence identifies the controller; writing `1`
//! to it arms the wake gestures.
//!
//! The marker checked during the scan is the control node itself. Older
//! userspace matched on `fts_gesture_mde` while writing `fts_gesture_mode`.
//! Both constants below are intentionally `fts_gesture_mode`; do not split
//! them back apart.

use super::GestureControl;
use crate::error::Result;
use crate::scanner::Scanner;
use crate::state::GestureState;
use std::path::{Path, PathBuf};

/// Bus the controller sits on.
pub const SUBSYSTEM: &str = "i2c";
/// Attribute that identifies a FocalTech controller.
pub const MARKER_ATTRIBUTE: &str = "fts_gesture_mode";
/// Control node, relative to the controller's device directory.
pub const CONTROL_NODE: &str = "fts_gesture_mode";

/// Double-tap-to-wake on a FocalTech controller found by scanning.
///
/// The scan happens once, at construction. If it finds nothing the backend
/// stays unsupported for its whole life; writes then only update memory.
#[derive(Debug, Clone)]
pub struct FocaltechGestures {
    state: GestureState,
}

impl Default for FocaltechGestures {
    fn default() -> Self {
        Self::new()
    }
}

impl FocaltechGestures {
    /// Scan the running system for a FocalTech controller.
    pub fn new() -> Self {
        Self::with_scanner(&Scanner::default())
    }

    /// Scan with custom settings.
    pub fn with_scanner(scanner: &Scanner) -> Self {
        Self::from_node(scanner.find_control_node())
    }

    /// Bind to a node found by other means.
    pub fn from_node(node: Option<PathBuf>) -> Self {
        Self {
            state: GestureState::new(node),
        }
    }
}

impl GestureControl for FocaltechGestures {
    fn supported(&self) -> bool {
        self.state.supported()
    }

    fn enabled(&self) -> bool {
        self.state.enabled()
    }

    fn set_enabled(&mut self, value: bool) {
        self.state.set_enabled(value);
    }

    fn try_set_enabled(&mut self, value: bool) -> Result<()> {
        self.state.try_set_enabled(value)
    }

    fn control_node(&self) -> Option<&Path> {
        self.state.node_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{DOUBLE_TAP_TO_WAKE_ENABLED, DOUBLE_TAP_TO_WAKE_SUPPORTED, PropertyValue};
    use crate::scanner::ScannerConfig;
    use std::fs;

    #[test]
    fn test_unsupported_when_scan_fails() {
        let root = tempfile::tempdir().unwrap();
        let scanner = Scanner::new(ScannerConfig::default().with_sysfs_root(root.path()));

        let gestures = FocaltechGestures::with_scanner(&scanner);
        assert!(!gestures.supported());
        assert!(!gestures.enabled());
        assert_eq!(gestures.control_node(), None);
    }

    #[test]
    fn test_unsupported_writes_are_accepted() {
        let mut gestures = FocaltechGestures::from_node(None);
        gestures.set_enabled(true);
        gestures.set_enabled(true);
        assert!(gestures.enabled());
        assert!(!gestures.supported());
        gestures.try_set_enabled(false).unwrap();
        assert!(!gestures.enabled());
    }

    #[test]
    fn test_writes_reach_node() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join(CONTROL_NODE);
        fs::write(&node, "0").unwrap();

        let mut gestures = FocaltechGestures::from_node(Some(node.clone()));
        assert!(gestures.supported());
        assert!(!gestures.enabled());

        gestures.set_enabled(true);
        assert_eq!(fs::read_to_string(&node).unwrap(), "1");
        assert!(gestures.enabled());

        gestures.set_enabled(false);
        assert_eq!(fs::read_to_string(&node).unwrap(), "0");
        assert!(!gestures.enabled());
    }

    #[test]
    fn test_write_failure_keeps_requested_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut gestures = FocaltechGestures::from_node(Some(dir.path().join("removed")));

        gestures.set_enabled(true);
        assert!(gestures.enabled());
        assert!(gestures.supported());

        let err = gestures.try_set_enabled(false).unwrap_err();
        assert!(err.is_write_failure());
        assert!(gestures.enabled());
    }

    #[test]
    fn test_properties() {
        let dir = tempfile::tempdir().unwrap();
        let node = dir.path().join(CONTROL_NODE);
        fs::write(&node, "0").unwrap();
        let mut gestures = FocaltechGestures::from_node(Some(node.clone()));

        assert_eq!(
            gestures.property(DOUBLE_TAP_TO_WAKE_SUPPORTED).unwrap(),
            PropertyValue::Bool(true)
        );

        gestures
            .set_property(DOUBLE_TAP_TO_WAKE_ENABLED, true.into())
            .unwrap();
        assert_eq!(
            gestures.property(DOUBLE_TAP_TO_WAKE_ENABLED).unwrap(),
            PropertyValue::Bool(true)
        );
        assert_eq!(fs::read_to_string(&node).unwrap(), "1");
    }
}
