//! Double-tap-to-wake backends and the interface they share.
//!
//! Two backends exist:
//! - [`FocaltechGestures`]: finds its control node by scanning the i2c bus
//!   for a FocalTech touch controller.
//! - [`GenericGestures`]: uses a control node supplied from outside, e.g.
//!   by device configuration.
//!
//! [`Gestures`] holds exactly one of them. It is picked once at startup by
//! [`Gestures::select`] and never swapped afterwards.

pub mod focaltech;
pub mod generic;

pub use focaltech::FocaltechGestures;
pub use generic::GenericGestures;

use crate::config::Config;
use crate::error::Result;
use crate::property::{self, PropertyValue};
use crate::scanner::Scanner;
use std::path::Path;

/// The double-tap-to-wake capability as seen by the IPC layer.
///
/// Implementations are driven from one thread. Wrap them in
/// [`SharedGestures`](crate::shared::SharedGestures) for concurrent access.
pub trait GestureControl {
    /// Whether a control node is bound.
    fn supported(&self) -> bool;

    /// The last requested value. Starts out `false`.
    fn enabled(&self) -> bool;

    /// Record `value` and write it to the control node if there is one.
    ///
    /// Never fails: write errors are logged and the new value is kept.
    fn set_enabled(&mut self, value: bool);

    /// Write `value` to the control node and record it only on success.
    fn try_set_enabled(&mut self, value: bool) -> Result<()>;

    /// Path of the bound control node.
    fn control_node(&self) -> Option<&Path>;

    /// Names accepted by [`property`](Self::property).
    fn property_names(&self) -> &'static [&'static str] {
        property::COMMON_PROPERTIES
    }

    /// Read a property by name.
    fn property(&self, name: &str) -> Result<PropertyValue> {
        property::read_common(self, name)
    }

    /// Write a property by name.
    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        property::write_common(self, name, value)
    }
}

/// Which backend is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// FocalTech i2c touch controller.
    Focaltech,
    /// Externally configured control node.
    Generic,
}

/// The backend chosen for this process.
#[derive(Debug, Clone)]
pub enum Gestures {
    /// Control node discovered on the i2c bus.
    Focaltech(FocaltechGestures),
    /// Control node taken from configuration.
    Generic(GenericGestures),
}

impl Gestures {
    /// Pick a backend.
    ///
    /// The FocalTech scan runs first with `config.scanner`. If it finds a
    /// node, that backend is used. Otherwise the generic backend is bound to
    /// `config.touchpanel_dt2w_node`, which may be unset.
    pub fn select(config: &Config) -> Self {
        let focaltech = FocaltechGestures::with_scanner(&Scanner::new(config.scanner.clone()));
        if focaltech.supported() {
            log::info!("Using focaltech double-tap-to-wake backend");
            return Gestures::Focaltech(focaltech);
        }

        let generic = GenericGestures::with_node(config.touchpanel_dt2w_node.clone());
        log::info!(
            "Using generic double-tap-to-wake backend (supported: {})",
            generic.supported()
        );
        Gestures::Generic(generic)
    }

    /// Which backend this is.
    pub fn kind(&self) -> BackendKind {
        match self {
            Gestures::Focaltech(_) => BackendKind::Focaltech,
            Gestures::Generic(_) => BackendKind::Generic,
        }
    }

    fn inner(&self) -> &dyn GestureControl {
        match self {
            Gestures::Focaltech(g) => g,
            Gestures::Generic(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn GestureControl {
        match self {
            Gestures::Focaltech(g) => g,
            Gestures::Generic(g) => g,
        }
    }
}

impl From<FocaltechGestures> for Gestures {
    fn from(gestures: FocaltechGestures) -> Self {
        Gestures::Focaltech(gestures)
    }
}

impl From<GenericGestures> for Gestures {
    fn from(gestures: GenericGestures) -> Self {
        Gestures::Generic(gestures)
    }
}

impl GestureControl for Gestures {
    fn supported(&self) -> bool {
        self.inner().supported()
    }

    fn enabled(&self) -> bool {
        self.inner().enabled()
    }

    fn set_enabled(&mut self, value: bool) {
        self.inner_mut().set_enabled(value);
    }

    fn try_set_enabled(&mut self, value: bool) -> Result<()> {
        self.inner_mut().try_set_enabled(value)
    }

    fn control_node(&self) -> Option<&Path> {
        self.inner().control_node()
    }

    fn property_names(&self) -> &'static [&'static str] {
        self.inner().property_names()
    }

    fn property(&self, name: &str) -> Result<PropertyValue> {
        self.inner().property(name)
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        self.inner_mut().set_property(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::property::{
        DOUBLE_TAP_TO_WAKE_ENABLED, DOUBLE_TAP_TO_WAKE_SUPPORTED, TOUCHPANEL_DT2W_NODE,
    };
    use crate::scanner::ScannerConfig;
    use std::fs;
    use std::path::PathBuf;

    fn empty_sysfs() -> tempfile::TempDir {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("bus/i2c/devices")).unwrap();
        root
    }

    #[test]
    fn test_select_falls_back_to_generic() {
        let root = empty_sysfs();
        let config = Config::default()
            .with_scanner(ScannerConfig::default().with_sysfs_root(root.path()));

        let gestures = Gestures::select(&config);
        assert_eq!(gestures.kind(), BackendKind::Generic);
        assert!(!gestures.supported());
        assert_eq!(gestures.control_node(), None);
    }

    #[test]
    fn test_select_generic_with_configured_node() {
        let root = empty_sysfs();
        let config = Config::default()
            .with_scanner(ScannerConfig::default().with_sysfs_root(root.path()))
            .with_touchpanel_dt2w_node("/proc/touchpanel/double_tap_enable");

        let gestures = Gestures::select(&config);
        assert_eq!(gestures.kind(), BackendKind::Generic);
        assert!(gestures.supported());
        assert_eq!(
            gestures.control_node(),
            Some(Path::new("/proc/touchpanel/double_tap_enable"))
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_select_prefers_focaltech() {
        use std::os::unix::fs::symlink;

        let root = empty_sysfs();
        let real = root.path().join("devices/i2c-2/2-0038");
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join(focaltech::MARKER_ATTRIBUTE), "0").unwrap();
        symlink(&real, root.path().join("bus/i2c/devices/2-0038")).unwrap();

        let config = Config::default()
            .with_scanner(ScannerConfig::default().with_sysfs_root(root.path()))
            .with_touchpanel_dt2w_node("/proc/touchpanel/double_tap_enable");

        let mut gestures = Gestures::select(&config);
        assert_eq!(gestures.kind(), BackendKind::Focaltech);
        assert!(gestures.supported());

        let node = fs::canonicalize(&real).unwrap().join(focaltech::CONTROL_NODE);
        assert_eq!(gestures.control_node(), Some(node.as_path()));

        gestures.set_enabled(true);
        assert_eq!(fs::read_to_string(&node).unwrap(), "1");
    }

    #[test]
    fn test_property_names_per_backend() {
        let focaltech = Gestures::from(FocaltechGestures::from_node(None));
        assert_eq!(
            focaltech.property_names(),
            &[DOUBLE_TAP_TO_WAKE_SUPPORTED, DOUBLE_TAP_TO_WAKE_ENABLED]
        );

        let generic = Gestures::from(GenericGestures::new());
        assert!(generic.property_names().contains(&TOUCHPANEL_DT2W_NODE));
    }

    #[test]
    fn test_properties_through_enum() {
        let mut gestures = Gestures::from(GenericGestures::new());
        assert_eq!(
            gestures.property(DOUBLE_TAP_TO_WAKE_SUPPORTED).unwrap(),
            PropertyValue::Bool(false)
        );

        gestures
            .set_property(TOUCHPANEL_DT2W_NODE, PathBuf::from("/tmp/node").into())
            .unwrap();
        assert_eq!(
            gestures.property(DOUBLE_TAP_TO_WAKE_SUPPORTED).unwrap(),
            PropertyValue::Bool(true)
        );

        let err = gestures
            .set_property(DOUBLE_TAP_TO_WAKE_SUPPORTED, false.into())
            .unwrap_err();
        assert!(matches!(err, Error::ReadOnlyProperty(_)));
    }

    #[test]
    fn test_focaltech_rejects_node_property() {
        let mut gestures = Gestures::from(FocaltechGestures::from_node(None));
        let err = gestures.property(TOUCHPANEL_DT2W_NODE).unwrap_err();
        assert!(matches!(err, Error::UnknownProperty(_)));

        let err = gestures
            .set_property(TOUCHPANEL_DT2W_NODE, PropertyValue::Path(None))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownProperty(_)));
    }
}
