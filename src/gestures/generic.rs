//! Generic backend driven by an externally supplied control node.

use super::GestureControl;
use crate::error::Result;
use crate::property::{self, PropertyValue, TOUCHPANEL_DT2W_NODE};
use crate::state::GestureState;
use std::path::{Path, PathBuf};

const PROPERTIES: &[&str] = &[
    property::DOUBLE_TAP_TO_WAKE_SUPPORTED,
    property::DOUBLE_TAP_TO_WAKE_ENABLED,
    TOUCHPANEL_DT2W_NODE,
];

/// Double-tap-to-wake through a node path set from outside.
///
/// `supported` follows the node: it is recomputed every time the node is
/// assigned.
#[derive(Debug, Clone, Default)]
pub struct GenericGestures {
    state: GestureState,
}

impl GenericGestures {
    /// A backend with no node, hence unsupported.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend bound to `node`.
    pub fn with_node(node: Option<PathBuf>) -> Self {
        Self {
            state: GestureState::new(node),
        }
    }

    /// Assign or clear the control node.
    ///
    /// `enabled` is kept as is and nothing is written to the new node.
    pub fn set_node(&mut self, node: Option<PathBuf>) {
        match &node {
            Some(path) => log::debug!("Setting touchpanel dt2w node: {}", path.display()),
            None => log::debug!("Clearing touchpanel dt2w node"),
        }
        self.state.set_node(node);
    }

    /// Whether a freshly built generic backend is supported.
    ///
    /// Always `false`: without configuration there is no node.
    pub fn is_supported() -> bool {
        Self::new().supported()
    }
}

impl GestureControl for GenericGestures {
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

    fn property_names(&self) -> &'static [&'static str] {
        PROPERTIES
    }

    fn property(&self, name: &str) -> Result<PropertyValue> {
        match name {
            TOUCHPANEL_DT2W_NODE => Ok(PropertyValue::Path(
                self.control_node().map(Path::to_path_buf),
            )),
            _ => property::read_common(self, name),
        }
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            TOUCHPANEL_DT2W_NODE => {
                self.set_node(value.into_path(name)?);
                Ok(())
            }
            _ => property::write_common(self, name, value),
        }
    }
}
