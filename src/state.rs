//! Per-backend double-tap-to-wake state.
//!
//! Both backends keep the same state: the last requested `enabled` value and
//! the control node, if one was found or configured. `supported` is never
//! stored separately; it is derived from whether a node is bound, so the two
//! cannot disagree.

use crate::error::Result;
use crate::node::ControlNode;
use std::path::{Path, PathBuf};

/// Double-tap-to-wake state owned by one backend.
///
/// `enabled` starts out `false` and is never read back from hardware.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureState {
    enabled: bool,
    node: Option<ControlNode>,
}

impl GestureState {
    /// State bound to `node`, or unsupported if `None`.
    pub fn new(node: Option<PathBuf>) -> Self {
        Self {
            enabled: false,
            node: node.map(ControlNode::from),
        }
    }

    /// Whether a control node is bound.
    #[inline]
    pub fn supported(&self) -> bool {
        self.node.is_some()
    }

    /// The last requested value.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Path of the bound control node.
    pub fn node_path(&self) -> Option<&Path> {
        self.node.as_ref().map(ControlNode::path)
    }

    /// Rebind to a different node, or unbind with `None`.
    pub fn set_node(&mut self, node: Option<PathBuf>) {
        self.node = node.map(ControlNode::from);
    }

    /// Record `value` and push it to the control node.
    ///
    /// A failed write is logged and otherwise ignored: `enabled` still takes
    /// the new value. Without a node this only updates memory.
    pub fn set_enabled(&mut self, value: bool) {
        log::debug!("Changing double_tap setting: {}", u8::from(value));

        if let Some(node) = &self.node {
            if let Err(e) = node.write(value) {
                log::warn!("{}", e);
            }
        }

        self.enabled = value;
    }

    /// Push `value` to the control node and record it only if that worked.
    ///
    /// Without a node this behaves like [`set_enabled`](Self::set_enabled).
    /// On a failed write `enabled` keeps its previous value.
    pub fn try_set_enabled(&mut self, value: bool) -> Result<()> {
        log::debug!("Changing double_tap setting: {}", u8::from(value));

        if let Some(node) = &self.node {
            node.write(value)?;
        }

        self.enabled = value;
        Ok(())
    }
}
