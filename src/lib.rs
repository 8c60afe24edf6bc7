//! # tapwake
//!
//! Double-tap-to-wake for Linux touch panels, exposed as one uniform
//! property regardless of which touch controller driver is present.
//!
//! ## Features
//!
//! - Control node discovery by scanning a sysfs bus for a driver attribute
//! - FocalTech backend (self-discovering) and a generic backend (configured path)
//! - Named properties ready to be bound to an IPC layer
//! - Safe degradation: missing hardware reads as unsupported, never as an error
//! - Optional JSON configuration (`serde` feature) and async handle (`tokio` feature)
//!
//! ## Quick Start
//!
//! ```no_run
//! use tapwake::{Config, GestureControl, Gestures};
//!
//! let mut gestures = Gestures::select(&Config::default());
//! println!("backend: {:?}", gestures.kind());
//!
//! if gestures.supported() {
//!     gestures.set_enabled(true);
//! }
//! ```
//!
//! ### Probing Only
//!
//! ```no_run
//! if tapwake::is_capability_present() {
//!     println!("FocalTech double-tap-to-wake node found");
//! }
//! ```
//!
//! ## Architecture
//!
//! The [`scanner`] walks `/sys/bus/<subsystem>/devices` and stops at the
//! first device exposing the marker attribute. Each backend keeps its own
//! [`state::GestureState`]; `supported` is derived from whether a control
//! node is bound. Writes open the node, write `0` or `1`, and close it.
//! Nothing is read back from hardware.

pub mod bus;
pub mod config;
pub mod error;
pub mod gestures;
pub mod node;
pub mod property;
pub mod scanner;
pub mod shared;
pub mod state;

mod platform;

// Re-exports
pub use bus::{BusDevice, DeviceBus};
pub use config::Config;
pub use error::{Error, Result};
pub use gestures::{BackendKind, FocaltechGestures, GenericGestures, GestureControl, Gestures};
pub use node::ControlNode;
pub use platform::SysfsBus;
pub use property::{
    DOUBLE_TAP_TO_WAKE_ENABLED, DOUBLE_TAP_TO_WAKE_SUPPORTED, PropertyValue, TOUCHPANEL_DT2W_NODE,
};
pub use scanner::{Scanner, ScannerConfig, find_control_node, is_capability_present};
#[cfg(feature = "tokio")]
pub use shared::AsyncSharedGestures;
pub use shared::SharedGestures;
