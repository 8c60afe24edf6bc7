//! Named properties for exposing a backend over IPC.
//!
//! The IPC layer addresses backends by property name rather than by method.
//! Every backend answers [`DOUBLE_TAP_TO_WAKE_SUPPORTED`] and
//! [`DOUBLE_TAP_TO_WAKE_ENABLED`]; the generic backend also answers
//! [`TOUCHPANEL_DT2W_NODE`].

use crate::error::{Error, Result};
use crate::gestures::GestureControl;
use std::path::PathBuf;

/// Read-only boolean: whether a control node is bound.
pub const DOUBLE_TAP_TO_WAKE_SUPPORTED: &str = "double-tap-to-wake-supported";
/// Read-write boolean: whether double-tap-to-wake is enabled.
pub const DOUBLE_TAP_TO_WAKE_ENABLED: &str = "double-tap-to-wake-enabled";
/// Read-write path: externally supplied control node (generic backend only).
pub const TOUCHPANEL_DT2W_NODE: &str = "touchpanel-dt2w-node";

/// Properties shared by every backend.
pub const COMMON_PROPERTIES: &[&str] = &[DOUBLE_TAP_TO_WAKE_SUPPORTED, DOUBLE_TAP_TO_WAKE_ENABLED];

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Boolean property.
    Bool(bool),
    /// Path property; `None` means unset.
    Path(Option<PathBuf>),
}

impl PropertyValue {
    /// The boolean inside, or a type error naming `property`.
    pub fn as_bool(&self, property: &str) -> Result<bool> {
        match self {
            PropertyValue::Bool(value) => Ok(*value),
            PropertyValue::Path(_) => Err(Error::PropertyType {
                name: property.to_string(),
                expected: "boolean",
            }),
        }
    }

    /// The path inside, or a type error naming `property`.
    pub fn into_path(self, property: &str) -> Result<Option<PathBuf>> {
        match self {
            PropertyValue::Path(path) => Ok(path),
            PropertyValue::Bool(_) => Err(Error::PropertyType {
                name: property.to_string(),
                expected: "path",
            }),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Option<PathBuf>> for PropertyValue {
    fn from(value: Option<PathBuf>) -> Self {
        PropertyValue::Path(value)
    }
}

impl From<PathBuf> for PropertyValue {
    fn from(value: PathBuf) -> Self {
        PropertyValue::Path(Some(value))
    }
}

/// Read one of the [`COMMON_PROPERTIES`].
pub(crate) fn read_common<G: GestureControl + ?Sized>(
    gestures: &G,
    name: &str,
) -> Result<PropertyValue> {
    match name {
        DOUBLE_TAP_TO_WAKE_SUPPORTED => Ok(PropertyValue::Bool(gestures.supported())),
        DOUBLE_TAP_TO_WAKE_ENABLED => Ok(PropertyValue::Bool(gestures.enabled())),
        _ => Err(Error::UnknownProperty(name.to_string())),
    }
}

/// Write one of the [`COMMON_PROPERTIES`].
pub(crate) fn write_common<G: GestureControl + ?Sized>(
    gestures: &mut G,
    name: &str,
    value: PropertyValue,
) -> Result<()> {
    match name {
        DOUBLE_TAP_TO_WAKE_ENABLED => {
            gestures.set_enabled(value.as_bool(name)?);
            Ok(())
        }
        DOUBLE_TAP_TO_WAKE_SUPPORTED => Err(Error::ReadOnlyProperty(name.to_string())),
        _ => Err(Error::UnknownProperty(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_bool() {
        assert!(PropertyValue::Bool(true).as_bool("x").unwrap());
        let err = PropertyValue::Path(None).as_bool("x").unwrap_err();
        assert!(matches!(err, Error::PropertyType { expected: "boolean", .. }));
    }

    #[test]
    fn test_into_path() {
        let value = PropertyValue::from(PathBuf::from("/tmp/node"));
        assert_eq!(
            value.into_path("x").unwrap(),
            Some(PathBuf::from("/tmp/node"))
        );
        let err = PropertyValue::from(false).into_path("x").unwrap_err();
        assert!(matches!(err, Error::PropertyType { expected: "path", .. }));
    }
}
