//! Property identifiers and values
//!
//! Identifiers reuse the platform's numeric property ids so that values
//! fetched by a tree walker can be stored without translation.

use serde::{Deserialize, Serialize};

/// Platform property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub i32);

impl PropertyId {
    pub const BOUNDING_RECTANGLE: PropertyId = PropertyId(30001);
    pub const PROCESS_ID: PropertyId = PropertyId(30002);
    pub const CONTROL_TYPE: PropertyId = PropertyId(30003);
    pub const LOCALIZED_CONTROL_TYPE: PropertyId = PropertyId(30004);
    pub const NAME: PropertyId = PropertyId(30005);
    pub const IS_KEYBOARD_FOCUSABLE: PropertyId = PropertyId(30009);
    pub const AUTOMATION_ID: PropertyId = PropertyId(30011);
    pub const CLASS_NAME: PropertyId = PropertyId(30012);
    pub const HELP_TEXT: PropertyId = PropertyId(30013);
    pub const NATIVE_WINDOW_HANDLE: PropertyId = PropertyId(30020);
    pub const IS_OFF_SCREEN: PropertyId = PropertyId(30022);
    pub const FRAMEWORK_ID: PropertyId = PropertyId(30024);
    pub const ITEM_STATUS: PropertyId = PropertyId(30026);
    pub const SCROLL_HORIZONTALLY_SCROLLABLE: PropertyId = PropertyId(30057);
    pub const SCROLL_VERTICALLY_SCROLLABLE: PropertyId = PropertyId(30058);
    pub const LANDMARK_TYPE: PropertyId = PropertyId(30157);
    pub const LOCALIZED_LANDMARK_TYPE: PropertyId = PropertyId(30158);
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A property value as captured from the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Doubles(Vec<f64>),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            PropertyValue::Doubles(d) => Some(d),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(i64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(value: Vec<f64>) -> Self {
        PropertyValue::Doubles(value)
    }
}
