use crate::SceneTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A scalar property value carried by a keyframe.
///
/// The engine treats property bags as opaque; values pass through to the
/// native animation primitive unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Numeric value
    Number(f64),
    /// Textual value
    Text(String),
}

impl PropertyValue {
    /// Get the numeric value, if this is a number
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Get the textual value, if this is text
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Property bag mapping property names to scalar values
pub type PropertyMap = HashMap<String, PropertyValue>;

/// A keyframe in an element's timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Offset within the owning element's length
    pub time: SceneTime,
    /// Property values at this keyframe
    pub properties: PropertyMap,
}

impl Keyframe {
    /// Create a new keyframe
    #[inline]
    pub fn new(time: impl Into<SceneTime>, properties: PropertyMap) -> Self {
        Self {
            time: time.into(),
            properties,
        }
    }

    /// Add a property
    #[inline]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}
