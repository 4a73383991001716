//! Error types for the scene engine

use serde::{Deserialize, Serialize};

/// Error type for scene construction and playback-description operations.
///
/// Every error is a synchronous caller error; transport operations on a
/// [`Remote`](crate::Remote) never fail.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneError {
    /// Time value is negative or not finite
    #[error("Invalid time value: {time}")]
    InvalidTime { time: f64 },

    /// Keyframe time exceeds the owning element's length
    #[error("Keyframe time {time}ms exceeds element length {length}ms")]
    InvalidKeyframeTime { time: f64, length: f64 },

    /// Scene duration must be positive
    #[error("Invalid scene duration: {length}ms")]
    InvalidDuration { length: f64 },

    /// Element window extends past the end of the scene
    #[error("Element window [{start}ms, +{length}ms] extends past scene end {scene_length}ms")]
    WindowOutOfBounds {
        start: f64,
        length: f64,
        scene_length: f64,
    },

    /// Element not found in the scene
    #[error("Element not found: {id}")]
    ElementNotFound { id: String },

    /// Malformed identifier
    #[error("Invalid identifier: {id}")]
    InvalidId { id: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl SceneError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. }
            | Self::InvalidKeyframeTime { .. }
            | Self::InvalidDuration { .. }
            | Self::WindowOutOfBounds { .. } => "validation",
            Self::ElementNotFound { .. } | Self::InvalidId { .. } => "data",
            Self::SerializationError { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}
