use crate::SceneError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SceneId(Uuid);

impl SceneId {
    /// Generate a new scene ID
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a scene ID from a UUID string
    #[inline]
    pub fn from_string(id: impl AsRef<str>) -> Result<Self, SceneError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| SceneError::InvalidId {
                id: id.as_ref().to_string(),
            })
    }

    /// Get the underlying UUID
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SceneId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an element within a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Generate a new element ID
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an element ID from a UUID string
    #[inline]
    pub fn from_string(id: impl AsRef<str>) -> Result<Self, SceneError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| SceneError::InvalidId {
                id: id.as_ref().to_string(),
            })
    }

    /// Get the underlying UUID
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ElementId {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
