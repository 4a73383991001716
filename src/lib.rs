//! Scene Player
//!
//! A scene/timeline animation engine: sparse per-element keyframes are
//! normalized into full-timeline animation descriptions, realized through a
//! host-provided animation primitive, and driven as one logical transport.
//!
//! The engine itself is synchronous and single-threaded; only the effects
//! (visual progression over time) are asynchronous, driven by the host's
//! animation scheduler outside this crate.

pub mod config;
pub mod error;
pub mod host;
pub mod player;
pub mod project;
pub mod scene;
pub mod time;

// Re-export common types for convenience
pub use config::{BuildConfig, OverrunPolicy};
pub use error::SceneError;
pub use host::{
    AnimationHandle, Background, FillMode, FinishCallback, Placement, PlaybackOptions, SceneHost,
    VisualStyle,
};
pub use player::{PlayState, Remote};
pub use project::{Asset, Project};
pub use scene::{
    Element, ElementId, ElementKind, Keyframe, Lifecycle, LifecycleFrame, Origin, PropertyMap,
    PropertyValue, Realization, Scene, SceneId,
};
pub use time::{SceneTime, Window};

/// Scene engine result type
pub type Result<T> = core::result::Result<T, SceneError>;
