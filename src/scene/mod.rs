//! Scene data model: keyframes, elements, lifecycles, and the scene itself

pub mod element;
pub mod ids;
pub mod keyframe;
pub mod lifecycle;
#[allow(clippy::module_inception)]
pub mod scene;

pub use element::*;
pub use ids::*;
pub use keyframe::*;
pub use lifecycle::*;
pub use scene::*;
