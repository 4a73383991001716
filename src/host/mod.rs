//! The capability boundary between the engine and its host.
//!
//! The engine never advances a clock or mutates presented visual state
//! itself; it describes what to show through [`VisualStyle`] and
//! [`Lifecycle`](crate::Lifecycle) values and drives playback through
//! [`AnimationHandle`]s supplied by a [`SceneHost`]. [`clock::ClockHost`] is
//! the built-in reference host.

pub mod clock;

use crate::scene::element::Origin;
use crate::scene::lifecycle::Lifecycle;
use crate::SceneTime;
use serde::{Deserialize, Serialize};

/// Background of a visual: nothing, or an image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Background {
    #[default]
    Transparent,
    Image(String),
}

/// How a visual is positioned within its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Positioned in flow; used for the scene root
    Relative,
    /// Positioned against the root; used for elements
    Absolute,
}

/// Style bag a host realizes a visual from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub width: f64,
    pub height: f64,
    pub placement: Placement,
    pub visible: bool,
    pub origin: Origin,
    pub scale: f64,
    pub background: Background,
}

/// What a handle presents once its timeline ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Revert to the pre-animation state
    None,
    /// Hold the final frame
    Forwards,
}

/// Timing configuration shared by every handle of one scene realization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackOptions {
    /// Timeline duration; always the owning scene's length
    pub duration: SceneTime,
    /// Number of iterations to play
    pub iterations: u32,
    /// Fill behavior after the final iteration
    pub fill: FillMode,
}

impl PlaybackOptions {
    /// Single forward pass holding the final frame
    #[inline]
    pub fn once(duration: impl Into<SceneTime>) -> Self {
        Self {
            duration: duration.into(),
            iterations: 1,
            fill: FillMode::Forwards,
        }
    }
}

/// Observer invoked once when a handle's timeline completes, then discarded
pub type FinishCallback = Box<dyn FnOnce()>;

/// A native playback object bound to one visual and one lifecycle.
///
/// Handles are created paused. Restarting a finished handle rewinds it to
/// the start of its timeline.
pub trait AnimationHandle {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback, holding the current position
    fn pause(&mut self);

    /// Get the current timeline position
    fn current_time(&self) -> SceneTime;

    /// Set the current timeline position; no clamping is applied
    fn set_current_time(&mut self, time: SceneTime);

    /// Set the playback rate multiplier
    fn set_playback_rate(&mut self, rate: f64);

    /// Register an observer for timeline completion
    fn on_finish(&mut self, callback: FinishCallback);
}

/// The native capabilities a host provides to realize a scene
pub trait SceneHost {
    /// Opaque visual produced by this host
    type Visual;
    /// Playback handle produced by this host
    type Handle: AnimationHandle;

    /// Create a visual with the given style
    fn create_visual(&mut self, style: &VisualStyle) -> Self::Visual;

    /// Append a child visual under a parent
    fn append(&mut self, parent: &mut Self::Visual, child: Self::Visual);

    /// Bind a lifecycle to a visual, producing a paused handle
    fn create_handle(
        &mut self,
        visual: &Self::Visual,
        lifecycle: Lifecycle,
        options: &PlaybackOptions,
    ) -> Self::Handle;
}
