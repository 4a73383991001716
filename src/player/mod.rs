//! Playback coordination across a realization's animation handles

pub mod playback_state;
pub mod remote;

pub use playback_state::*;
pub use remote::*;
