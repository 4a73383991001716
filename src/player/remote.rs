use std::cell::Cell;
use std::rc::Rc;

use crate::host::AnimationHandle;
use crate::player::playback_state::PlayState;
use crate::scene::ids::SceneId;
use crate::SceneTime;

/// The playback controller for one scene realization.
///
/// A remote owns one animation handle per realized element and applies every
/// transport operation across all of them in collection order, so the whole
/// scene behaves as a single logical transport. Transport operations never
/// fail; on an empty handle collection they are no-ops.
///
/// Completion is observed on the first handle only. All handles share one
/// timing configuration, so the first handle is representative, but this is
/// an approximation rather than an all-handles barrier.
///
/// A remote is superseded once its scene is rebuilt; discard it and use the
/// new realization's remote.
pub struct Remote<H: AnimationHandle> {
    scene_id: SceneId,
    handles: Vec<H>,
    state: PlayState,
    finished: Rc<Cell<bool>>,
}

impl<H: AnimationHandle> Remote<H> {
    /// Wrap a handle collection, pausing every handle
    pub(crate) fn new(scene_id: SceneId, mut handles: Vec<H>) -> Self {
        for handle in &mut handles {
            handle.pause();
        }
        Self {
            scene_id,
            handles,
            state: PlayState::Paused,
            finished: Rc::new(Cell::new(false)),
        }
    }

    /// ID of the scene this remote controls
    #[inline]
    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    /// Number of handles under this remote
    #[inline]
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Get the handles in element render order
    #[inline]
    pub fn handles(&self) -> &[H] {
        &self.handles
    }

    /// Current aggregate playback state
    pub fn play_state(&self) -> PlayState {
        if self.state.is_running() && self.finished.get() {
            PlayState::Finished
        } else {
            self.state
        }
    }

    /// Start every handle.
    ///
    /// A no-op when there are no handles: the state stays paused. Otherwise
    /// the state becomes running and a completion observer is attached to
    /// the first handle; when that handle's timeline completes while still
    /// running, the aggregate state reads finished until the next play.
    pub fn play(&mut self) {
        if self.handles.is_empty() {
            log::debug!("play ignored on scene {}: no handles", self.scene_id);
            return;
        }

        for handle in &mut self.handles {
            handle.play();
        }
        self.state = PlayState::Running;
        self.finished.set(false);

        let finished = Rc::clone(&self.finished);
        if let Some(first) = self.handles.first_mut() {
            first.on_finish(Box::new(move || finished.set(true)));
        }
    }

    /// Pause every handle
    pub fn pause(&mut self) {
        for handle in &mut self.handles {
            handle.pause();
        }
        self.state = PlayState::Paused;
    }

    /// Set every handle's current position, independent of prior state.
    /// No clamping is applied.
    pub fn seek(&mut self, position: impl Into<SceneTime>) {
        let position = position.into();
        for handle in &mut self.handles {
            handle.set_current_time(position);
        }
    }

    /// Set every handle's playback rate; the play state is unchanged
    pub fn set_playback_rate(&mut self, rate: f64) {
        for handle in &mut self.handles {
            handle.set_playback_rate(rate);
        }
    }

    /// Rewind to the beginning; equivalent to `seek(0)`
    pub fn start(&mut self) {
        self.seek(SceneTime::zero());
    }
}
