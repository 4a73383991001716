//! Reference host driven by one manually advanced clock.
//!
//! Instead of mutating N independent native clocks, every handle projects its
//! position from the single clock advanced by [`ClockHost::advance`], so
//! elements that are nominally synchronized can never drift apart between
//! frames. The host doubles as the test double for the engine's own suite.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{
    AnimationHandle, FillMode, FinishCallback, PlaybackOptions, SceneHost, VisualStyle,
};
use crate::scene::lifecycle::Lifecycle;
use crate::SceneTime;

#[derive(Debug)]
struct VisualNode {
    style: VisualStyle,
    children: Vec<ClockVisual>,
}

/// A visual realized by [`ClockHost`]; records its style and child list so
/// realizations can be inspected
#[derive(Debug, Clone)]
pub struct ClockVisual {
    node: Rc<RefCell<VisualNode>>,
}

impl ClockVisual {
    fn new(style: VisualStyle) -> Self {
        Self {
            node: Rc::new(RefCell::new(VisualNode {
                style,
                children: Vec::new(),
            })),
        }
    }

    /// Get a copy of this visual's style
    pub fn style(&self) -> VisualStyle {
        self.node.borrow().style.clone()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.node.borrow().children.len()
    }

    /// Get a direct child by index
    pub fn child(&self, index: usize) -> Option<ClockVisual> {
        self.node.borrow().children.get(index).cloned()
    }
}

struct HandleState {
    lifecycle: Lifecycle,
    duration_ms: f64,
    fill: FillMode,
    current_ms: f64,
    rate: f64,
    playing: bool,
    finished: bool,
    observers: Vec<FinishCallback>,
}

/// Handle produced by [`ClockHost`]; a façade over state owned by the host's
/// clock loop
pub struct ClockHandle {
    state: Rc<RefCell<HandleState>>,
}

impl ClockHandle {
    /// Number of lifecycle frames bound to this handle
    pub fn frame_count(&self) -> usize {
        self.state.borrow().lifecycle.len()
    }

    /// Whether this handle's timeline has completed
    pub fn is_finished(&self) -> bool {
        self.state.borrow().finished
    }

    /// Whether this handle is advancing with the clock
    pub fn is_playing(&self) -> bool {
        self.state.borrow().playing
    }
}

impl AnimationHandle for ClockHandle {
    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        if state.finished {
            state.current_ms = 0.0;
            state.finished = false;
        }
        state.playing = true;
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn current_time(&self) -> SceneTime {
        SceneTime::from(self.state.borrow().current_ms)
    }

    fn set_current_time(&mut self, time: SceneTime) {
        let mut state = self.state.borrow_mut();
        state.current_ms = time.as_millis();
        if state.current_ms < state.duration_ms {
            state.finished = false;
        }
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.state.borrow_mut().rate = rate;
    }

    fn on_finish(&mut self, callback: FinishCallback) {
        self.state.borrow_mut().observers.push(callback);
    }
}

/// Host implementation backed by a shared virtual clock.
///
/// `advance(delta)` moves every playing handle by `delta × rate` in one call,
/// fires completion observers for handles that reach their duration, and
/// leaves paused handles untouched. Reverse playback holds at zero.
#[derive(Default)]
pub struct ClockHost {
    handles: Vec<Rc<RefCell<HandleState>>>,
    now: SceneTime,
}

impl ClockHost {
    /// Create a new host with its clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time this host's clock has advanced
    pub fn now(&self) -> SceneTime {
        self.now
    }

    /// Number of handles ever created by this host
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Advance the shared clock, moving every playing handle
    pub fn advance(&mut self, delta: impl Into<SceneTime>) {
        let delta = delta.into();
        self.now += delta;

        for shared in &self.handles {
            let fired = {
                let mut state = shared.borrow_mut();
                if !state.playing || state.finished {
                    Vec::new()
                } else {
                    state.current_ms += delta.as_millis() * state.rate;
                    if state.rate >= 0.0 && state.current_ms >= state.duration_ms {
                        state.current_ms = match state.fill {
                            FillMode::Forwards => state.duration_ms,
                            FillMode::None => 0.0,
                        };
                        state.playing = false;
                        state.finished = true;
                        std::mem::take(&mut state.observers)
                    } else {
                        if state.current_ms < 0.0 {
                            state.current_ms = 0.0;
                            state.playing = false;
                        }
                        Vec::new()
                    }
                }
            };
            for observer in fired {
                observer();
            }
        }
    }
}

impl SceneHost for ClockHost {
    type Visual = ClockVisual;
    type Handle = ClockHandle;

    fn create_visual(&mut self, style: &VisualStyle) -> ClockVisual {
        ClockVisual::new(style.clone())
    }

    fn append(&mut self, parent: &mut ClockVisual, child: ClockVisual) {
        parent.node.borrow_mut().children.push(child);
    }

    fn create_handle(
        &mut self,
        _visual: &ClockVisual,
        lifecycle: Lifecycle,
        options: &PlaybackOptions,
    ) -> ClockHandle {
        let state = Rc::new(RefCell::new(HandleState {
            lifecycle,
            duration_ms: options.duration.as_millis(),
            fill: options.fill,
            current_ms: 0.0,
            rate: 1.0,
            playing: false,
            finished: false,
            observers: Vec::new(),
        }));
        self.handles.push(Rc::clone(&state));
        ClockHandle { state }
    }
}
