use crate::config::OverrunPolicy;
use crate::host::{Background, Placement, VisualStyle};
use crate::scene::ids::ElementId;
use crate::scene::keyframe::{Keyframe, PropertyMap};
use crate::scene::lifecycle::{Lifecycle, LifecycleFrame};
use crate::time::Window;
use crate::{SceneError, SceneTime};
use serde::{Deserialize, Serialize};

/// 2D point used as an element's transform origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<(f64, f64)> for Origin {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The closed set of element kinds.
///
/// Every kind shares the same capability set: it owns keyframes, realizes a
/// visual, and produces a lifecycle. New kinds (text, video) extend this
/// enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum ElementKind {
    /// A plain block with no intrinsic content
    #[default]
    Block,
    /// A block backed by an image
    Image { src: String },
}

/// A timed element within a scene.
///
/// An element occupies the `[start, start + length]` window of its scene's
/// timeline and carries its own keyframe sequence with times local to that
/// window. It holds no reference back to the scene; the scene's total length
/// is passed in when the lifecycle is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier
    pub id: ElementId,
    /// Visual width in pixels
    pub width: f64,
    /// Visual height in pixels
    pub height: f64,
    /// Uniform scale applied at realization
    pub scale: f64,
    /// Transform origin
    pub origin: Origin,
    /// Offset of this element's window within the scene
    pub start: SceneTime,
    kind: ElementKind,
    length: SceneTime,
    keyframes: Vec<Keyframe>,
}

impl Element {
    /// Create a plain block element
    #[inline]
    pub fn new(
        width: f64,
        height: f64,
        start: impl Into<SceneTime>,
        length: impl Into<SceneTime>,
    ) -> Self {
        Self {
            id: ElementId::new(),
            width,
            height,
            scale: 1.0,
            origin: Origin::zero(),
            start: start.into(),
            kind: ElementKind::Block,
            length: length.into(),
            keyframes: Vec::new(),
        }
    }

    /// Create an image-backed element
    #[inline]
    pub fn image(
        width: f64,
        height: f64,
        start: impl Into<SceneTime>,
        length: impl Into<SceneTime>,
        src: impl Into<String>,
    ) -> Self {
        let mut element = Self::new(width, height, start, length);
        element.kind = ElementKind::Image { src: src.into() };
        element
    }

    /// Get this element's kind
    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Get the duration of this element's active window
    #[inline]
    pub fn length(&self) -> SceneTime {
        self.length
    }

    /// Get the keyframes in ascending time order
    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Get this element's `[start, start + length]` window on the scene
    /// timeline
    #[inline]
    pub fn window(&self) -> Window {
        Window::from_start_length(self.start, self.length)
    }

    /// Reassign the element's length, rescaling every keyframe time by
    /// `new / old` so the shape of the motion is preserved proportionally.
    ///
    /// This is destructive: rescaled times replace the originals. When the
    /// current length is zero all keyframes already sit at zero and only the
    /// length changes.
    pub fn set_length(&mut self, length: impl Into<SceneTime>) {
        let length = length.into();
        if !self.length.is_zero() {
            let ratio = length.as_nanos() as f64 / self.length.as_nanos() as f64;
            for keyframe in &mut self.keyframes {
                keyframe.time = keyframe.time.scale(ratio);
            }
        }
        self.length = length;
    }

    /// Insert a keyframe, keeping the sequence sorted ascending by time.
    ///
    /// A new keyframe lands after any existing keyframes with the same time,
    /// so earlier insertions of equal time stay earlier. Fails with
    /// `InvalidKeyframeTime` when `time` exceeds the element's length, in
    /// which case the sequence is left unchanged.
    pub fn add_key_frame(
        &mut self,
        time: impl Into<SceneTime>,
        properties: PropertyMap,
    ) -> Result<(), SceneError> {
        let time = time.into();
        if time > self.length {
            return Err(SceneError::InvalidKeyframeTime {
                time: time.as_millis(),
                length: self.length.as_millis(),
            });
        }

        let insert_pos = self.keyframes.partition_point(|k| k.time <= time);
        self.keyframes
            .insert(insert_pos, Keyframe::new(time, properties));
        Ok(())
    }

    /// Compute the normalized full-timeline lifecycle for this element.
    ///
    /// The result pads the element's keyframes with hidden boundary frames at
    /// offsets 0, `start`, `start + length`, and 1, so the animation spans the
    /// whole scene while the element stays invisible outside its window:
    /// `N` keyframes produce `N + 4` frames. An element without keyframes
    /// produces an empty lifecycle and no animation handle.
    ///
    /// `policy` governs windows that extend past `scene_length`; see
    /// [`OverrunPolicy`](crate::OverrunPolicy).
    pub fn create_lifecycle(
        &self,
        scene_length: impl Into<SceneTime>,
        policy: OverrunPolicy,
    ) -> Result<Lifecycle, SceneError> {
        let (first, last) = match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(Lifecycle::empty()),
        };

        let scene_length = scene_length.into();
        if scene_length.is_zero() {
            return Err(SceneError::InvalidDuration { length: 0.0 });
        }

        let window = self.window();
        if window.end > scene_length {
            match policy {
                OverrunPolicy::Reject => {
                    return Err(SceneError::WindowOutOfBounds {
                        start: self.start.as_millis(),
                        length: self.length.as_millis(),
                        scene_length: scene_length.as_millis(),
                    });
                }
                OverrunPolicy::Clamp => {}
                OverrunPolicy::Permit => {
                    log::warn!(
                        "element {} window ends at {}ms, past scene end {}ms; offsets will exceed 1",
                        self.id,
                        window.end.as_millis(),
                        scene_length.as_millis()
                    );
                }
            }
        }

        let at = |time: SceneTime| {
            let offset = time.fraction_of(scene_length);
            match policy {
                OverrunPolicy::Clamp => offset.clamp(0.0, 1.0),
                _ => offset,
            }
        };

        let mut frames = Vec::with_capacity(self.keyframes.len() + 4);
        frames.push(LifecycleFrame::hidden(first.properties.clone(), 0.0));
        frames.push(LifecycleFrame::hidden(
            first.properties.clone(),
            at(self.start),
        ));
        for keyframe in &self.keyframes {
            frames.push(LifecycleFrame::visible(
                keyframe.properties.clone(),
                at(self.start + keyframe.time),
            ));
        }
        frames.push(LifecycleFrame::hidden(
            last.properties.clone(),
            at(window.end),
        ));
        frames.push(LifecycleFrame::hidden(last.properties.clone(), 1.0));

        Ok(Lifecycle::from_frames(frames))
    }

    /// The visual style this element realizes with: fixed size, absolute
    /// placement, initially hidden
    pub fn visual_style(&self) -> VisualStyle {
        VisualStyle {
            width: self.width,
            height: self.height,
            placement: Placement::Absolute,
            visible: false,
            origin: self.origin,
            scale: self.scale,
            background: match &self.kind {
                ElementKind::Block => Background::Transparent,
                ElementKind::Image { src } => Background::Image(src.clone()),
            },
        }
    }
}
