use crate::config::{BuildConfig, OverrunPolicy};
use crate::host::{Background, Placement, PlaybackOptions, SceneHost, VisualStyle};
use crate::player::Remote;
use crate::scene::element::{Element, Origin};
use crate::scene::ids::{ElementId, SceneId};
use crate::{SceneError, SceneTime};
use serde::{Deserialize, Serialize};

/// A scene: a fixed-size stage with a total duration and an ordered set of
/// timed elements.
///
/// Render order is insertion order. Mutations bump a version counter;
/// a realization records the version it was built from so staleness is
/// detected by comparing counters, never by object identity. Mutating an
/// element's window only takes effect on the next [`build`](Scene::build).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier
    pub id: SceneId,
    /// Stage width in pixels
    pub width: f64,
    /// Stage height in pixels
    pub height: f64,
    length: SceneTime,
    children: Vec<Element>,
    background: Background,
    config: BuildConfig,
    #[serde(skip)]
    version: u64,
}

impl Scene {
    /// Create a new scene. The total duration must be positive.
    pub fn new(
        width: f64,
        height: f64,
        length: impl Into<SceneTime>,
    ) -> Result<Self, SceneError> {
        let length = length.into();
        if length.is_zero() {
            return Err(SceneError::InvalidDuration {
                length: length.as_millis(),
            });
        }
        Ok(Self {
            id: SceneId::new(),
            width,
            height,
            length,
            children: Vec::new(),
            background: Background::Transparent,
            config: BuildConfig::default(),
            version: 0,
        })
    }

    /// Replace the build configuration
    #[inline]
    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the build configuration
    #[inline]
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Get the total duration
    #[inline]
    pub fn length(&self) -> SceneTime {
        self.length
    }

    /// Get the background
    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Set an image background
    pub fn set_background_image(&mut self, src: impl Into<String>) {
        self.background = Background::Image(src.into());
        self.touch();
    }

    /// Append an element; it renders above all earlier children
    pub fn add_child(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.children.push(element);
        self.touch();
        id
    }

    /// Remove every element
    pub fn clear_children(&mut self) {
        self.children.clear();
        self.touch();
    }

    /// Get the elements in render order
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Get an element by ID
    #[inline]
    pub fn child(&self, id: ElementId) -> Option<&Element> {
        self.children.iter().find(|el| el.id == id)
    }

    /// Get mutable access to an element by ID.
    ///
    /// Counts as a mutation: the scene's version is bumped and any existing
    /// realization becomes stale.
    pub fn child_mut(&mut self, id: ElementId) -> Result<&mut Element, SceneError> {
        let index = self
            .children
            .iter()
            .position(|el| el.id == id)
            .ok_or_else(|| SceneError::ElementNotFound { id: id.to_string() })?;
        self.touch();
        Ok(&mut self.children[index])
    }

    /// Get the elements whose window contains the given time, in render order
    pub fn children_at(&self, time: impl Into<SceneTime>) -> Vec<&Element> {
        let time = time.into();
        self.children
            .iter()
            .filter(|el| el.window().contains(time))
            .collect()
    }

    /// Current version counter; bumped on every mutation
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    fn root_style(&self) -> VisualStyle {
        VisualStyle {
            width: self.width,
            height: self.height,
            placement: Placement::Relative,
            visible: true,
            origin: Origin::zero(),
            scale: 1.0,
            background: self.background.clone(),
        }
    }

    /// Realize this scene: a fresh root visual, one child visual per element,
    /// and one paused animation handle per element with a non-empty
    /// lifecycle, all wrapped in a new [`Remote`].
    ///
    /// Every handle shares one timing configuration
    /// (`duration = scene length, iterations = 1, fill = forwards`).
    /// Under [`OverrunPolicy::Reject`] element windows are validated before
    /// any visual is created, so a failed build realizes nothing. Building
    /// never mutates recorded element state; a previous realization is
    /// simply superseded.
    pub fn build<H: SceneHost>(&self, host: &mut H) -> Result<Realization<H>, SceneError> {
        if self.config.overrun == OverrunPolicy::Reject {
            for element in &self.children {
                let window = element.window();
                if !element.keyframes().is_empty() && window.end > self.length {
                    return Err(SceneError::WindowOutOfBounds {
                        start: element.start.as_millis(),
                        length: element.length().as_millis(),
                        scene_length: self.length.as_millis(),
                    });
                }
            }
        }

        let mut root = host.create_visual(&self.root_style());
        let options = PlaybackOptions::once(self.length);
        let mut handles = Vec::new();

        for element in &self.children {
            let visual = host.create_visual(&element.visual_style());
            let lifecycle = element.create_lifecycle(self.length, self.config.overrun)?;
            if !lifecycle.is_empty() {
                handles.push(host.create_handle(&visual, lifecycle, &options));
            }
            host.append(&mut root, visual);
        }

        log::debug!(
            "realized scene {}: {} elements, {} handles, version {}",
            self.id,
            self.children.len(),
            handles.len(),
            self.version
        );

        Ok(Realization {
            remote: Remote::new(self.id, handles),
            root,
            version: self.version,
        })
    }
}

/// One realization of a scene: the root visual and the remote controlling
/// its handles.
///
/// Superseded (not mutated) by the next build; compare versions to find out.
pub struct Realization<H: SceneHost> {
    /// Transport for every handle of this realization
    pub remote: Remote<H::Handle>,
    /// Root visual containing one child visual per element
    pub root: H::Visual,
    version: u64,
}

impl<H: SceneHost> Realization<H> {
    /// Scene version this realization was built from
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the scene has been mutated since this realization was built
    #[inline]
    pub fn is_stale(&self, scene: &Scene) -> bool {
        self.version != scene.version()
    }
}

impl<H: SceneHost> std::fmt::Debug for Realization<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Realization")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
