//! Project layer: loaded assets, the scene, and its current realization.
//!
//! A project owns the scene and caches the realization produced by the last
//! explicit [`rebuild`](Project::rebuild). Nothing rebuilds implicitly:
//! after editing elements, the owning layer decides when to rebuild, and
//! [`is_stale`](Project::is_stale) reports whether that is due.

use crate::host::SceneHost;
use crate::player::Remote;
use crate::scene::{Realization, Scene};
use crate::{Result, SceneTime};
use serde::{Deserialize, Serialize};

/// An asset loaded into a project; loaded assets need not be in use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    /// An image, referenced by source path or URL
    Image { src: String },
}

impl Asset {
    /// Create an image asset
    #[inline]
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image { src: src.into() }
    }
}

/// An editing session's state: assets, the scene, a cursor, and the current
/// realization
pub struct Project<H: SceneHost> {
    /// The scene being edited
    pub scene: Scene,
    assets: Vec<Asset>,
    cursor: SceneTime,
    realization: Option<Realization<H>>,
}

impl<H: SceneHost> Project<H> {
    /// Create a project around a scene, with no assets and no realization
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            assets: Vec::new(),
            cursor: SceneTime::zero(),
            realization: None,
        }
    }

    /// Track a loaded asset
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Get the loaded assets
    #[inline]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Current timeline cursor position
    #[inline]
    pub fn cursor(&self) -> SceneTime {
        self.cursor
    }

    /// Move the timeline cursor
    pub fn set_cursor(&mut self, cursor: impl Into<SceneTime>) {
        self.cursor = cursor.into();
    }

    /// Realize the scene and replace the cached realization.
    ///
    /// The previous realization and its remote are discarded; callers
    /// holding the old remote must drop it.
    pub fn rebuild(&mut self, host: &mut H) -> Result<&mut Realization<H>> {
        let realization = self.scene.build(host)?;
        Ok(self.realization.insert(realization))
    }

    /// Get the current realization, if the scene has been built
    #[inline]
    pub fn realization(&self) -> Option<&Realization<H>> {
        self.realization.as_ref()
    }

    /// Get mutable access to the current realization
    #[inline]
    pub fn realization_mut(&mut self) -> Option<&mut Realization<H>> {
        self.realization.as_mut()
    }

    /// Get the current realization's remote
    #[inline]
    pub fn remote_mut(&mut self) -> Option<&mut Remote<H::Handle>> {
        self.realization.as_mut().map(|r| &mut r.remote)
    }

    /// Whether the scene has been mutated since the last rebuild (or never
    /// built)
    pub fn is_stale(&self) -> bool {
        self.realization
            .as_ref()
            .map_or(true, |r| r.is_stale(&self.scene))
    }
}
