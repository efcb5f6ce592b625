//! Scene context with the find-or-create object registry.

use tracing::debug;

use super::objects::{GeoOrigin, LightingPreset, ObjectKind, TerrainSource, ViewHolder};

/// Owns the per-world singleton scene objects for one session.
///
/// Each singleton kind has one owned slot. `find_or_create_*` returns the
/// existing instance or instantiates exactly one; it never returns
/// multiples and never destroys. A detached context (no live hosting
/// environment) still serves lookups but refuses instantiation, which
/// callers must treat as a step failure rather than a crash.
#[derive(Debug, Default)]
pub struct SceneContext {
    live: bool,
    origin: Option<GeoOrigin>,
    terrain: Option<TerrainSource>,
    lighting: Option<LightingPreset>,
    view_holder: Option<ViewHolder>,
}

impl SceneContext {
    /// Create an empty context backed by a live environment.
    pub fn new() -> Self {
        Self {
            live: true,
            ..Default::default()
        }
    }

    /// Create a context with no live environment: lookups work, object
    /// instantiation is refused.
    pub fn detached() -> Self {
        Self {
            live: false,
            ..Default::default()
        }
    }

    /// Seed a pre-existing georeference origin (builder style).
    pub fn with_origin(mut self, origin: GeoOrigin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Seed a pre-existing terrain source.
    pub fn with_terrain(mut self, terrain: TerrainSource) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Seed a pre-existing lighting object.
    pub fn with_lighting(mut self, lighting: LightingPreset) -> Self {
        self.lighting = Some(lighting);
        self
    }

    /// Attach the runtime's active view holder.
    pub fn with_view_holder(mut self) -> Self {
        self.view_holder = Some(ViewHolder::default());
        self
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn find_or_create_origin(&mut self) -> Option<&mut GeoOrigin> {
        if self.origin.is_none() {
            if !self.live {
                return None;
            }
            self.origin = Some(GeoOrigin::default());
            debug!("created georeference origin");
        }
        self.origin.as_mut()
    }

    pub fn find_or_create_terrain(&mut self) -> Option<&mut TerrainSource> {
        if self.terrain.is_none() {
            if !self.live {
                return None;
            }
            self.terrain = Some(TerrainSource::default());
            debug!("created terrain source");
        }
        self.terrain.as_mut()
    }

    pub fn find_or_create_lighting(&mut self) -> Option<&mut LightingPreset> {
        if self.lighting.is_none() {
            if !self.live {
                return None;
            }
            self.lighting = Some(LightingPreset::default());
            debug!("created sun-sky lighting");
        }
        self.lighting.as_mut()
    }

    /// Find the active view holder. Never creates one.
    pub fn view_holder_mut(&mut self) -> Option<&mut ViewHolder> {
        self.view_holder.as_mut()
    }

    pub fn origin(&self) -> Option<&GeoOrigin> {
        self.origin.as_ref()
    }

    pub fn terrain(&self) -> Option<&TerrainSource> {
        self.terrain.as_ref()
    }

    pub fn lighting(&self) -> Option<&LightingPreset> {
        self.lighting.as_ref()
    }

    pub fn view_holder(&self) -> Option<&ViewHolder> {
        self.view_holder.as_ref()
    }

    /// Presence check by kind.
    pub fn contains(&self, kind: ObjectKind) -> bool {
        match kind {
            ObjectKind::Georeference => self.origin.is_some(),
            ObjectKind::Terrain => self.terrain.is_some(),
            ObjectKind::SunSky => self.lighting.is_some(),
            ObjectKind::ViewHolder => self.view_holder.is_some(),
        }
    }

    /// Number of registered instances of a kind (0 or 1 by construction).
    pub fn object_count(&self, kind: ObjectKind) -> usize {
        usize::from(self.contains(kind))
    }
}
