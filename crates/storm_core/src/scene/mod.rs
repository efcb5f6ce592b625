//! Scene objects and the context that owns them.
//!
//! The hosting runtime keeps at most one georeference origin, one primary
//! terrain source and one sun-sky per world. `SceneContext` models that
//! registry explicitly so the find-or-create contract is testable without
//! a live environment.

mod context;
mod objects;

pub use context::SceneContext;
pub use objects::{
    CameraPose, CameraPreset, GeoOrigin, LightingPreset, ObjectKind, OverlayDescriptor,
    TerrainSource, ViewHolder,
};
