//! Scene object types managed by the setup pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of scene objects the locator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// The georeference origin anchoring the scene to the globe.
    Georeference,
    /// The primary streamed terrain tileset.
    Terrain,
    /// The sun-sky lighting object.
    SunSky,
    /// The runtime's active input/view holder (camera carrier).
    ViewHolder,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Georeference => write!(f, "georeference"),
            ObjectKind::Terrain => write!(f, "terrain"),
            ObjectKind::SunSky => write!(f, "sun_sky"),
            ObjectKind::ViewHolder => write!(f, "view_holder"),
        }
    }
}

/// Real-world latitude/longitude/height anchor for the scene's local
/// coordinate space. Exactly one origin is authoritative per context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoOrigin {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl GeoOrigin {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Whether latitude and longitude fall in the valid geodetic ranges.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// One imagery layer draped onto the terrain mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayDescriptor {
    /// Asset identifier on the tiling service.
    pub asset_id: u32,
    /// Opaque bearer credential, passed through unvalidated.
    pub access_token: String,
}

/// Remotely streamed terrain tileset plus its imagery overlays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerrainSource {
    /// Tiling service endpoint.
    pub source_url: String,
    /// Opaque bearer credential, passed through unvalidated.
    pub access_token: String,
    /// Streaming quality threshold (lower is sharper).
    pub maximum_screen_space_error: f64,
    pub preload_ancestors: bool,
    pub preload_siblings: bool,
    pub forbid_holes: bool,
    /// Snapshot of the origin this tileset was bound to.
    pub origin_anchor: Option<GeoOrigin>,
    /// Draped imagery layers, in drape order.
    ///
    /// Appends are not deduplicated: configuring terrain twice drapes the
    /// same overlay twice. Kept as-is.
    pub overlays: Vec<OverlayDescriptor>,
}

impl TerrainSource {
    pub fn add_overlay(&mut self, overlay: OverlayDescriptor) {
        self.overlays.push(overlay);
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

/// Camera transform plus field of view. Fully overwritten on each
/// placement; there is no incremental update path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPose {
    /// Position in runtime units (centimeters).
    pub position: [f64; 3],
    /// Pitch in degrees, negative looks down.
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    /// Horizontal field of view in degrees.
    pub field_of_view: f64,
}

/// Fixed camera placements the setup can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraPreset {
    /// 1 km up, 45 degrees down. Wide view of the whole area.
    #[default]
    Overview,
    /// 500 m up, 30 degrees down.
    CloseIn,
}

impl CameraPreset {
    /// The fixed downward-looking pose for this preset.
    pub fn pose(&self) -> CameraPose {
        match self {
            CameraPreset::Overview => CameraPose {
                position: [0.0, 0.0, 100_000.0],
                pitch: -45.0,
                yaw: 0.0,
                roll: 0.0,
                field_of_view: 90.0,
            },
            CameraPreset::CloseIn => CameraPose {
                position: [0.0, 0.0, 50_000.0],
                pitch: -30.0,
                yaw: 0.0,
                roll: 0.0,
                field_of_view: 90.0,
            },
        }
    }
}

impl fmt::Display for CameraPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraPreset::Overview => write!(f, "overview"),
            CameraPreset::CloseIn => write!(f, "close-in"),
        }
    }
}

/// Sun-sky lighting state driven by time of day and location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightingPreset {
    /// Local time in fractional hours (14.0 = 2 PM).
    pub time_of_day: f64,
    /// Cloud cover opacity in [0, 1].
    pub cloud_opacity: f64,
    pub use_solar_time: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub sun_luminance: f64,
    pub sky_luminance: f64,
}

/// The runtime's active input/view holder. The pipeline never creates
/// one; it only overwrites the pose of an existing holder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewHolder {
    pub pose: CameraPose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_range_check() {
        assert!(GeoOrigin::new(33.5186, -86.8104, 500.0).is_in_range());
        assert!(!GeoOrigin::new(91.0, 0.0, 0.0).is_in_range());
        assert!(!GeoOrigin::new(0.0, -181.0, 0.0).is_in_range());
    }

    #[test]
    fn overlay_append_is_not_deduplicated() {
        let mut terrain = TerrainSource::default();
        let overlay = OverlayDescriptor {
            asset_id: 2,
            access_token: String::new(),
        };
        terrain.add_overlay(overlay.clone());
        terrain.add_overlay(overlay);
        assert_eq!(terrain.overlay_count(), 2);
    }

    #[test]
    fn presets_differ_in_height_and_pitch() {
        let overview = CameraPreset::Overview.pose();
        let close = CameraPreset::CloseIn.pose();
        assert!(overview.position[2] > close.position[2]);
        assert!(overview.pitch < close.pitch);
        assert_eq!(overview.field_of_view, 90.0);
    }
}
