//! Setup profile with TOML-based sections.
//!
//! Sections map to TOML tables. Every field has a default so an empty
//! file (or no file at all) yields the built-in Birmingham scene setup.

use serde::{Deserialize, Serialize};

use crate::scene::CameraPreset;

/// Root profile containing all setup sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupProfile {
    /// Georeference origin coordinates.
    #[serde(default)]
    pub origin: OriginSettings,

    /// Terrain tileset and imagery configuration.
    #[serde(default)]
    pub terrain: TerrainSettings,

    /// Camera placement.
    #[serde(default)]
    pub camera: CameraSettings,

    /// Sun-sky lighting preset.
    #[serde(default)]
    pub lighting: LightingSettings,
}

/// Where the scene's local space is anchored on the globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Height above the ellipsoid in meters.
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_latitude() -> f64 {
    33.5186
}

fn default_longitude() -> f64 {
    -86.8104
}

fn default_height() -> f64 {
    500.0
}

impl Default for OriginSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            height: default_height(),
        }
    }
}

/// Terrain streaming configuration for the tiling service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    /// Tiling service endpoint for the world terrain asset.
    #[serde(default = "default_source_url")]
    pub source_url: String,

    /// Opaque bearer credential. Passed through to the service without
    /// validation; expiry and refresh are the service's concern.
    #[serde(default)]
    pub access_token: String,

    /// Asset identifier of the draped imagery overlay.
    #[serde(default = "default_imagery_asset_id")]
    pub imagery_asset_id: u32,

    #[serde(default = "default_screen_space_error")]
    pub maximum_screen_space_error: f64,

    #[serde(default = "default_true")]
    pub preload_ancestors: bool,

    #[serde(default = "default_true")]
    pub preload_siblings: bool,

    #[serde(default = "default_true")]
    pub forbid_holes: bool,
}

fn default_source_url() -> String {
    "https://assets.cesium.com/1".to_string()
}

fn default_imagery_asset_id() -> u32 {
    2
}

fn default_screen_space_error() -> f64 {
    16.0
}

fn default_true() -> bool {
    true
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            access_token: String::new(),
            imagery_asset_id: default_imagery_asset_id(),
            maximum_screen_space_error: default_screen_space_error(),
            preload_ancestors: true,
            preload_siblings: true,
            forbid_holes: true,
        }
    }
}

/// Camera placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    #[serde(default)]
    pub preset: CameraPreset,

    /// Horizontal field of view in degrees.
    #[serde(default = "default_field_of_view")]
    pub field_of_view: f64,
}

fn default_field_of_view() -> f64 {
    90.0
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            preset: CameraPreset::default(),
            field_of_view: default_field_of_view(),
        }
    }
}

/// Sun-sky lighting preset. Latitude and longitude are taken from the
/// origin section at apply time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingSettings {
    /// Local time in fractional hours.
    #[serde(default = "default_time_of_day")]
    pub time_of_day: f64,

    /// Cloud cover opacity in [0, 1].
    #[serde(default = "default_cloud_opacity")]
    pub cloud_opacity: f64,

    #[serde(default = "default_true")]
    pub use_solar_time: bool,

    #[serde(default = "default_sun_luminance")]
    pub sun_luminance: f64,

    #[serde(default = "default_sky_luminance")]
    pub sky_luminance: f64,
}

fn default_time_of_day() -> f64 {
    14.0
}

fn default_cloud_opacity() -> f64 {
    0.7
}

fn default_sun_luminance() -> f64 {
    3.0
}

fn default_sky_luminance() -> f64 {
    0.5
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            time_of_day: default_time_of_day(),
            cloud_opacity: default_cloud_opacity(),
            use_solar_time: true,
            sun_luminance: default_sun_luminance(),
            sky_luminance: default_sky_luminance(),
        }
    }
}
