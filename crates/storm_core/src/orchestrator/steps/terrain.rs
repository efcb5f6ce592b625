//! LoadTerrain step - attaches the streamed terrain tileset and imagery.

use tracing::info;

use crate::config::SetupProfile;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::SetupStep;
use crate::orchestrator::types::PipelineState;
use crate::scene::{OverlayDescriptor, SceneContext};

/// Configures the primary terrain source against the tiling service.
///
/// Binds the tileset to the current origin, sets endpoint, credential and
/// streaming tuning from the profile, then drapes one imagery overlay.
/// The overlay append has no duplicate guard, so rerunning grows the
/// overlay list by one each time.
pub struct LoadTerrainStep;

impl LoadTerrainStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoadTerrainStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupStep for LoadTerrainStep {
    fn name(&self) -> &str {
        "LoadTerrain"
    }

    fn description(&self) -> &str {
        "Attach the streamed terrain tileset and imagery overlay"
    }

    fn state(&self) -> PipelineState {
        PipelineState::LoadingTerrain
    }

    fn run(&self, profile: &SetupProfile, scene: &mut SceneContext) -> StepResult<()> {
        let anchor = match scene.origin() {
            Some(origin) => *origin,
            None => {
                return Err(StepError::binding_failed(
                    "terrain source",
                    "georeference origin",
                ))
            }
        };

        let Some(terrain) = scene.find_or_create_terrain() else {
            return Err(StepError::environment_unavailable(
                "terrain source creation refused",
            ));
        };

        terrain.source_url = profile.terrain.source_url.clone();
        terrain.access_token = profile.terrain.access_token.clone();
        terrain.maximum_screen_space_error = profile.terrain.maximum_screen_space_error;
        terrain.preload_ancestors = profile.terrain.preload_ancestors;
        terrain.preload_siblings = profile.terrain.preload_siblings;
        terrain.forbid_holes = profile.terrain.forbid_holes;
        terrain.origin_anchor = Some(anchor);

        terrain.add_overlay(OverlayDescriptor {
            asset_id: profile.terrain.imagery_asset_id,
            access_token: profile.terrain.access_token.clone(),
        });

        info!(
            url = %terrain.source_url,
            overlays = terrain.overlay_count(),
            "terrain source configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::GeoOrigin;

    fn scene_with_origin() -> SceneContext {
        SceneContext::new().with_origin(GeoOrigin::new(33.5186, -86.8104, 500.0))
    }

    #[test]
    fn load_terrain_binds_to_origin() {
        let profile = SetupProfile::default();
        let mut scene = scene_with_origin();

        LoadTerrainStep::new().run(&profile, &mut scene).unwrap();

        let terrain = scene.terrain().unwrap();
        assert_eq!(terrain.source_url, profile.terrain.source_url);
        assert_eq!(terrain.origin_anchor.unwrap().latitude, 33.5186);
        assert!(terrain.forbid_holes);
    }

    #[test]
    fn load_terrain_fails_without_origin() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new();

        let err = LoadTerrainStep::new().run(&profile, &mut scene).unwrap_err();
        assert!(matches!(err, StepError::BindingFailed { .. }));
    }

    #[test]
    fn load_terrain_fails_when_creation_refused() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::detached().with_origin(GeoOrigin::default());

        let err = LoadTerrainStep::new().run(&profile, &mut scene).unwrap_err();
        assert!(matches!(err, StepError::EnvironmentUnavailable(_)));
    }

    #[test]
    fn repeated_load_terrain_appends_overlay_each_time() {
        let profile = SetupProfile::default();
        let step = LoadTerrainStep::new();
        let mut scene = scene_with_origin();

        step.run(&profile, &mut scene).unwrap();
        assert_eq!(scene.terrain().unwrap().overlay_count(), 1);
        step.run(&profile, &mut scene).unwrap();
        assert_eq!(scene.terrain().unwrap().overlay_count(), 2);
    }
}
