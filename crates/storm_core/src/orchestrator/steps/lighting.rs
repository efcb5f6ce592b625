//! ApplyLighting step - configures the sun-sky lighting preset.

use tracing::info;

use crate::config::SetupProfile;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::SetupStep;
use crate::orchestrator::types::PipelineState;
use crate::scene::SceneContext;

/// Overwrites the sun-sky object with the storm lighting preset tied to
/// the scene's location.
pub struct ApplyLightingStep;

impl ApplyLightingStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ApplyLightingStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupStep for ApplyLightingStep {
    fn name(&self) -> &str {
        "ApplyLighting"
    }

    fn description(&self) -> &str {
        "Apply the sun-sky lighting preset for the scene location"
    }

    fn state(&self) -> PipelineState {
        PipelineState::ApplyingLighting
    }

    fn run(&self, profile: &SetupProfile, scene: &mut SceneContext) -> StepResult<()> {
        let Some(lighting) = scene.find_or_create_lighting() else {
            return Err(StepError::environment_unavailable(
                "sun-sky creation refused",
            ));
        };

        lighting.time_of_day = profile.lighting.time_of_day;
        lighting.cloud_opacity = profile.lighting.cloud_opacity;
        lighting.use_solar_time = profile.lighting.use_solar_time;
        lighting.latitude = profile.origin.latitude;
        lighting.longitude = profile.origin.longitude;
        lighting.sun_luminance = profile.lighting.sun_luminance;
        lighting.sky_luminance = profile.lighting.sky_luminance;

        info!(
            time_of_day = lighting.time_of_day,
            cloud_opacity = lighting.cloud_opacity,
            "lighting preset applied"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_lighting_overwrites_preset() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new();

        ApplyLightingStep::new().run(&profile, &mut scene).unwrap();

        let lighting = scene.lighting().unwrap();
        assert_eq!(lighting.time_of_day, 14.0);
        assert_eq!(lighting.cloud_opacity, 0.7);
        assert_eq!(lighting.latitude, profile.origin.latitude);
        assert!(lighting.use_solar_time);
    }

    #[test]
    fn apply_lighting_is_rerunnable() {
        let profile = SetupProfile::default();
        let step = ApplyLightingStep::new();
        let mut scene = SceneContext::new();

        step.run(&profile, &mut scene).unwrap();
        let first = scene.lighting().unwrap().clone();
        step.run(&profile, &mut scene).unwrap();

        assert_eq!(first, *scene.lighting().unwrap());
    }

    #[test]
    fn apply_lighting_fails_when_creation_refused() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::detached();

        let err = ApplyLightingStep::new().run(&profile, &mut scene).unwrap_err();
        assert!(matches!(err, StepError::EnvironmentUnavailable(_)));
    }
}
