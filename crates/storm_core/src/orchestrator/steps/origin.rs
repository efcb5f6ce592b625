//! SetOrigin step - anchors the scene's local space to fixed coordinates.

use tracing::{info, warn};

use crate::config::SetupProfile;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::SetupStep;
use crate::orchestrator::types::PipelineState;
use crate::scene::SceneContext;

/// Overwrites the georeference origin with the profile coordinates.
///
/// Unconditional overwrite: rerunning with the same coordinates leaves
/// the origin unchanged.
pub struct SetOriginStep;

impl SetOriginStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SetOriginStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupStep for SetOriginStep {
    fn name(&self) -> &str {
        "SetOrigin"
    }

    fn description(&self) -> &str {
        "Anchor the georeference origin at the configured coordinates"
    }

    fn state(&self) -> PipelineState {
        PipelineState::SettingOrigin
    }

    fn run(&self, profile: &SetupProfile, scene: &mut SceneContext) -> StepResult<()> {
        let Some(origin) = scene.find_or_create_origin() else {
            return Err(StepError::object_not_found("origin object"));
        };

        origin.latitude = profile.origin.latitude;
        origin.longitude = profile.origin.longitude;
        origin.height = profile.origin.height;

        if !origin.is_in_range() {
            warn!(
                latitude = origin.latitude,
                longitude = origin.longitude,
                "origin coordinates out of geodetic range"
            );
        }

        info!(
            latitude = origin.latitude,
            longitude = origin.longitude,
            height = origin.height,
            "origin anchored"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_origin_is_idempotent() {
        let profile = SetupProfile::default();
        let step = SetOriginStep::new();
        let mut scene = SceneContext::new();

        step.run(&profile, &mut scene).unwrap();
        let first = *scene.origin().unwrap();
        step.run(&profile, &mut scene).unwrap();
        let second = *scene.origin().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn set_origin_overwrites_existing_values() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new();
        scene.find_or_create_origin().unwrap().latitude = 0.0;

        SetOriginStep::new().run(&profile, &mut scene).unwrap();

        assert_eq!(scene.origin().unwrap().latitude, profile.origin.latitude);
    }

    #[test]
    fn set_origin_fails_without_creatable_origin() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::detached();

        let err = SetOriginStep::new().run(&profile, &mut scene).unwrap_err();
        assert_eq!(err.to_string(), "no origin object");
    }
}
