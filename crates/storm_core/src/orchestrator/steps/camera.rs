//! PlaceCamera step - overwrites the active view holder's pose.

use tracing::info;

use crate::config::SetupProfile;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::SetupStep;
use crate::orchestrator::types::PipelineState;
use crate::scene::{CameraPreset, SceneContext};

/// Places the camera at one of the fixed downward-looking poses.
///
/// Only overwrites; never spawns a view holder. An absent holder is a
/// step failure, not a crash.
pub struct PlaceCameraStep {
    preset: CameraPreset,
}

impl PlaceCameraStep {
    pub fn new(preset: CameraPreset) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> CameraPreset {
        self.preset
    }
}

impl SetupStep for PlaceCameraStep {
    fn name(&self) -> &str {
        "PlaceCamera"
    }

    fn description(&self) -> &str {
        "Overwrite the view holder pose with a fixed preset"
    }

    fn state(&self) -> PipelineState {
        PipelineState::PlacingCamera
    }

    fn run(&self, profile: &SetupProfile, scene: &mut SceneContext) -> StepResult<()> {
        let mut pose = self.preset.pose();
        pose.field_of_view = profile.camera.field_of_view;

        let Some(holder) = scene.view_holder_mut() else {
            return Err(StepError::object_not_found("camera holder"));
        };
        holder.pose = pose;

        info!(preset = %self.preset, height_cm = pose.position[2], "camera placed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_camera_overwrites_pose() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new().with_view_holder();

        PlaceCameraStep::new(CameraPreset::Overview)
            .run(&profile, &mut scene)
            .unwrap();

        let pose = scene.view_holder().unwrap().pose;
        assert_eq!(pose.position[2], 100_000.0);
        assert_eq!(pose.pitch, -45.0);
        assert_eq!(pose.field_of_view, profile.camera.field_of_view);
    }

    #[test]
    fn close_in_preset_uses_lower_pose() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new().with_view_holder();

        PlaceCameraStep::new(CameraPreset::CloseIn)
            .run(&profile, &mut scene)
            .unwrap();

        let pose = scene.view_holder().unwrap().pose;
        assert_eq!(pose.position[2], 50_000.0);
        assert_eq!(pose.pitch, -30.0);
    }

    #[test]
    fn place_camera_fails_without_holder() {
        let profile = SetupProfile::default();
        let mut scene = SceneContext::new();

        let err = PlaceCameraStep::new(CameraPreset::Overview)
            .run(&profile, &mut scene)
            .unwrap_err();
        assert_eq!(err.to_string(), "no camera holder");
    }
}
