//! Presentation-facing entry points and status helpers.
//!
//! The presentation layer itself is out of scope; this module is the
//! whole surface it talks to: run the pipeline, reset just the camera,
//! format status text, and schedule the cosmetic deferred status refresh.

mod deferred;

pub use deferred::DeferredStatus;

use crate::config::SetupProfile;
use crate::orchestrator::{
    create_setup_pipeline, PlaceCameraStep, SetupReport, SetupStep, StepOutcome, ValidationReport,
};
use crate::scene::SceneContext;

/// Run the standard setup pipeline to completion.
///
/// Never fails: all step failures are inside the returned report.
pub fn run_full_pipeline(profile: &SetupProfile, scene: &mut SceneContext) -> SetupReport {
    create_setup_pipeline(profile).run(profile, scene)
}

/// Re-place the camera without touching origin, terrain or lighting.
pub fn reset_camera_only(profile: &SetupProfile, scene: &mut SceneContext) -> StepOutcome {
    let step = PlaceCameraStep::new(profile.camera.preset);
    match step.run(profile, scene) {
        Ok(()) => StepOutcome::success(step.name()),
        Err(e) => StepOutcome::failure(step.name(), e.to_string()),
    }
}

/// One-line status text for a step outcome.
pub fn status_line(outcome: &StepOutcome) -> String {
    match &outcome.reason {
        Some(reason) if !outcome.success => {
            format!("{}: failure ({})", outcome.name, reason)
        }
        _ => format!(
            "{}: {}",
            outcome.name,
            if outcome.success { "success" } else { "failure" }
        ),
    }
}

/// Ready/not-ready message for the final audit.
pub fn ready_message(validation: &ValidationReport) -> &'static str {
    if validation.overall {
        "Scene setup complete: ready"
    } else {
        "Scene setup incomplete: not ready"
    }
}
