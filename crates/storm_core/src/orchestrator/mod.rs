//! Setup pipeline orchestration.
//!
//! The orchestrator runs a fixed ordered sequence of idempotent
//! configuration steps over the shared scene objects, then audits the
//! result:
//!
//! ```text
//! SetupPipeline
//!     ├── Step: SetOrigin
//!     ├── Step: LoadTerrain
//!     ├── Step: PlaceCamera
//!     ├── Step: ApplyLighting
//!     └── Validation (presence audit)
//! ```
//!
//! Steps are best-effort: a failure is recorded as an outcome and the
//! next step still runs. The pipeline entry point never returns an
//! error; the report is the only observable signal.

mod errors;
mod pipeline;
mod step;
pub mod steps;
mod types;
mod validation;

pub use errors::{StepError, StepResult};
pub use pipeline::SetupPipeline;
pub use step::SetupStep;
pub use steps::{ApplyLightingStep, LoadTerrainStep, PlaceCameraStep, SetOriginStep};
pub use types::{PipelineState, SetupReport, StatusCallback, StepOutcome, ValidationReport};
pub use validation::validate;

use crate::config::SetupProfile;

/// Create the standard setup pipeline with all steps in order.
///
/// The camera preset comes from the profile; every other constant is read
/// by the steps at run time.
pub fn create_setup_pipeline(profile: &SetupProfile) -> SetupPipeline {
    SetupPipeline::new()
        .with_step(SetOriginStep::new())
        .with_step(LoadTerrainStep::new())
        .with_step(PlaceCameraStep::new(profile.camera.preset))
        .with_step(ApplyLightingStep::new())
}
