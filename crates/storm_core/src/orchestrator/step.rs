//! Setup step trait definition.

use crate::config::SetupProfile;
use crate::scene::SceneContext;

use super::errors::StepResult;
use super::types::PipelineState;

/// One unit of the setup sequence.
///
/// Steps are idempotent configuration operations: each locates one scene
/// object (tolerating that it already exists) and overwrites its fields
/// from the profile. `run` returns `Err` on failure; the pipeline records
/// the failure and continues with the next step, so implementations must
/// not assume earlier steps succeeded.
pub trait SetupStep: Send + Sync {
    /// Step name used in outcomes and logging.
    fn name(&self) -> &str;

    /// Human-readable description of what this step does.
    fn description(&self) -> &str {
        self.name()
    }

    /// Pipeline state the orchestrator is in while this step runs.
    fn state(&self) -> PipelineState;

    /// Perform the configuration against the scene context.
    fn run(&self, profile: &SetupProfile, scene: &mut SceneContext) -> StepResult<()>;
}
