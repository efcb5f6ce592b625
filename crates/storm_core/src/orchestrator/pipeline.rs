//! Pipeline runner that executes setup steps in sequence.

use tracing::{info, warn};

use crate::config::SetupProfile;
use crate::scene::SceneContext;

use super::step::SetupStep;
use super::types::{PipelineState, SetupReport, StatusCallback, StepOutcome};
use super::validation::validate;

/// Runs an ordered sequence of setup steps, best-effort.
///
/// A failure in any step does not halt the run: the next step still
/// executes against whatever state exists, since a partially configured
/// scene is more useful than none. Step errors become failed outcomes;
/// the runner itself never returns an error. Validation always runs last
/// and the terminal `Done` state is always reached.
pub struct SetupPipeline {
    steps: Vec<Box<dyn SetupStep>>,
    state: PipelineState,
    status_callback: Option<StatusCallback>,
}

impl SetupPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            state: PipelineState::Idle,
            status_callback: None,
        }
    }

    /// Add a step to the pipeline.
    pub fn add_step<S: SetupStep + 'static>(&mut self, step: S) -> &mut Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Add a step (builder pattern).
    pub fn with_step<S: SetupStep + 'static>(mut self, step: S) -> Self {
        self.add_step(step);
        self
    }

    /// Set a callback that receives each outcome as it is produced.
    pub fn with_status_callback(mut self, callback: StatusCallback) -> Self {
        self.status_callback = Some(callback);
        self
    }

    /// Current orchestration state; `Done` after a completed run.
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Get the number of steps in the pipeline.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get step names in order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order, then the validation pass.
    ///
    /// Returns the aggregate report; failures are recorded per step and
    /// never propagated.
    pub fn run(&mut self, profile: &SetupProfile, scene: &mut SceneContext) -> SetupReport {
        let started_at = chrono::Local::now().to_rfc3339();
        let mut outcomes = Vec::with_capacity(self.steps.len());

        for i in 0..self.steps.len() {
            self.state = self.steps[i].state();
            let step = &self.steps[i];
            info!(step = step.name(), state = %self.state, "running step");

            let outcome = match step.run(profile, scene) {
                Ok(()) => {
                    info!(step = step.name(), "step succeeded");
                    StepOutcome::success(step.name())
                }
                Err(e) => {
                    warn!(step = step.name(), reason = %e, "step failed");
                    StepOutcome::failure(step.name(), e.to_string())
                }
            };

            if let Some(ref callback) = self.status_callback {
                callback(&outcome);
            }
            outcomes.push(outcome);
        }

        self.state = PipelineState::Validating;
        let validation = validate(scene);
        if validation.overall {
            info!("scene validated: ready");
        } else {
            warn!(missing = ?validation.missing(), "scene validation failed");
        }

        self.state = PipelineState::Done;
        SetupReport {
            started_at,
            outcomes,
            validation,
        }
    }
}

impl Default for SetupPipeline {
    fn default() -> Self {
        Self::new()
    }
}
