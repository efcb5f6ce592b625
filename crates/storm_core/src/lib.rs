//! Storm Core - scene bootstrap logic for the storm visualization tool.
//!
//! This crate contains the one-click scene setup automation with zero UI
//! dependencies. It can be driven by the GUI application or a headless
//! harness:
//! - Configuration profiles (origin, terrain, camera, lighting)
//! - Scene context with the find-or-create object registry
//! - Setup pipeline orchestration with per-step outcomes
//! - Presence validation and presentation-facing status helpers

pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod scene;
pub mod status;

pub use config::{ProfileManager, SetupProfile};
pub use orchestrator::{SetupPipeline, SetupReport, StepOutcome, ValidationReport};
pub use scene::{CameraPreset, SceneContext};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
