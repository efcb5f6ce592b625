//! Core types for the setup orchestrator.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scene::ObjectKind;

/// Callback invoked with each step outcome as it is produced.
///
/// Lets a presentation layer display per-step status without owning the
/// pipeline.
pub type StatusCallback = Box<dyn Fn(&StepOutcome) + Send + Sync>;

/// States the orchestrator moves through during one run.
///
/// Transitions are unconditional and sequential; a step failure does not
/// halt the run, and `Done` is always reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineState {
    Idle,
    SettingOrigin,
    LoadingTerrain,
    PlacingCamera,
    ApplyingLighting,
    Validating,
    Done,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::SettingOrigin => write!(f, "setting origin"),
            PipelineState::LoadingTerrain => write!(f, "loading terrain"),
            PipelineState::PlacingCamera => write!(f, "placing camera"),
            PipelineState::ApplyingLighting => write!(f, "applying lighting"),
            PipelineState::Validating => write!(f, "validating"),
            PipelineState::Done => write!(f, "done"),
        }
    }
}

/// Pass/fail result of one setup step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub name: String,
    pub success: bool,
    /// Human-readable failure reason; `None` on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StepOutcome {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: true,
            reason: None,
        }
    }

    pub fn failure(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            reason: Some(reason.into()),
        }
    }
}

/// Result of the final presence audit.
///
/// Presence is the only check performed: an origin with wrong coordinates
/// still validates. The weak guarantee is deliberate; downstream UI reads
/// `overall == true` as "ready".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// AND of all presence checks.
    pub overall: bool,
    /// Per-kind presence, keyed by audited object kind.
    pub presence: BTreeMap<ObjectKind, bool>,
}

impl ValidationReport {
    /// Kinds whose presence check failed.
    pub fn missing(&self) -> Vec<ObjectKind> {
        self.presence
            .iter()
            .filter(|(_, present)| !**present)
            .map(|(kind, _)| *kind)
            .collect()
    }
}

/// Aggregate result of one orchestration run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupReport {
    /// When the run started (RFC 3339, local time).
    pub started_at: String,
    /// Per-step outcomes in execution order.
    pub outcomes: Vec<StepOutcome>,
    /// Final presence audit.
    pub validation: ValidationReport,
}

impl SetupReport {
    /// Whether the scene is ready per the presence audit.
    pub fn is_ready(&self) -> bool {
        self.validation.overall
    }

    /// Names of steps that failed, in execution order.
    pub fn failed_steps(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Serialize the report for display or persistence.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_carries_failure_reason() {
        let outcome = StepOutcome::failure("PlaceCamera", "no camera holder");
        assert!(!outcome.success);
        assert_eq!(outcome.reason.as_deref(), Some("no camera holder"));
    }

    #[test]
    fn report_serializes() {
        let report = SetupReport {
            started_at: "2026-01-01T00:00:00-00:00".to_string(),
            outcomes: vec![StepOutcome::success("SetOrigin")],
            validation: ValidationReport {
                overall: true,
                presence: BTreeMap::new(),
            },
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"SetOrigin\""));
        assert!(json.contains("\"overall\": true"));
    }

    #[test]
    fn missing_lists_absent_kinds() {
        let mut presence = BTreeMap::new();
        presence.insert(ObjectKind::Georeference, true);
        presence.insert(ObjectKind::Terrain, false);
        let report = ValidationReport {
            overall: false,
            presence,
        };
        assert_eq!(report.missing(), vec![ObjectKind::Terrain]);
    }
}
