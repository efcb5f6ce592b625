//! Error types for setup steps.
//!
//! Every variant is non-fatal: the pipeline converts step errors into
//! failed outcomes and keeps going. Nothing here propagates out of the
//! pipeline entry point.

use thiserror::Error;

/// Failure of a single setup step.
#[derive(Error, Debug)]
pub enum StepError {
    /// The locator found neither an existing nor a creatable instance.
    #[error("no {what}")]
    ObjectNotFound { what: String },

    /// No live world/session was available when the step ran.
    #[error("environment unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// A dependent object had nothing to bind to.
    #[error("cannot bind {what}: missing {missing}")]
    BindingFailed { what: String, missing: String },
}

impl StepError {
    /// Create an object-not-found error.
    pub fn object_not_found(what: impl Into<String>) -> Self {
        Self::ObjectNotFound { what: what.into() }
    }

    /// Create an environment-unavailable error.
    pub fn environment_unavailable(message: impl Into<String>) -> Self {
        Self::EnvironmentUnavailable(message.into())
    }

    /// Create a binding-failed error.
    pub fn binding_failed(what: impl Into<String>, missing: impl Into<String>) -> Self {
        Self::BindingFailed {
            what: what.into(),
            missing: missing.into(),
        }
    }
}

/// Result type for step operations.
pub type StepResult<T> = Result<T, StepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_not_found_matches_reported_reason() {
        let err = StepError::object_not_found("camera holder");
        assert_eq!(err.to_string(), "no camera holder");
    }

    #[test]
    fn binding_failed_names_both_sides() {
        let err = StepError::binding_failed("terrain source", "georeference origin");
        let msg = err.to_string();
        assert!(msg.contains("terrain source"));
        assert!(msg.contains("georeference origin"));
    }
}
