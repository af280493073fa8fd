use thiserror::Error;

/// Failure taxonomy for the analysis engine.
///
/// There are no transient modes: every failure is a caller input defect,
/// reported synchronously before any scoring begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A supplied field is outside its declared domain.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A required collaborator value was not supplied.
    #[error("missing context: {0} must be resolved before invoking the engine")]
    MissingContext(&'static str),
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
