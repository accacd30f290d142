use thiserror::Error;

/// Errors produced while deriving the neutral path or generating stair
/// geometry. Every variant aborts the current computation; the caller's
/// previously computed solid stays untouched.
#[derive(Debug, Error)]
pub enum StairError {
    #[error("Empty path: {0}")]
    EmptyPath(String),

    #[error("Unsupported curve type: {0}")]
    UnsupportedCurve(String),

    #[error("Invalid base shape: {0}")]
    InvalidBaseShape(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Boolean operation failed during {stage}: {reason}")]
    BooleanOp { stage: &'static str, reason: String },

    #[error("Topology error: {0}")]
    Topology(String),
}

impl StairError {
    pub fn boolean(stage: &'static str, reason: impl Into<String>) -> Self {
        StairError::BooleanOp {
            stage,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StairError>;
