//! Error types for CpG island scanning.

use thiserror::Error;

/// Result type alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error type for scan operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    /// A caller-supplied argument is out of its accepted range. Raised before
    /// any chunk is scored.
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason:    String,
    },

    /// An internal invariant was violated between pipeline stages.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A scoring task could not complete. The whole scan is discarded.
    #[error("Worker failure: {0}")]
    WorkerFailure(String),
}

impl ScanError {
    pub fn invalid_argument(
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ScanError::InvalidArgument {
            parameter: parameter.into(),
            reason:    reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ScanError::InvalidArgument { .. })
    }
}
