/// Failure taxonomy shared across the fareflow crates. All core errors
/// surface directly to the boundary layer; none are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Reserved for future auth. Nothing issues this today.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Internal(err.to_string())
    }
}
