use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream query service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed response from query service: {0}")]
    MalformedResponse(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Transient failures may be retried by the caller.
    pub fn is_transient(&self) -> bool {
        matches!(self, CoreError::UpstreamUnavailable(_))
    }
}
