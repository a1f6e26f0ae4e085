//! Workload identity and errors.

use http::StatusCode;

/// Static description of a deployable workload.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadInfo {
    /// Unique name for this workload.
    pub name: &'static str,
    /// Route patterns this workload handles.
    pub routes: &'static [&'static str],
}

impl WorkloadInfo {
    /// Whether a pattern is served by this workload.
    pub fn serves(&self, pattern: &str) -> bool {
        self.routes.contains(&pattern)
    }
}

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl WorkloadError {
    /// HTTP status a workload should answer with for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            WorkloadError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            WorkloadError::ShellNotSent | WorkloadError::StreamError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
