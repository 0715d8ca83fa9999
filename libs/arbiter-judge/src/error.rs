use arbiter_common::Language;
use thiserror::Error;

pub type JudgeResult<T> = Result<T, JudgeError>;

/// Failures of a whole run, surfaced to the caller.
///
/// Per-test-case runtime errors, compile errors and missing output are NOT
/// in this taxonomy: those are legitimate execution outcomes that get
/// compared against the expectation like any other result.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// The language has no entry in the registry. Local: no network call
    /// was attempted.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(Language),

    /// A remote call failed. Fatal to the run as a whole; partial results
    /// are discarded.
    #[error("execution backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),

    /// The run was cancelled between test cases.
    #[error("run was cancelled")]
    Cancelled,
}

/// Client-level failure of a single backend call.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl BackendError {
    /// Transient failures are eligible for the configured retry budget.
    /// 4xx statuses indicate misconfiguration and are never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Transport(_) => true,
            BackendError::Status { status, .. } => *status >= 500,
        }
    }
}
