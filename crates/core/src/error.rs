//! Error types for the stock cutting solver.

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while validating, solving or serializing a cutting job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The submitted job violates the data model (bad lengths, empty sizes, ...).
    #[error("{0}")]
    InvalidJob(String),

    /// An assembled result breaks a layout invariant. Always an engine bug.
    #[error("invalid result: {0}")]
    InvalidResult(String),

    /// Any other internal engine failure.
    #[error("internal error: {0}")]
    Internal(String),

    /// JSON could not be decoded or encoded at an API edge.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Creates an [`Error::InvalidJob`] from a message.
    pub fn invalid_job(message: impl Into<String>) -> Self {
        Self::InvalidJob(message.into())
    }

    /// Creates an [`Error::InvalidResult`] from a message.
    pub fn invalid_result(message: impl Into<String>) -> Self {
        Self::InvalidResult(message.into())
    }

    /// Returns true if the error was caused by the caller's input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidJob(_) | Self::Serialization(_))
    }

    /// HTTP-style status code a service boundary reports for this error.
    ///
    /// | Error | Code |
    /// |-------|------|
    /// | `Serialization` | 400 |
    /// | `InvalidJob` | 406 |
    /// | `InvalidResult`, `Internal` | 507 |
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Serialization(_) => 400,
            Self::InvalidJob(_) => 406,
            Self::InvalidResult(_) | Self::Internal(_) => 507,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_job_displays_bare_message() {
        let err = Error::invalid_job("invalid max_length");
        assert_eq!(err.to_string(), "invalid max_length");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::invalid_job("x").status_code(), 406);
        assert_eq!(Error::invalid_result("x").status_code(), 507);
        assert_eq!(Error::Internal("x".into()).status_code(), 507);
        assert_eq!(Error::Serialization("x".into()).status_code(), 400);
    }

    #[test]
    fn test_user_error_classification() {
        assert!(Error::invalid_job("x").is_user_error());
        assert!(Error::Serialization("x".into()).is_user_error());
        assert!(!Error::invalid_result("x").is_user_error());
        assert!(!Error::Internal("x".into()).is_user_error());
    }
}
