//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::narrative::NarrativeError;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Every question has already been answered.
    #[error("Session {0} is finished, no question left to answer")]
    AlreadyFinished(SessionId),

    /// The report was requested before the last answer.
    #[error("Session {0} is still in progress ({1} questions left)")]
    NotFinished(SessionId, usize),

    /// Engine rejected its configuration or a caller-supplied value.
    #[error(transparent)]
    Narrative(#[from] NarrativeError),

    /// Persisting the profile or report failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SessionError {
    pub fn storage(message: impl Into<String>) -> Self {
        SessionError::Storage(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::AlreadyFinished(_) => ErrorCode::SessionFinished,
            SessionError::NotFinished(..) => ErrorCode::SessionInProgress,
            SessionError::Narrative(err) => err.code(),
            SessionError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrative_errors_keep_their_code() {
        let err: SessionError = NarrativeError::configuration("empty lexicon").into();
        assert_eq!(err.code(), ErrorCode::ConfigurationError);
        assert_eq!(err.to_string(), "Configuration error: empty lexicon");
    }

    #[test]
    fn converts_into_domain_error() {
        let id = SessionId::new();
        let err: DomainError = SessionError::AlreadyFinished(id).into();
        assert_eq!(err.code, ErrorCode::SessionFinished);
        assert!(err.message.contains(&id.to_string()));
    }
}
