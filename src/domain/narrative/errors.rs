//! Narrative engine error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the narrative engine.
///
/// Transcript content never produces an error; both variants signal a
/// programming or configuration mistake on the caller's side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// Lexicon, taxonomy or persisted profile is incomplete or inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied a value outside a fixed enumeration.
    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

impl NarrativeError {
    pub fn configuration(message: impl Into<String>) -> Self {
        NarrativeError::Configuration(message.into())
    }

    pub fn contract_violation(message: impl Into<String>) -> Self {
        NarrativeError::ContractViolation(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            NarrativeError::Configuration(_) => ErrorCode::ConfigurationError,
            NarrativeError::ContractViolation(_) => ErrorCode::ContractViolation,
        }
    }
}

impl From<NarrativeError> for DomainError {
    fn from(err: NarrativeError) -> Self {
        let message = match &err {
            NarrativeError::Configuration(msg) | NarrativeError::ContractViolation(msg) => {
                msg.clone()
            }
        };
        DomainError::new(err.code(), message)
    }
}
