//! Transcript Source Port - Where answer transcripts come from.
//!
//! In the full product this is a speech-to-text service fed by recorded
//! audio. The engine only ever sees the resulting text.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::narrative::Question;

/// Port for obtaining the transcript of one answered question.
///
/// # Contract
///
/// Implementations must:
/// - Return the transcript for the question at `index` in the battery
/// - Return `Ok("")` for an answer that was recorded but produced no text
/// - Return `TranscriptError` when no answer can be obtained at all
///
/// Callers treat every error as an empty answer, so implementations should
/// not retry internally.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn transcript(&self, index: usize, question: &Question) -> Result<String, TranscriptError>;
}

/// Errors from a transcript source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// No answer was recorded for this question.
    #[error("No answer recorded for question {0}")]
    Missing(usize),

    /// The backing store could not be read.
    #[error("Transcript source unavailable: {0}")]
    Unavailable(String),
}

impl TranscriptError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::TranscriptUnavailable
    }
}

impl From<TranscriptError> for DomainError {
    fn from(err: TranscriptError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
