//! Answers-file transcript source.
//!
//! Reads pre-transcribed answers from a YAML document, one entry per
//! question index:
//!
//! ```yaml
//! answers:
//!   - "Sou uma pessoa criativa e curiosa."
//!   - ~            # not answered
//!   - ""           # answered, nothing transcribed
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::domain::narrative::Question;
use crate::ports::{TranscriptError, TranscriptSource};

#[derive(Debug, Deserialize)]
struct AnswersDocument {
    answers: Vec<Option<String>>,
}

/// Transcript source backed by an in-memory list of answers.
#[derive(Debug, Clone)]
pub struct AnswersFileSource {
    answers: Vec<Option<String>>,
}

impl AnswersFileSource {
    pub fn new(answers: Vec<Option<String>>) -> Self {
        Self { answers }
    }

    /// Parses an answers document.
    pub fn from_yaml(source: &str) -> Result<Self, TranscriptError> {
        let doc: AnswersDocument = serde_yaml::from_str(source)
            .map_err(|e| TranscriptError::Unavailable(format!("Invalid answers file: {}", e)))?;
        Ok(Self::new(doc.answers))
    }

    /// Reads and parses an answers file.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, TranscriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            TranscriptError::Unavailable(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Number of entries, answered or not.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[async_trait]
impl TranscriptSource for AnswersFileSource {
    async fn transcript(&self, index: usize, _question: &Question) -> Result<String, TranscriptError> {
        match self.answers.get(index) {
            Some(Some(text)) => Ok(text.clone()),
            _ => Err(TranscriptError::Missing(index)),
        }
    }
}
