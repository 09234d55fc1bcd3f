//! Scoring engine configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::narrative::{SynthesisOptions, DEFAULT_MAX_CONFLICT_NOTES};

/// Upper bound accepted for `max_conflict_notes`
pub const MAX_CONFLICT_NOTES_LIMIT: usize = 50;

/// Lexicon, battery and report settings
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// YAML lexicon replacing the built-in one
    pub lexicon_path: Option<PathBuf>,

    /// YAML question battery replacing the built-in one
    pub questions_path: Option<PathBuf>,

    /// Conflict notes listed in the report
    #[serde(default = "default_max_conflict_notes")]
    pub max_conflict_notes: usize,
}

impl EngineConfig {
    /// Report options derived from this configuration
    pub fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            max_conflict_notes: self.max_conflict_notes,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_CONFLICT_NOTES_LIMIT).contains(&self.max_conflict_notes) {
            return Err(ValidationError::InvalidMaxConflictNotes {
                max: MAX_CONFLICT_NOTES_LIMIT,
                actual: self.max_conflict_notes,
            });
        }
        for path in [&self.lexicon_path, &self.questions_path].into_iter().flatten() {
            if !path.is_file() {
                return Err(ValidationError::FileNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            questions_path: None,
            max_conflict_notes: default_max_conflict_notes(),
        }
    }
}

fn default_max_conflict_notes() -> usize {
    DEFAULT_MAX_CONFLICT_NOTES
}
