//! Narrative session aggregate.
//!
//! A session walks the question battery strictly in order. Each answer
//! replaces the profile with the scorer's output; once the last question is
//! answered the session is finished and the report can be rendered.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::narrative::{
    FragmentScorer, NarrativeProfile, Question, QuestionBattery, SynthesisGenerator,
};

use super::errors::SessionError;

/// Lifecycle of a narrative session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Finished,
}

/// Narrative session aggregate.
///
/// # Invariants
///
/// - `answered <= total_questions`
/// - `profile.fragments_scored() == answered`
/// - `finished_at` is set exactly when `answered == total_questions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSession {
    id: SessionId,
    profile: NarrativeProfile,
    answered: usize,
    total_questions: usize,
    started_at: Timestamp,
    finished_at: Option<Timestamp>,
}

impl NarrativeSession {
    /// Starts a session over a battery with an empty profile.
    pub fn start(id: SessionId, battery: &QuestionBattery) -> Self {
        Self {
            id,
            profile: NarrativeProfile::new(),
            answered: 0,
            total_questions: battery.len(),
            started_at: Timestamp::now(),
            finished_at: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn profile(&self) -> &NarrativeProfile {
        &self.profile
    }

    /// Index of the next question to answer, equal to the number answered.
    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn remaining(&self) -> usize {
        self.total_questions.saturating_sub(self.answered)
    }

    pub fn status(&self) -> SessionStatus {
        if self.finished_at.is_some() {
            SessionStatus::Finished
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status() == SessionStatus::Finished
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn finished_at(&self) -> Option<&Timestamp> {
        self.finished_at.as_ref()
    }

    /// The question to put to the respondent next, if any.
    pub fn next_question<'a>(&self, battery: &'a QuestionBattery) -> Option<&'a Question> {
        if self.is_finished() {
            return None;
        }
        battery.get(self.answered)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Folds the transcript of the current question into the profile.
    ///
    /// Returns the index of the question just answered.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinished` if every question has been answered
    pub fn answer(
        &mut self,
        scorer: &FragmentScorer,
        question: &Question,
        transcript: &str,
    ) -> Result<usize, SessionError> {
        if self.is_finished() {
            return Err(SessionError::AlreadyFinished(self.id));
        }

        self.profile = scorer.score_fragment(transcript, question, &self.profile);
        let index = self.answered;
        self.answered += 1;

        if self.answered == self.total_questions {
            self.finished_at = Some(Timestamp::now());
        }
        Ok(index)
    }

    /// Renders the final report.
    ///
    /// # Errors
    ///
    /// - `NotFinished` while questions remain
    pub fn render_report(&self, generator: &SynthesisGenerator) -> Result<String, SessionError> {
        match self.finished_at {
            Some(finished_at) => Ok(generator.render_at(&self.profile, finished_at)),
            None => Err(SessionError::NotFinished(self.id, self.remaining())),
        }
    }
}
