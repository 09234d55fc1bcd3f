//! RunSessionHandler - Drives a narrative session through the whole battery.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::SessionId;
use crate::domain::narrative::{FragmentScorer, QuestionBattery, SynthesisGenerator};
use crate::domain::session::{NarrativeSession, SessionError};
use crate::ports::{SessionStorage, TranscriptSource};

/// Command to run a session from first to last question.
#[derive(Debug, Clone)]
pub struct RunSessionCommand {
    pub session_id: SessionId,
}

/// Result of a completed session.
#[derive(Debug, Clone)]
pub struct RunSessionResult {
    pub session: NarrativeSession,
    pub report: String,
    pub report_path: PathBuf,
    /// Question indices whose transcript could not be obtained.
    pub unanswered: Vec<usize>,
}

/// Handler that feeds every transcript to the scorer, in battery order.
pub struct RunSessionHandler {
    battery: Arc<QuestionBattery>,
    scorer: Arc<FragmentScorer>,
    synthesis: SynthesisGenerator,
    transcripts: Arc<dyn TranscriptSource>,
    storage: Arc<dyn SessionStorage>,
}

impl RunSessionHandler {
    pub fn new(
        battery: Arc<QuestionBattery>,
        scorer: Arc<FragmentScorer>,
        synthesis: SynthesisGenerator,
        transcripts: Arc<dyn TranscriptSource>,
        storage: Arc<dyn SessionStorage>,
    ) -> Self {
        Self {
            battery,
            scorer,
            synthesis,
            transcripts,
            storage,
        }
    }

    pub async fn handle(&self, cmd: RunSessionCommand) -> Result<RunSessionResult, SessionError> {
        let mut session = NarrativeSession::start(cmd.session_id, &self.battery);
        let mut unanswered = Vec::new();

        info!(
            session_id = %cmd.session_id,
            questions = self.battery.len(),
            lexicon = self.scorer.lexicon_version(),
            "Starting narrative session"
        );

        while let Some(question) = session.next_question(&self.battery) {
            let index = session.answered();

            // A failed transcript still counts as an asked question
            let transcript = match self.transcripts.transcript(index, question).await {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        session_id = %cmd.session_id,
                        index,
                        code = %e.code(),
                        error = %e,
                        "Transcript unavailable, scoring empty answer"
                    );
                    unanswered.push(index);
                    String::new()
                }
            };

            session.answer(&self.scorer, question, &transcript)?;

            self.storage
                .write_profile(session.id(), session.profile())
                .await
                .map_err(|e| SessionError::storage(e.to_string()))?;

            debug!(
                session_id = %cmd.session_id,
                index,
                domain = %question.domain(),
                remaining = session.remaining(),
                "Answer scored"
            );
        }

        let report = session.render_report(&self.synthesis)?;
        let report_path = self
            .storage
            .write_report(session.id(), &report)
            .await
            .map_err(|e| SessionError::storage(e.to_string()))?;

        info!(
            session_id = %cmd.session_id,
            answered = session.answered(),
            unanswered = unanswered.len(),
            contradictions = session.profile().metrics().contradictions,
            "Narrative session finished"
        );

        Ok(RunSessionResult {
            session,
            report,
            report_path,
            unanswered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::{
        BigFiveTrait, LifeDomain, NarrativeProfile, Question, SynthesisOptions,
    };
    use crate::ports::{StorageError, TranscriptError};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockTranscripts {
        answers: HashMap<usize, String>,
    }

    impl MockTranscripts {
        fn with(answers: &[(usize, &str)]) -> Self {
            Self {
                answers: answers.iter().map(|(i, t)| (*i, t.to_string())).collect(),
            }
        }
    }

    #[async_trait]
    impl TranscriptSource for MockTranscripts {
        async fn transcript(&self, index: usize, _question: &Question) -> Result<String, TranscriptError> {
            self.answers
                .get(&index)
                .cloned()
                .ok_or(TranscriptError::Missing(index))
        }
    }

    struct MockStorage {
        profiles: Mutex<Vec<NarrativeProfile>>,
        reports: Mutex<Vec<String>>,
        fail_writes: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                profiles: Mutex::new(Vec::new()),
                reports: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SessionStorage for MockStorage {
        async fn write_profile(
            &self,
            _session_id: &SessionId,
            profile: &NarrativeProfile,
        ) -> Result<PathBuf, StorageError> {
            if self.fail_writes {
                return Err(StorageError::IoError("Simulated write failure".to_string()));
            }
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(PathBuf::from("profile.json"))
        }

        async fn read_profile(&self, _session_id: &SessionId) -> Result<NarrativeProfile, StorageError> {
            self.profiles
                .lock()
                .unwrap()
                .last()
                .cloned()
                .ok_or_else(|| StorageError::NotFound("profile".to_string()))
        }

        async fn write_report(&self, _session_id: &SessionId, report: &str) -> Result<PathBuf, StorageError> {
            self.reports.lock().unwrap().push(report.to_string());
            Ok(PathBuf::from("report.md"))
        }

        fn compute_checksum(&self, content: &str) -> String {
            content.len().to_string()
        }
    }

    fn battery() -> Arc<QuestionBattery> {
        Arc::new(
            QuestionBattery::new(vec![
                Question::new("Quem é você?", LifeDomain::Identity, ""),
                Question::new("Do que você tem medo?", LifeDomain::Emotions, ""),
                Question::new("Qual valor te guia?", LifeDomain::Values, ""),
            ])
            .unwrap(),
        )
    }

    fn handler(transcripts: MockTranscripts, storage: Arc<MockStorage>) -> RunSessionHandler {
        RunSessionHandler::new(
            battery(),
            Arc::new(FragmentScorer::builtin().unwrap()),
            SynthesisGenerator::new(SynthesisOptions::default()),
            Arc::new(transcripts),
            storage,
        )
    }

    #[tokio::test]
    async fn runs_every_question_and_writes_report() {
        let storage = Arc::new(MockStorage::new());
        let transcripts = MockTranscripts::with(&[
            (0, "Sou criativo e curioso"),
            (1, "Tenho medo, mas enfrento"),
            (2, "Liberdade acima de tudo"),
        ]);

        let result = handler(transcripts, storage.clone())
            .handle(RunSessionCommand { session_id: SessionId::new() })
            .await
            .unwrap();

        assert!(result.session.is_finished());
        assert!(result.unanswered.is_empty());
        assert_eq!(result.session.profile().big_five().get(BigFiveTrait::Openness), 1);
        assert_eq!(result.session.profile().metrics().contradictions, 1);
        assert_eq!(storage.profiles.lock().unwrap().len(), 3);
        assert_eq!(storage.reports.lock().unwrap().as_slice(), &[result.report.clone()]);
        assert_eq!(result.report_path, PathBuf::from("report.md"));
    }

    #[tokio::test]
    async fn missing_transcript_scores_empty_and_continues() {
        let storage = Arc::new(MockStorage::new());
        let transcripts = MockTranscripts::with(&[(0, "Sou criativo"), (2, "Família")]);

        let result = handler(transcripts, storage.clone())
            .handle(RunSessionCommand { session_id: SessionId::new() })
            .await
            .unwrap();

        assert_eq!(result.unanswered, vec![1]);
        let profile = result.session.profile();
        assert_eq!(profile.domain_coverage().get(LifeDomain::Emotions), 1);
        assert_eq!(profile.fragments_scored(), 3);
    }

    #[tokio::test]
    async fn profile_snapshots_grow_one_answer_at_a_time() {
        let storage = Arc::new(MockStorage::new());
        let transcripts = MockTranscripts::with(&[]);

        handler(transcripts, storage.clone())
            .handle(RunSessionCommand { session_id: SessionId::new() })
            .await
            .unwrap();

        let counts: Vec<_> = storage
            .profiles
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.fragments_scored())
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn storage_failure_aborts_session() {
        let storage = Arc::new(MockStorage::failing());
        let transcripts = MockTranscripts::with(&[(0, "Sou criativo")]);

        let result = handler(transcripts, storage.clone())
            .handle(RunSessionCommand { session_id: SessionId::new() })
            .await;

        assert!(matches!(result, Err(SessionError::Storage(_))));
        assert!(storage.reports.lock().unwrap().is_empty());
    }
}
