//! Questions and the ordered battery they come from.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::battery::DNA_BATTERY;
use super::errors::NarrativeError;
use super::taxonomy::LifeDomain;

/// One prompt of the battery. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    domain: LifeDomain,
    audio_ref: String,
}

impl Question {
    pub fn new(text: impl Into<String>, domain: LifeDomain, audio_ref: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            domain,
            audio_ref: audio_ref.into(),
        }
    }

    /// Builds a question from a free-text domain label.
    ///
    /// # Errors
    ///
    /// `NarrativeError::ContractViolation` when the label is not one of the
    /// fixed life domains; no new coverage bucket is ever created.
    pub fn from_label(
        text: impl Into<String>,
        domain_label: &str,
        audio_ref: impl Into<String>,
    ) -> Result<Self, NarrativeError> {
        let domain = domain_label.parse::<LifeDomain>()?;
        Ok(Self::new(text, domain, audio_ref))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn domain(&self) -> LifeDomain {
        self.domain
    }

    /// Opaque reference to the recorded prompt; not used for scoring.
    pub fn audio_ref(&self) -> &str {
        &self.audio_ref
    }
}

static BUILTIN: Lazy<QuestionBattery> = Lazy::new(|| QuestionBattery {
    questions: DNA_BATTERY
        .iter()
        .map(|(text, audio_ref, domain)| Question::new(*text, *domain, *audio_ref))
        .collect(),
});

/// Wire shape of a question in a YAML battery file.
#[derive(Debug, Deserialize)]
struct QuestionEntry {
    text: String,
    domain: String,
    #[serde(default)]
    audio_ref: String,
}

/// Ordered, non-empty list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBattery {
    questions: Vec<Question>,
}

impl QuestionBattery {
    /// The 109-question DNA battery.
    pub fn builtin() -> &'static QuestionBattery {
        &BUILTIN
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, NarrativeError> {
        if questions.is_empty() {
            return Err(NarrativeError::configuration("Question battery cannot be empty"));
        }
        if let Some(pos) = questions.iter().position(|q| q.text().trim().is_empty()) {
            return Err(NarrativeError::configuration(format!(
                "Question {} has empty text",
                pos
            )));
        }
        Ok(Self { questions })
    }

    /// Parses a YAML list of `{text, domain, audio_ref}` entries.
    ///
    /// # Errors
    ///
    /// - `ContractViolation` if an entry names an unknown domain
    /// - `Configuration` if the document is malformed or the battery is empty
    pub fn from_yaml(source: &str) -> Result<Self, NarrativeError> {
        let entries: Vec<QuestionEntry> = serde_yaml::from_str(source).map_err(|e| {
            NarrativeError::configuration(format!("Invalid question battery: {}", e))
        })?;

        let questions = entries
            .into_iter()
            .map(|entry| Question::from_label(entry.text, &entry.domain, entry.audio_ref))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Number of questions in a domain.
    pub fn count_in(&self, domain: LifeDomain) -> usize {
        self.questions.iter().filter(|q| q.domain() == domain).count()
    }
}
