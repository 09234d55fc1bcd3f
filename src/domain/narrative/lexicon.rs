//! Trigger-word lexicon for every scored dimension.
//!
//! The lexicon is a versioned, read-only table. The built-in table is
//! Portuguese (pt-BR) and is built once per process; a replacement can be
//! loaded from YAML and goes through the same normalization and validation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::NarrativeError;
use super::taxonomy::{BigFiveTrait, Dimension, Motivator, SchwartzValue};
use super::text::{fold, phrase_words};

/// Version tag of the built-in table.
pub const BUILTIN_LEXICON_VERSION: &str = "dna-pt-br-1";

const BIG_FIVE_TRIGGERS: &[(BigFiveTrait, &[&str])] = &[
    (
        BigFiveTrait::Openness,
        &[
            "imaginação", "arte", "emoções", "aventura", "ideias", "curiosidade", "experiência",
            "criatividade", "novo", "diferente", "viagem", "criativo", "inovador", "original",
        ],
    ),
    (
        BigFiveTrait::Conscientiousness,
        &[
            "organização", "disciplina", "dever", "responsabilidade", "planejamento", "foco",
            "meta", "objetivo", "trabalho", "eficiência", "responsável", "organizado",
            "disciplinado",
        ],
    ),
    (
        BigFiveTrait::Extraversion,
        &[
            "social", "amigos", "festa", "energia", "pessoas", "interação", "comunicação",
            "externo", "entusiasmo", "grupos",
        ],
    ),
    (
        BigFiveTrait::Agreeableness,
        &[
            "compaixão", "cooperação", "confiança", "empatia", "ajudar", "harmonia", "gentileza",
            "amável", "cuidar", "gentil",
        ],
    ),
    (
        BigFiveTrait::Neuroticism,
        &[
            "ansiedade", "medo", "preocupação", "estresse", "insegurança", "nervosismo",
            "tristeza", "raiva", "instabilidade", "ansioso", "preocupado", "estressado",
        ],
    ),
];

const SCHWARTZ_TRIGGERS: &[(SchwartzValue, &[&str])] = &[
    (
        SchwartzValue::SelfDirection,
        &["liberdade", "independência", "criatividade", "explorar", "curiosidade", "autonomia", "escolha"],
    ),
    (
        SchwartzValue::Stimulation,
        &["desafio", "excitação", "novidade", "aventura", "intenso", "risco"],
    ),
    (
        SchwartzValue::Hedonism,
        &["prazer", "diversão", "alegria", "satisfação", "gratificação"],
    ),
    (
        SchwartzValue::Achievement,
        &[
            "sucesso", "ambição", "realização", "competência", "influência", "reconhecimento",
            "conquista", "objetivo",
        ],
    ),
    (
        SchwartzValue::Power,
        &["autoridade", "riqueza", "poder", "controle", "domínio", "prestígio"],
    ),
    (
        SchwartzValue::Security,
        &["segurança", "ordem", "estabilidade", "proteção", "família", "limpeza"],
    ),
    (
        SchwartzValue::Conformity,
        &["regras", "disciplina", "obediência", "respeito", "tradição", "normas"],
    ),
    (
        SchwartzValue::Tradition,
        &["tradição", "costumes", "respeito", "religião", "moderação", "humildade"],
    ),
    (
        SchwartzValue::Benevolence,
        &[
            "ajuda", "honestidade", "perdão", "lealdade", "amizade", "amor", "cuidado", "família",
            "amigos", "ajudar",
        ],
    ),
    (
        SchwartzValue::Universalism,
        &["justiça", "igualdade", "paz", "natureza", "sabedoria", "proteção", "mundo"],
    ),
];

const MOTIVATOR_TRIGGERS: &[(Motivator, &[&str])] = &[
    (
        Motivator::Purpose,
        &["propósito", "significado", "missão", "causa", "impacto", "legado", "contribuição"],
    ),
    (
        Motivator::Autonomy,
        &["autonomia", "liberdade", "independência", "controle", "flexibilidade", "escolha"],
    ),
    (
        Motivator::Mastery,
        &[
            "maestria", "habilidade", "competência", "desenvolvimento", "aprender", "crescimento",
            "domínio",
        ],
    ),
    (
        Motivator::Connection,
        &["conexão", "relacionamento", "comunidade", "pertencer", "intimidade", "laços"],
    ),
];

const CONTRAST_MARKERS: &[&str] = &["mas", "porém", "embora", "contudo", "entretanto"];

const METAPHORS: &[&str] = &[
    "farol", "ponte", "montanha", "rio", "esponja", "rocha", "labirinto", "jardim",
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    fn table<D: Dimension>(rows: &[(D, &[&str])]) -> BTreeMap<D, Vec<String>> {
        rows.iter()
            .map(|(d, words)| (*d, words.iter().map(|w| w.to_string()).collect()))
            .collect()
    }

    Lexicon {
        version: BUILTIN_LEXICON_VERSION.to_string(),
        big_five: table(BIG_FIVE_TRIGGERS),
        schwartz: table(SCHWARTZ_TRIGGERS),
        motivators: table(MOTIVATOR_TRIGGERS),
        contrast_markers: CONTRAST_MARKERS.iter().map(|w| w.to_string()).collect(),
        metaphors: METAPHORS.iter().map(|w| w.to_string()).collect(),
    }
    .normalized()
});

/// Trigger words per dimension, contrast connectives and metaphor nouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    version: String,
    big_five: BTreeMap<BigFiveTrait, Vec<String>>,
    schwartz: BTreeMap<SchwartzValue, Vec<String>>,
    motivators: BTreeMap<Motivator, Vec<String>>,
    contrast_markers: Vec<String>,
    metaphors: Vec<String>,
}

/// Taxonomies that the lexicon holds trigger words for.
pub trait LexiconTaxonomy: Dimension {
    fn table(lexicon: &Lexicon) -> &BTreeMap<Self, Vec<String>>;
}

impl LexiconTaxonomy for BigFiveTrait {
    fn table(lexicon: &Lexicon) -> &BTreeMap<Self, Vec<String>> {
        &lexicon.big_five
    }
}

impl LexiconTaxonomy for SchwartzValue {
    fn table(lexicon: &Lexicon) -> &BTreeMap<Self, Vec<String>> {
        &lexicon.schwartz
    }
}

impl LexiconTaxonomy for Motivator {
    fn table(lexicon: &Lexicon) -> &BTreeMap<Self, Vec<String>> {
        &lexicon.motivators
    }
}

impl Lexicon {
    /// The built-in pt-BR lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parses, normalizes and validates a YAML lexicon.
    ///
    /// # Errors
    ///
    /// `NarrativeError::Configuration` when the document does not parse, names an
    /// unknown dimension, or leaves any dimension without trigger words.
    pub fn from_yaml(source: &str) -> Result<Self, NarrativeError> {
        let raw: Lexicon = serde_yaml::from_str(source)
            .map_err(|e| NarrativeError::configuration(format!("Invalid lexicon: {}", e)))?;
        let lexicon = raw.normalized();
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Trigger words for one dimension, lowercase.
    ///
    /// A dimension absent from the table is a configuration error, never an
    /// empty result.
    pub fn trigger_words<D: LexiconTaxonomy>(&self, dimension: D) -> Result<&[String], NarrativeError> {
        match D::table(self).get(&dimension) {
            Some(words) if !words.is_empty() => Ok(words.as_slice()),
            _ => Err(NarrativeError::configuration(format!(
                "No trigger words for {} dimension '{}'",
                D::TAXONOMY,
                dimension
            ))),
        }
    }

    pub fn contrast_markers(&self) -> &[String] {
        &self.contrast_markers
    }

    pub fn metaphors(&self) -> &[String] {
        &self.metaphors
    }

    /// Checks that every dimension of every taxonomy has usable trigger words.
    pub fn validate(&self) -> Result<(), NarrativeError> {
        if self.version.trim().is_empty() {
            return Err(NarrativeError::configuration("Lexicon version cannot be empty"));
        }
        self.validate_taxonomy::<BigFiveTrait>()?;
        self.validate_taxonomy::<SchwartzValue>()?;
        self.validate_taxonomy::<Motivator>()?;
        validate_word_list("contrast markers", &self.contrast_markers)?;
        validate_word_list("metaphors", &self.metaphors)?;
        Ok(())
    }

    fn validate_taxonomy<D: LexiconTaxonomy>(&self) -> Result<(), NarrativeError> {
        for &dimension in D::ALL {
            let words = self.trigger_words(dimension)?;
            validate_word_list(&format!("{} '{}'", D::TAXONOMY, dimension), words)?;
        }
        Ok(())
    }

    /// Lowercases, trims and de-duplicates every list, keeping first occurrences.
    fn normalized(mut self) -> Self {
        for words in self.big_five.values_mut() {
            normalize_list(words);
        }
        for words in self.schwartz.values_mut() {
            normalize_list(words);
        }
        for words in self.motivators.values_mut() {
            normalize_list(words);
        }
        normalize_list(&mut self.contrast_markers);
        normalize_list(&mut self.metaphors);
        self.version = self.version.trim().to_string();
        self
    }
}

fn normalize_list(words: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(words.len());
    for word in words.drain(..) {
        let word = fold(word.trim());
        if !word.is_empty() && !seen.contains(&word) {
            seen.push(word);
        }
    }
    *words = seen;
}

fn validate_word_list(what: &str, words: &[String]) -> Result<(), NarrativeError> {
    if words.is_empty() {
        return Err(NarrativeError::configuration(format!(
            "Lexicon has no entries for {}",
            what
        )));
    }
    if let Some(bad) = words.iter().find(|w| phrase_words(w).is_empty()) {
        return Err(NarrativeError::configuration(format!(
            "Lexicon entry '{}' for {} contains no word characters",
            bad, what
        )));
    }
    Ok(())
}
