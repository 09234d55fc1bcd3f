//! Fragment Scorer - folds one transcribed answer into the profile.
//!
//! Scoring is a pure function of `(transcript, question, profile)`: the input
//! profile is never touched and the result depends on nothing else.

use std::marker::PhantomData;
use tracing::trace;

use super::errors::NarrativeError;
use super::lexicon::{Lexicon, LexiconTaxonomy};
use super::profile::NarrativeProfile;
use super::question::Question;
use super::scores::ScoreTable;
use super::taxonomy::{BigFiveTrait, Motivator, SchwartzValue};
use super::text::{phrase_words, NormalizedText};

/// Points added per trigger-word occurrence.
pub const KEYWORD_WEIGHT: u32 = 1;

/// Characters of transcript per point of narrative depth.
pub const DEPTH_CHARS_PER_POINT: usize = 100;

/// Note appended to `value_conflicts` when a fragment contains a contrast connective.
pub fn conflict_note(question_text: &str) -> String {
    format!(
        "Conflito potencial na resposta à pergunta: \"{}\"",
        question_text
    )
}

/// Trigger phrases of one taxonomy, tokenized once, indexed by dimension.
#[derive(Debug, Clone)]
struct CompiledTaxonomy<D> {
    triggers: Vec<Vec<Vec<String>>>,
    _taxonomy: PhantomData<D>,
}

impl<D: LexiconTaxonomy> CompiledTaxonomy<D> {
    fn compile(lexicon: &Lexicon) -> Result<Self, NarrativeError> {
        let triggers = D::ALL
            .iter()
            .map(|&dimension| {
                lexicon
                    .trigger_words(dimension)
                    .map(|words| words.iter().map(|w| phrase_words(w)).collect::<Vec<_>>())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            triggers,
            _taxonomy: PhantomData,
        })
    }

    fn score_into(&self, text: &NormalizedText, table: &mut ScoreTable<D>) {
        for &dimension in D::ALL {
            let hits = self.triggers[dimension.index()]
                .iter()
                .fold(0u32, |acc, phrase| acc.saturating_add(text.count_phrase(phrase)));
            if hits > 0 {
                table.add(dimension, hits.saturating_mul(KEYWORD_WEIGHT));
            }
        }
    }
}

/// Scores fragments against a validated lexicon.
#[derive(Debug, Clone)]
pub struct FragmentScorer {
    lexicon_version: String,
    big_five: CompiledTaxonomy<BigFiveTrait>,
    schwartz: CompiledTaxonomy<SchwartzValue>,
    motivators: CompiledTaxonomy<Motivator>,
    contrast_markers: Vec<Vec<String>>,
    metaphors: Vec<String>,
}

impl FragmentScorer {
    /// Validates and compiles a lexicon.
    ///
    /// # Errors
    ///
    /// `NarrativeError::Configuration` if any dimension lacks trigger words.
    /// This is the only point where lexicon problems surface; scoring itself
    /// cannot fail.
    pub fn new(lexicon: &Lexicon) -> Result<Self, NarrativeError> {
        lexicon.validate()?;

        Ok(Self {
            lexicon_version: lexicon.version().to_string(),
            big_five: CompiledTaxonomy::compile(lexicon)?,
            schwartz: CompiledTaxonomy::compile(lexicon)?,
            motivators: CompiledTaxonomy::compile(lexicon)?,
            contrast_markers: lexicon
                .contrast_markers()
                .iter()
                .map(|m| phrase_words(m))
                .collect(),
            metaphors: lexicon.metaphors().to_vec(),
        })
    }

    /// Scorer over the built-in pt-BR lexicon.
    pub fn builtin() -> Result<Self, NarrativeError> {
        Self::new(Lexicon::builtin())
    }

    pub fn lexicon_version(&self) -> &str {
        &self.lexicon_version
    }

    /// Returns `profile` updated with one answered question.
    ///
    /// 1. `domain_coverage[question.domain]` always increases by one, even for
    ///    an empty transcript.
    /// 2. Every whole-word trigger occurrence adds `KEYWORD_WEIGHT` to its
    ///    dimension, in all three taxonomies.
    /// 3. A contrast connective bumps `contradictions` once and records a note
    ///    quoting the question text verbatim.
    /// 4. Each metaphor noun found as a substring bumps `metaphors` once and is
    ///    added to `central_metaphors` if new.
    /// 5. `depth` grows by `chars / DEPTH_CHARS_PER_POINT`.
    ///
    /// Depth follows word content, not raw length: a transcript with no word
    /// characters (only whitespace, punctuation or emoji) is treated as empty
    /// and leaves depth untouched however long it is.
    pub fn score_fragment(
        &self,
        transcript: &str,
        question: &Question,
        profile: &NarrativeProfile,
    ) -> NarrativeProfile {
        let mut next = profile.clone();
        next.domain_coverage.add(question.domain(), 1);

        let text = NormalizedText::new(transcript);
        if text.is_empty() {
            trace!(domain = %question.domain(), "Empty fragment, coverage only");
            return next;
        }

        self.big_five.score_into(&text, &mut next.big_five);
        self.schwartz.score_into(&text, &mut next.schwartz_values);
        self.motivators.score_into(&text, &mut next.motivators);

        if self
            .contrast_markers
            .iter()
            .any(|marker| text.contains_phrase(marker))
        {
            next.metrics.contradictions = next.metrics.contradictions.saturating_add(1);
            next.value_conflicts.push(conflict_note(question.text()));
        }

        for metaphor in &self.metaphors {
            if text.contains_substring(metaphor) {
                next.metrics.metaphors = next.metrics.metaphors.saturating_add(1);
                if !next.central_metaphors.contains(metaphor) {
                    next.central_metaphors.push(metaphor.clone());
                }
            }
        }

        let depth = u32::try_from(text.char_count() / DEPTH_CHARS_PER_POINT).unwrap_or(u32::MAX);
        next.metrics.depth = next.metrics.depth.saturating_add(depth);

        trace!(
            domain = %question.domain(),
            contradictions = next.metrics.contradictions,
            metaphors = next.metrics.metaphors,
            "Scored fragment"
        );

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::narrative::{Dimension, LifeDomain, QuestionBattery};

    fn scorer() -> FragmentScorer {
        FragmentScorer::builtin().unwrap()
    }

    fn question(domain: LifeDomain) -> Question {
        Question::new("Quem é você além dos crachás que carrega?", domain, "/audio/001.mp3")
    }

    #[test]
    fn empty_transcript_only_increments_coverage() {
        let before = NarrativeProfile::new();
        let after = scorer().score_fragment("", &question(LifeDomain::Values), &before);

        let mut expected = NarrativeProfile::new();
        expected.domain_coverage.add(LifeDomain::Values, 1);
        assert_eq!(after, expected);
    }

    #[test]
    fn input_profile_is_left_untouched() {
        let before = NarrativeProfile::new();
        let snapshot = before.clone();
        let _ = scorer().score_fragment("Sou criativo, mas ansioso", &question(LifeDomain::Identity), &before);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn case_does_not_change_increments() {
        let s = scorer();
        let q = question(LifeDomain::Identity);
        let lower = s.score_fragment("Responsável e organizado", &q, &NarrativeProfile::new());
        let upper = s.score_fragment("RESPONSÁVEL E ORGANIZADO", &q, &NarrativeProfile::new());

        assert_eq!(lower, upper);
        assert_eq!(lower.big_five().get(BigFiveTrait::Conscientiousness), 2);
    }

    #[test]
    fn trigger_words_match_whole_words_only() {
        let profile = scorer().score_fragment(
            "Trabalho organizadamente",
            &question(LifeDomain::Identity),
            &NarrativeProfile::new(),
        );
        // "trabalho" is a trigger, "organizadamente" must not count as "organizado"
        assert_eq!(profile.big_five().get(BigFiveTrait::Conscientiousness), 1);
    }

    #[test]
    fn decomposed_accents_match_composed_lexicon() {
        let profile = scorer().score_fragment(
            "RESPONSA\u{301}VEL",
            &question(LifeDomain::Identity),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.big_five().get(BigFiveTrait::Conscientiousness), 1);
    }

    #[test]
    fn long_whitespace_transcript_adds_no_depth() {
        let blank = " ".repeat(300);
        let profile = scorer().score_fragment(
            &blank,
            &question(LifeDomain::Emotions),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.metrics().depth, 0);
        assert_eq!(profile.domain_coverage().get(LifeDomain::Emotions), 1);
    }

    #[test]
    fn repeated_triggers_are_all_counted() {
        let profile = scorer().score_fragment(
            "Medo. Medo de tudo, medo de mim.",
            &question(LifeDomain::Emotions),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.big_five().get(BigFiveTrait::Neuroticism), 3 * KEYWORD_WEIGHT);
    }

    #[test]
    fn one_fragment_feeds_several_taxonomies() {
        let profile = scorer().score_fragment(
            "Minha liberdade é tudo",
            &question(LifeDomain::Values),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.schwartz_values().get(SchwartzValue::SelfDirection), 1);
        assert_eq!(profile.motivators().get(Motivator::Autonomy), 1);
    }

    #[test]
    fn contrast_connective_records_one_conflict() {
        let q = question(LifeDomain::Conflicts);
        let profile = scorer().score_fragment(
            "Eu queria ajudar, mas tive medo",
            &q,
            &NarrativeProfile::new(),
        );

        assert_eq!(profile.metrics().contradictions, 1);
        assert_eq!(profile.value_conflicts().len(), 1);
        assert!(profile.value_conflicts()[0].contains(q.text()));
        assert_eq!(profile.value_conflicts()[0], conflict_note(q.text()));
    }

    #[test]
    fn several_connectives_still_count_once_per_fragment() {
        let profile = scorer().score_fragment(
            "Quero, mas não posso; porém tento, embora canse",
            &question(LifeDomain::Conflicts),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.metrics().contradictions, 1);
        assert_eq!(profile.value_conflicts().len(), 1);
    }

    #[test]
    fn connective_must_be_a_whole_word() {
        let profile = scorer().score_fragment(
            "Gosto de massas e de mascotes",
            &question(LifeDomain::Identity),
            &NarrativeProfile::new(),
        );
        assert_eq!(profile.metrics().contradictions, 0);
    }

    #[test]
    fn conflict_note_quotes_question_verbatim() {
        let q = Question::new("Qual VALOR você defende?", LifeDomain::Values, "");
        let profile = scorer().score_fragment("sim, mas não", &q, &NarrativeProfile::new());
        assert_eq!(
            profile.value_conflicts(),
            &["Conflito potencial na resposta à pergunta: \"Qual VALOR você defende?\"".to_string()]
        );
    }

    #[test]
    fn metaphors_dedup_across_answers() {
        let s = scorer();
        let q = question(LifeDomain::Trajectory);
        let first = s.score_fragment("Minha vida é uma montanha", &q, &NarrativeProfile::new());
        let second = s.score_fragment("Outra montanha, e mais uma montanha", &q, &first);

        assert_eq!(second.metrics().metaphors, 2);
        assert_eq!(second.central_metaphors(), &["montanha".to_string()]);
    }

    #[test]
    fn central_metaphors_keep_first_appearance_order() {
        let s = scorer();
        let q = question(LifeDomain::Trajectory);
        let first = s.score_fragment("Sou um jardim", &q, &NarrativeProfile::new());
        let second = s.score_fragment("Uma ponte sobre o rio, perto do jardim", &q, &first);

        assert_eq!(second.metrics().metaphors, 4);
        assert_eq!(
            second.central_metaphors(),
            &["jardim".to_string(), "ponte".to_string(), "rio".to_string()]
        );
    }

    #[test]
    fn depth_grows_per_hundred_characters() {
        let long = "a".repeat(250);
        let profile = scorer().score_fragment(&long, &question(LifeDomain::Future), &NarrativeProfile::new());
        assert_eq!(profile.metrics().depth, 2);
    }

    #[test]
    fn same_input_gives_same_profile() {
        let s = scorer();
        let q = question(LifeDomain::Emotions);
        let base = s.score_fragment("Sinto alegria e medo", &q, &NarrativeProfile::new());
        let a = s.score_fragment("Um farol, mas também medo", &q, &base);
        let b = s.score_fragment("Um farol, mas também medo", &q, &base);
        assert_eq!(a, b);
    }

    #[test]
    fn identity_answers_with_criativo_drive_openness() {
        let s = scorer();
        let battery = QuestionBattery::builtin();
        let mut profile = NarrativeProfile::new();
        let mut occurrences = 0u32;

        for q in battery.iter() {
            let transcript = if q.domain() == LifeDomain::Identity {
                occurrences += 1;
                "Sou criativo por natureza"
            } else {
                ""
            };
            profile = s.score_fragment(transcript, q, &profile);
        }

        assert_eq!(
            profile.big_five().get(BigFiveTrait::Openness),
            occurrences * KEYWORD_WEIGHT
        );
        assert_eq!(
            profile.domain_coverage().get(LifeDomain::Identity) as usize,
            battery.count_in(LifeDomain::Identity)
        );
        assert_eq!(profile.fragments_scored(), battery.len() as u64);
    }

    #[test]
    fn scorer_reports_lexicon_version() {
        assert_eq!(scorer().lexicon_version(), crate::domain::narrative::BUILTIN_LEXICON_VERSION);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        const WORDS: &[&str] = &[
            "medo", "mas", "montanha", "criativo", "liberdade", "família", "rio", "ajudar",
            "organizadamente", "propósito", "nada", "RESPONSÁVEL", ",", "porém", "farol",
        ];

        fn transcript() -> impl Strategy<Value = String> {
            prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
        }

        fn domain() -> impl Strategy<Value = LifeDomain> {
            prop::sample::select(LifeDomain::ALL)
        }

        fn assert_not_below(before: &NarrativeProfile, after: &NarrativeProfile) {
            for (d, s) in before.big_five().iter() {
                assert!(after.big_five().get(d) >= s);
            }
            for (d, s) in before.schwartz_values().iter() {
                assert!(after.schwartz_values().get(d) >= s);
            }
            for (d, s) in before.motivators().iter() {
                assert!(after.motivators().get(d) >= s);
            }
            assert!(after.metrics().contradictions >= before.metrics().contradictions);
            assert!(after.metrics().metaphors >= before.metrics().metaphors);
            assert!(after.metrics().depth >= before.metrics().depth);
        }

        proptest! {
            #[test]
            fn prop_scores_never_decrease(
                answers in prop::collection::vec((transcript(), domain()), 0..20)
            ) {
                let s = scorer();
                let mut profile = NarrativeProfile::new();
                for (text, d) in &answers {
                    let next = s.score_fragment(text, &question(*d), &profile);
                    assert_not_below(&profile, &next);
                    profile = next;
                }
            }

            #[test]
            fn prop_coverage_counts_every_answer(
                answers in prop::collection::vec((transcript(), domain()), 0..20)
            ) {
                let s = scorer();
                let mut profile = NarrativeProfile::new();
                for (text, d) in &answers {
                    profile = s.score_fragment(text, &question(*d), &profile);
                }

                prop_assert_eq!(profile.fragments_scored(), answers.len() as u64);
                for &d in LifeDomain::ALL {
                    let asked = answers.iter().filter(|(_, a)| *a == d).count() as u32;
                    prop_assert_eq!(profile.domain_coverage().get(d), asked);
                }
            }

            #[test]
            fn prop_scoring_is_deterministic(text in transcript(), d in domain()) {
                let s = scorer();
                let q = question(d);
                let base = NarrativeProfile::new();
                prop_assert_eq!(s.score_fragment(&text, &q, &base), s.score_fragment(&text, &q, &base));
            }

            #[test]
            fn prop_case_is_irrelevant(text in transcript(), d in domain()) {
                let s = scorer();
                let q = question(d);
                let base = NarrativeProfile::new();
                prop_assert_eq!(
                    s.score_fragment(&text.to_uppercase(), &q, &base),
                    s.score_fragment(&text.to_lowercase(), &q, &base)
                );
            }
        }
    }
}
