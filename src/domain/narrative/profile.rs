//! NarrativeProfile - the accumulator threaded through a session.

use serde::{Deserialize, Serialize};

use super::scores::ScoreTable;
use super::taxonomy::{BigFiveTrait, LifeDomain, Motivator, SchwartzValue};

/// Narrative-level counters. All of them only ever increase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeMetrics {
    /// Fragments containing at least one contrast connective.
    pub contradictions: u32,
    /// Metaphor nouns seen, counted once per noun per fragment.
    pub metaphors: u32,
    /// Sum over fragments of `chars / 100`.
    #[serde(default)]
    pub depth: u32,
}

/// Accumulated profile of one session.
///
/// Created empty at session start, replaced (never mutated in place by the
/// scorer) once per answered question, read once by the synthesis generator.
/// Score tables always hold exactly their taxonomy's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeProfile {
    pub(super) big_five: ScoreTable<BigFiveTrait>,
    pub(super) schwartz_values: ScoreTable<SchwartzValue>,
    pub(super) motivators: ScoreTable<Motivator>,
    pub(super) domain_coverage: ScoreTable<LifeDomain>,
    pub(super) metrics: NarrativeMetrics,
    pub(super) central_metaphors: Vec<String>,
    pub(super) value_conflicts: Vec<String>,
}

impl NarrativeProfile {
    /// All scores zero, all lists empty.
    pub fn new() -> Self {
        Self {
            big_five: ScoreTable::zeroed(),
            schwartz_values: ScoreTable::zeroed(),
            motivators: ScoreTable::zeroed(),
            domain_coverage: ScoreTable::zeroed(),
            metrics: NarrativeMetrics::default(),
            central_metaphors: Vec::new(),
            value_conflicts: Vec::new(),
        }
    }

    pub fn big_five(&self) -> &ScoreTable<BigFiveTrait> {
        &self.big_five
    }

    pub fn schwartz_values(&self) -> &ScoreTable<SchwartzValue> {
        &self.schwartz_values
    }

    pub fn motivators(&self) -> &ScoreTable<Motivator> {
        &self.motivators
    }

    pub fn domain_coverage(&self) -> &ScoreTable<LifeDomain> {
        &self.domain_coverage
    }

    pub fn metrics(&self) -> NarrativeMetrics {
        self.metrics
    }

    /// Distinct metaphor nouns in order of first appearance.
    pub fn central_metaphors(&self) -> &[String] {
        &self.central_metaphors
    }

    /// One note per contradiction, oldest first.
    pub fn value_conflicts(&self) -> &[String] {
        &self.value_conflicts
    }

    /// Number of fragments scored so far (sum of domain coverage).
    pub fn fragments_scored(&self) -> u64 {
        self.domain_coverage.total()
    }
}

impl Default for NarrativeProfile {
    fn default() -> Self {
        Self::new()
    }
}
