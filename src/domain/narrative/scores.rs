//! Fixed-key score tables indexed by a closed taxonomy.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::errors::NarrativeError;
use super::taxonomy::Dimension;

/// One non-negative counter per variant of `D`.
///
/// The key set is exactly `D::ALL`: a table can neither miss a dimension nor
/// grow a new one. Counters only ever go up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable<D: Dimension> {
    scores: Vec<u32>,
    _taxonomy: PhantomData<D>,
}

impl<D: Dimension> ScoreTable<D> {
    /// Table with every dimension at zero.
    pub fn zeroed() -> Self {
        Self {
            scores: vec![0; D::ALL.len()],
            _taxonomy: PhantomData,
        }
    }

    /// Builds a table from a label map, requiring every dimension exactly once.
    pub fn from_labels(entries: BTreeMap<String, u32>) -> Result<Self, NarrativeError> {
        let mut table = Self::zeroed();
        let mut seen = vec![false; D::ALL.len()];

        for (label, score) in entries {
            let dimension = D::from_label(&label).ok_or_else(|| {
                NarrativeError::configuration(format!(
                    "{} score table has unknown key '{}'",
                    D::TAXONOMY,
                    label
                ))
            })?;
            if seen[dimension.index()] {
                return Err(NarrativeError::configuration(format!(
                    "{} score table repeats key '{}'",
                    D::TAXONOMY,
                    dimension
                )));
            }
            seen[dimension.index()] = true;
            table.scores[dimension.index()] = score;
        }

        if let Some(missing) = D::ALL.iter().find(|d| !seen[d.index()]) {
            return Err(NarrativeError::configuration(format!(
                "{} score table is missing '{}'",
                D::TAXONOMY,
                missing
            )));
        }

        Ok(table)
    }

    pub fn get(&self, dimension: D) -> u32 {
        self.scores[dimension.index()]
    }

    /// Adds to a counter, saturating at `u32::MAX`.
    pub fn add(&mut self, dimension: D, amount: u32) {
        let slot = &mut self.scores[dimension.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (D, u32)> + '_ {
        D::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    pub fn total(&self) -> u64 {
        self.scores.iter().map(|s| u64::from(*s)).sum()
    }

    /// Entries by descending score; equal scores keep declared order.
    pub fn ranked(&self) -> Vec<(D, u32)> {
        let mut entries: Vec<_> = self.iter().collect();
        // sort_by is stable, which gives the declared-order tie-break
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Highest-scoring dimension; the first declared one wins ties, so an
    /// all-zero table yields `D::ALL[0]`.
    pub fn dominant(&self) -> D {
        let mut best = D::ALL[0];
        for &candidate in &D::ALL[1..] {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

impl<D: Dimension> Default for ScoreTable<D> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<D: Dimension> Serialize for ScoreTable<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(D::ALL.len()))?;
        for (dimension, score) in self.iter() {
            map.serialize_entry(dimension.label(), &score)?;
        }
        map.end()
    }
}

impl<'de, D: Dimension> Deserialize<'de> for ScoreTable<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        Self::from_labels(raw).map_err(de::Error::custom)
    }
}
