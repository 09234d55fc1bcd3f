//! Closed taxonomies scored by the engine.
//!
//! Each taxonomy is a fieldless enum whose declared order is significant:
//! it is the order of `Dimension::ALL`, the storage order of score tables,
//! and the tie-break order when ranking (first declared wins).

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use super::errors::NarrativeError;
use super::macros::define_dimension;

/// A single scored axis within a closed taxonomy.
pub trait Dimension:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Human-readable taxonomy name, used in error messages.
    const TAXONOMY: &'static str;

    /// Every variant, in declared order.
    const ALL: &'static [Self];

    /// Canonical label (also the serialized key).
    fn label(&self) -> &'static str;

    /// Position of this variant in `ALL`.
    fn index(&self) -> usize;

    /// Looks up a variant by label, ignoring ASCII case and surrounding whitespace.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
    }
}

define_dimension! {
    /// Big Five personality traits.
    BigFiveTrait, "Big Five" {
        Openness => "Openness",
        Conscientiousness => "Conscientiousness",
        Extraversion => "Extraversion",
        Agreeableness => "Agreeableness",
        Neuroticism => "Neuroticism",
    }
}

define_dimension! {
    /// Schwartz basic human values.
    SchwartzValue, "Schwartz" {
        SelfDirection => "Self-Direction",
        Stimulation => "Stimulation",
        Hedonism => "Hedonism",
        Achievement => "Achievement",
        Power => "Power",
        Security => "Security",
        Conformity => "Conformity",
        Tradition => "Tradition",
        Benevolence => "Benevolence",
        Universalism => "Universalism",
    }
}

define_dimension! {
    /// Primary motivators.
    Motivator, "Motivators" {
        Purpose => "Purpose",
        Autonomy => "Autonomy",
        Mastery => "Mastery",
        Connection => "Connection",
    }
}

define_dimension! {
    /// Life domains a question belongs to. Labels match the question battery.
    LifeDomain, "Life domains" {
        Identity => "Identidade",
        Values => "Valores",
        BeliefsAboutSelf => "CrencasSobreSi",
        Relationships => "Relacionamentos",
        Trajectory => "Trajetoria",
        Emotions => "Emocoes",
        Conflicts => "Conflitos",
        Future => "Futuro",
        MeaningAndPurpose => "SentidoEProposito",
    }
}

impl FromStr for LifeDomain {
    type Err = NarrativeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifeDomain::from_label(s).ok_or_else(|| {
            NarrativeError::contract_violation(format!("Unknown life domain '{}'", s.trim()))
        })
    }
}
