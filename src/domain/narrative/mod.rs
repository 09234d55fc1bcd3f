//! Narrative Module - Incremental profile scoring for Deep Narrative Analysis.
//!
//! Everything here is synchronous and free of I/O. A session threads one
//! `NarrativeProfile` through `FragmentScorer::score_fragment` once per
//! answered question, in battery order, and renders it once at the end.
//!
//! # Components
//!
//! - `Dimension` taxonomies - Big Five traits, Schwartz values, motivators, life domains
//! - `ScoreTable` - Fixed-key counters indexed by a taxonomy
//! - `Lexicon` - Versioned trigger words, contrast connectives and metaphor nouns
//! - `QuestionBattery` - Ordered questions, each tagged with a life domain
//! - `FragmentScorer` - `(transcript, question, profile) -> profile`
//! - `SynthesisGenerator` - `profile -> report`

mod battery;
mod errors;
mod lexicon;
mod macros;
mod profile;
mod question;
mod scorer;
mod scores;
mod synthesis;
mod taxonomy;
mod text;

pub use errors::NarrativeError;
pub use lexicon::{Lexicon, LexiconTaxonomy, BUILTIN_LEXICON_VERSION};
pub use profile::{NarrativeMetrics, NarrativeProfile};
pub use question::{Question, QuestionBattery};
pub use scorer::{conflict_note, FragmentScorer, DEPTH_CHARS_PER_POINT, KEYWORD_WEIGHT};
pub use scores::ScoreTable;
pub use synthesis::{
    render_synthesis, render_synthesis_at, SynthesisGenerator, SynthesisOptions,
    DEFAULT_MAX_CONFLICT_NOTES, GENERATED_AT_PREFIX,
};
pub use taxonomy::{BigFiveTrait, Dimension, LifeDomain, Motivator, SchwartzValue};
