//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `narrative` - Taxonomies, lexicon, question battery, scorer and synthesis
//! - `session` - Sequential narrative session aggregate

pub mod foundation;
pub mod narrative;
pub mod session;
