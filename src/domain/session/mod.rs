//! Session domain module.
//!
//! A narrative session threads one profile through the question battery,
//! one answer at a time, and produces the synthesis report at the end.

mod aggregate;
mod errors;

pub use aggregate::{NarrativeSession, SessionStatus};
pub use errors::SessionError;
