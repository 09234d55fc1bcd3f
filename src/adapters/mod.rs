//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `session` - Filesystem storage for profiles and reports
//! - `transcript` - Transcript sources (YAML answers file)

pub mod session;
pub mod transcript;

pub use session::FsSessionStorage;
pub use transcript::AnswersFileSource;
