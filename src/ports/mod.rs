//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TranscriptSource` - Text of each answered question
//! - `SessionStorage` - Profile snapshots and final reports

mod session_storage;
mod transcript_source;

pub use session_storage::{SessionStorage, StorageError};
pub use transcript_source::{TranscriptError, TranscriptSource};
