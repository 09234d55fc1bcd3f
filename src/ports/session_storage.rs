//! Session Storage Port - Persistence of profiles and reports.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::foundation::SessionId;
use crate::domain::narrative::NarrativeProfile;

/// Errors that can occur during session storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Nothing stored for this session.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Stored profile does not decode into a valid profile.
    #[error("Corrupt profile: {0}")]
    Corrupt(String),
    /// Checksum mismatch.
    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

/// Storage for the profile snapshot and final report of each session.
///
/// The profile is written after every answer so an interrupted session can
/// be inspected; the report is written once at the end.
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Writes the current profile snapshot, replacing any previous one.
    ///
    /// Returns the path that was written.
    async fn write_profile(
        &self,
        session_id: &SessionId,
        profile: &NarrativeProfile,
    ) -> Result<PathBuf, StorageError>;

    /// Reads back a profile snapshot.
    ///
    /// A snapshot that misses a fixed key is `Corrupt`, never a partial profile.
    async fn read_profile(&self, session_id: &SessionId) -> Result<NarrativeProfile, StorageError>;

    /// Writes the final report verbatim.
    async fn write_report(&self, session_id: &SessionId, report: &str) -> Result<PathBuf, StorageError>;

    /// Computes the checksum recorded alongside stored content.
    fn compute_checksum(&self, content: &str) -> String;
}
