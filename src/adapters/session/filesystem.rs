//! Filesystem storage adapter for session profiles and reports

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::narrative::NarrativeProfile;
use crate::ports::{SessionStorage, StorageError};

const PROFILE_FILE: &str = "profile.json";
const CHECKSUM_FILE: &str = "profile.json.sha256";
const REPORT_FILE: &str = "report.md";

/// Filesystem-based session storage
///
/// Files are organized by session ID under a configurable base directory:
/// `{base_dir}/sessions/{session_id}/profile.json` (plus a SHA-256 sidecar)
/// and `{base_dir}/sessions/{session_id}/report.md`.
pub struct FsSessionStorage {
    base_dir: PathBuf,
}

impl FsSessionStorage {
    /// Create new filesystem storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding one session's files
    pub fn session_dir(&self, session_id: &SessionId) -> PathBuf {
        self.base_dir.join("sessions").join(session_id.to_string())
    }

    /// Writes through a temporary file and renames over the target
    async fn write_atomic(&self, file_path: &Path, content: &str) -> Result<(), StorageError> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io("Failed to create directory", e))?;
        }

        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| map_io("Failed to write temporary file", e))?;

        // Rename is atomic on the same filesystem
        fs::rename(&temp_path, file_path)
            .await
            .map_err(|e| map_io("Failed to rename file", e))
    }

    async fn read_file(&self, file_path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(file_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(file_path.display().to_string())
            } else {
                map_io("Failed to read file", e)
            }
        })
    }
}

fn map_io(context: &str, e: std::io::Error) -> StorageError {
    if e.kind() == std::io::ErrorKind::PermissionDenied {
        StorageError::PermissionDenied(format!("{}: {}", context, e))
    } else {
        StorageError::IoError(format!("{}: {}", context, e))
    }
}

#[async_trait]
impl SessionStorage for FsSessionStorage {
    async fn write_profile(
        &self,
        session_id: &SessionId,
        profile: &NarrativeProfile,
    ) -> Result<PathBuf, StorageError> {
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::IoError(format!("Failed to encode profile: {}", e)))?;

        let dir = self.session_dir(session_id);
        let file_path = dir.join(PROFILE_FILE);
        self.write_atomic(&file_path, &content).await?;
        self.write_atomic(&dir.join(CHECKSUM_FILE), &self.compute_checksum(&content))
            .await?;

        debug!(session_id = %session_id, path = %file_path.display(), "Profile snapshot written");
        Ok(file_path)
    }

    async fn read_profile(&self, session_id: &SessionId) -> Result<NarrativeProfile, StorageError> {
        let dir = self.session_dir(session_id);
        let content = self.read_file(&dir.join(PROFILE_FILE)).await?;

        let expected = self.read_file(&dir.join(CHECKSUM_FILE)).await?;
        let actual = self.compute_checksum(&content);
        if expected.trim() != actual {
            return Err(StorageError::ChecksumMismatch {
                expected: expected.trim().to_string(),
                actual,
            });
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    async fn write_report(&self, session_id: &SessionId, report: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.session_dir(session_id).join(REPORT_FILE);
        self.write_atomic(&file_path, report).await?;

        debug!(session_id = %session_id, path = %file_path.display(), "Report written");
        Ok(file_path)
    }

    fn compute_checksum(&self, content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
