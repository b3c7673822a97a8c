//! Versioned on-disk snapshot of the last generated record and style.
//!
//! Failures never propagate: a snapshot that cannot be read, parsed or matched
//! to the current version is discarded and treated as absent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::models::ResumeRecord;
use crate::styles::ThemeId;

pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEnvelope {
    pub version: String,
    pub selected_style: ThemeId,
    pub cv_data: ResumeRecord,
}

pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Last-write-wins. Errors are logged, not returned.
    pub async fn save(&self, record: &ResumeRecord, style: ThemeId) {
        let envelope = SnapshotEnvelope {
            version: SNAPSHOT_VERSION.to_string(),
            selected_style: style,
            cv_data: record.clone(),
        };
        if let Err(e) = self.write(&envelope).await {
            error!(path = %self.path.display(), "Failed to save snapshot: {e:#}");
        }
    }

    async fn write(&self, envelope: &SnapshotEnvelope) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(envelope)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    /// The stored record and style, or `None` when absent or discarded.
    pub async fn load(&self) -> Option<(ResumeRecord, ThemeId)> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                error!(path = %self.path.display(), "Failed to read snapshot: {e}");
                self.clear().await;
                return None;
            }
        };

        let envelope: SnapshotEnvelope = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!(path = %self.path.display(), "Failed to parse snapshot: {e}");
                self.clear().await;
                return None;
            }
        };

        if envelope.version != SNAPSHOT_VERSION {
            warn!(
                found = %envelope.version,
                expected = SNAPSHOT_VERSION,
                "Snapshot version mismatch, clearing old data"
            );
            self.clear().await;
            return None;
        }

        Some((envelope.cv_data, envelope.selected_style))
    }

    pub async fn clear(&self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => debug!(path = %self.path.display(), "snapshot cleared"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => error!(path = %self.path.display(), "Failed to clear snapshot: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::defaults::default_record;

    fn store_in(dir: &tempfile::TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("nested").join("snapshot.json"))
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let record = default_record();

        store.save(&record, ThemeId::Tech).await;
        let (loaded, style) = store.load().await.unwrap();
        assert_eq!(loaded, record);
        assert_eq!(style, ThemeId::Tech);
    }

    #[tokio::test]
    async fn test_envelope_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&default_record(), ThemeId::Modern).await;

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&store.path).unwrap()).unwrap();
        assert_eq!(raw["version"], "1.0");
        assert_eq!(raw["selectedStyle"], "modern");
        assert_eq!(raw["cvData"]["personal"]["name"], "Jane Smith");
    }

    #[tokio::test]
    async fn test_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().await.is_none());
    }

    #[tokio::test]
    async fn test_version_mismatch_discards_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&default_record(), ThemeId::Modern).await;

        let text = std::fs::read_to_string(&store.path).unwrap();
        std::fs::write(&store.path, text.replace("\"1.0\"", "\"0.9\"")).unwrap();

        assert!(store.load().await.is_none());
        assert!(!store.path.exists());
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_discards_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        std::fs::write(&store.path, "{ truncated").unwrap();

        assert!(store.load().await.is_none());
        assert!(!store.path.exists());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&default_record(), ThemeId::Modern).await;
        store.clear().await;
        store.clear().await;
        assert!(store.load().await.is_none());
    }
}
