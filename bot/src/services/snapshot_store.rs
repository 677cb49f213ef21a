//! JSON snapshot store
//!
//! The whole registry is written to a temporary sibling file, flushed to disk
//! and renamed over the snapshot, so a crash never leaves a torn file behind.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use analytics::{Registry, UserProfile};

use crate::error::{BotError, BotResult};
use crate::traits::SnapshotStore;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    profiles: Vec<UserProfile>,
}

/// Snapshot store backed by a single JSON file
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn load(&self) -> BotResult<Registry> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting with an empty registry");
                return Ok(Registry::new());
            }
            Err(e) => return Err(BotError::storage("read", &self.path, e)),
        };

        let snapshot: Snapshot = serde_json::from_slice(&raw)?;
        Ok(snapshot
            .profiles
            .into_iter()
            .map(|profile| (profile.id, profile))
            .collect())
    }

    async fn save(&self, registry: &Registry) -> BotResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            profiles: registry.values().cloned().collect(),
        };
        let bytes = serde_json::to_vec_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| BotError::storage("create directory", parent, e))?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| BotError::storage("create", &temp_path, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| BotError::storage("write", &temp_path, e))?;
        file.sync_all()
            .await
            .map_err(|e| BotError::storage("sync", &temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| BotError::storage("rename", &self.path, e))?;

        debug!(path = %self.path.display(), profiles = registry.len(), "Snapshot written");
        Ok(())
    }
}
