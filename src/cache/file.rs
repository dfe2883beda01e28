// ABOUTME: File-backed session cache storing one JSON snapshot per user
// ABOUTME: Writes go to a temporary file that is renamed over the slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{SessionCache, SessionCacheKey};
use crate::errors::StoreError;
use crate::models::SessionSnapshot;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Session cache that survives process restarts
#[derive(Debug, Clone)]
pub struct FileSessionCache {
    directory: PathBuf,
}

impl FileSessionCache {
    /// Cache rooted at `directory`; the directory is created on first save
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Root directory
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the user's snapshot file
    #[must_use]
    pub fn path_for(&self, user_id: &str) -> PathBuf {
        self.directory
            .join(SessionCacheKey::new(user_id).file_name())
    }
}

fn io_error(path: &Path, error: &std::io::Error) -> StoreError {
    StoreError::Io {
        context: format!("{}: {error}", path.display()),
    }
}

#[async_trait]
impl SessionCache for FileSessionCache {
    async fn save(&self, user_id: &str, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(snapshot)?;
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| io_error(&self.directory, &e))?;

        let path = self.path_for(user_id);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, &encoded)
            .await
            .map_err(|e| io_error(&staging, &e))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| io_error(&path, &e))?;

        debug!(path = %path.display(), bytes = encoded.len(), "Saved session snapshot");
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<SessionSnapshot>, StoreError> {
        let path = self.path_for(user_id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, &e)),
        }
    }

    async fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        let path = self.path_for(user_id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, &e)),
        }
    }
}
