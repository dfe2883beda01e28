// ABOUTME: Session snapshot cache abstraction for crash recovery of active workouts
// ABOUTME: Pluggable backends (file, in-memory) holding one snapshot slot per user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Session Cache
//!
//! Best-effort local persistence for the in-progress workout. Each user owns a
//! single slot that is overwritten wholesale after every mutation and cleared when
//! the workout is finished or cancelled. The workout log store stays the source of
//! truth for finished workouts.

/// Backend selection
pub mod factory;
/// File-backed cache, one JSON document per user
pub mod file;
/// In-memory LRU cache
pub mod memory;

pub use factory::{Cache, SessionCacheBackend};
pub use file::FileSessionCache;
pub use memory::InMemorySessionCache;

use crate::constants::cache::{
    DEFAULT_SESSION_CACHE_MAX_USERS, SESSION_CACHE_KEY_PREFIX, SESSION_SNAPSHOT_EXTENSION,
};
use crate::constants::defaults::DEFAULT_SESSION_CACHE_DIR;
use crate::errors::StoreError;
use crate::models::SessionSnapshot;
use async_trait::async_trait;
use std::fmt::{self, Write as _};
use std::path::PathBuf;

/// Storage for the serialized in-progress session
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Overwrite the user's slot with `snapshot`
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written
    async fn save(&self, user_id: &str, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// Read the user's slot
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] for a slot that does not decode, or an
    /// I/O error if the slot cannot be read
    async fn load(&self, user_id: &str) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Empty the user's slot; clearing an empty slot succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be removed
    async fn clear(&self, user_id: &str) -> Result<(), StoreError>;
}

/// Session cache configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCacheConfig {
    /// Which backend to use
    pub backend: SessionCacheBackend,
    /// Directory for the file backend
    pub directory: PathBuf,
    /// Number of users the memory backend retains
    pub max_users: usize,
}

impl Default for SessionCacheConfig {
    fn default() -> Self {
        Self {
            backend: SessionCacheBackend::File,
            directory: PathBuf::from(DEFAULT_SESSION_CACHE_DIR),
            max_users: DEFAULT_SESSION_CACHE_MAX_USERS,
        }
    }
}

/// Key of one user's snapshot slot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionCacheKey {
    user_id: String,
}

impl SessionCacheKey {
    /// Key for `user_id`
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// File name for this slot
    ///
    /// Bytes outside `[A-Za-z0-9-]` are written as `_XX` (uppercase hex), so
    /// distinct user ids always map to distinct files.
    #[must_use]
    pub fn file_name(&self) -> String {
        let mut safe = String::with_capacity(self.user_id.len());
        for byte in self.user_id.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                safe.push(char::from(byte));
            } else {
                let _ = write!(safe, "_{byte:02X}");
            }
        }
        format!("{SESSION_CACHE_KEY_PREFIX}-{safe}.{SESSION_SNAPSHOT_EXTENSION}")
    }
}

impl fmt::Display for SessionCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SESSION_CACHE_KEY_PREFIX}:{}", self.user_id)
    }
}
