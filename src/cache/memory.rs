// ABOUTME: In-memory session cache with LRU eviction across users
// ABOUTME: Snapshots are stored encoded so loads exercise the same decode path as disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{SessionCache, SessionCacheKey};
use crate::constants::cache::DEFAULT_SESSION_CACHE_MAX_USERS;
use crate::errors::StoreError;
use crate::models::SessionSnapshot;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local session cache
///
/// Cloning shares the underlying store. When more than `max_users` users hold a
/// slot, the least recently touched slot is evicted.
#[derive(Clone)]
pub struct InMemorySessionCache {
    store: Arc<RwLock<LruCache<String, Vec<u8>>>>,
}

impl InMemorySessionCache {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_SESSION_CACHE_MAX_USERS)
    {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache holding at most `max_users` slots (0 selects the default)
    #[must_use]
    pub fn new(max_users: usize) -> Self {
        let capacity = NonZeroUsize::new(max_users).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Store raw bytes in a user's slot
    pub async fn insert_raw(&self, user_id: &str, bytes: Vec<u8>) {
        let key = SessionCacheKey::new(user_id).to_string();
        self.store.write().await.put(key, bytes);
    }

    /// Number of occupied slots
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether no slot is occupied
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemorySessionCache {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_CACHE_MAX_USERS)
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn save(&self, user_id: &str, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec(snapshot)?;
        self.insert_raw(user_id, encoded).await;
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<SessionSnapshot>, StoreError> {
        let key = SessionCacheKey::new(user_id).to_string();
        // LruCache::get promotes the entry, which needs the write lock
        let encoded = self.store.write().await.get(&key).cloned();
        encoded
            .map(|bytes| serde_json::from_slice(&bytes))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        let key = SessionCacheKey::new(user_id).to_string();
        self.store.write().await.pop(&key);
        Ok(())
    }
}
