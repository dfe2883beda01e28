// ABOUTME: Session cache factory for configuration-based backend selection
// ABOUTME: Cache dispatches to the file or in-memory backend chosen at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{FileSessionCache, InMemorySessionCache, SessionCache, SessionCacheConfig};
use crate::constants::cache::DEFAULT_SESSION_CACHE_MAX_USERS;
use crate::constants::defaults::DEFAULT_SESSION_CACHE_DIR;
use crate::constants::env_config;
use crate::errors::{AppError, AppResult, StoreError};
use crate::models::SessionSnapshot;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Available session cache backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionCacheBackend {
    /// One JSON file per user, survives restarts
    #[default]
    File,
    /// Process-local, lost on exit
    Memory,
}

impl SessionCacheBackend {
    /// Parse a backend name
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown backend
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "Unknown session cache backend '{other}' (expected 'file' or 'memory')"
            ))),
        }
    }
}

impl fmt::Display for SessionCacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

impl SessionCacheConfig {
    /// Read the session cache settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend or a non-numeric capacity
    pub fn from_env() -> AppResult<Self> {
        let backend = std::env::var(env_config::SESSION_CACHE_BACKEND)
            .ok()
            .map(|value| SessionCacheBackend::parse(&value))
            .transpose()?
            .unwrap_or_default();

        let directory = std::env::var(env_config::SESSION_CACHE_DIR)
            .map_or_else(|_| PathBuf::from(DEFAULT_SESSION_CACHE_DIR), PathBuf::from);

        let max_users = match std::env::var(env_config::SESSION_CACHE_MAX_USERS) {
            Ok(value) => value.trim().parse().map_err(|e| {
                AppError::config(format!(
                    "{} must be a non-negative integer: {e}",
                    env_config::SESSION_CACHE_MAX_USERS
                ))
            })?,
            Err(_) => DEFAULT_SESSION_CACHE_MAX_USERS,
        };

        Ok(Self {
            backend,
            directory,
            max_users,
        })
    }
}

/// Unified session cache interface
#[derive(Clone)]
pub enum Cache {
    /// File-backed slots
    File(FileSessionCache),
    /// In-memory slots
    Memory(InMemorySessionCache),
}

impl Cache {
    /// Create the backend selected by `config`
    #[must_use]
    pub fn new(config: &SessionCacheConfig) -> Self {
        match config.backend {
            SessionCacheBackend::File => {
                info!(
                    "Initializing file session cache (directory: {})",
                    config.directory.display()
                );
                Self::File(FileSessionCache::new(config.directory.clone()))
            }
            SessionCacheBackend::Memory => {
                info!(
                    "Initializing in-memory session cache (max users: {})",
                    config.max_users
                );
                Self::Memory(InMemorySessionCache::new(config.max_users))
            }
        }
    }

    /// Create the backend described by the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds invalid cache settings
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(&SessionCacheConfig::from_env()?))
    }

    /// Backend in use
    #[must_use]
    pub const fn backend(&self) -> SessionCacheBackend {
        match self {
            Self::File(_) => SessionCacheBackend::File,
            Self::Memory(_) => SessionCacheBackend::Memory,
        }
    }
}

#[async_trait]
impl SessionCache for Cache {
    async fn save(&self, user_id: &str, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        match self {
            Self::File(cache) => cache.save(user_id, snapshot).await,
            Self::Memory(cache) => cache.save(user_id, snapshot).await,
        }
    }

    async fn load(&self, user_id: &str) -> Result<Option<SessionSnapshot>, StoreError> {
        match self {
            Self::File(cache) => cache.load(user_id).await,
            Self::Memory(cache) => cache.load(user_id).await,
        }
    }

    async fn clear(&self, user_id: &str) -> Result<(), StoreError> {
        match self {
            Self::File(cache) => cache.clear(user_id).await,
            Self::Memory(cache) => cache.clear(user_id).await,
        }
    }
}
