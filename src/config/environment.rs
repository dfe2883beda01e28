// ABOUTME: Environment configuration for Neural Trainer deployments
// ABOUTME: Parses log level, environment, database URL, session cache, and active user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! Environment-based configuration

use crate::cache::{SessionCacheBackend, SessionCacheConfig};
use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Lifecycle events
    Info,
    /// Per-operation detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite`, discarded on exit
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL or a bare file path
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty value or a non-SQLite URL
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} cannot be empty", env_config::DATABASE_URL),
            ));
        }
        if let Some(rest) = s.strip_prefix("sqlite:") {
            let path = rest.trim_start_matches("//");
            if path == ":memory:" {
                return Ok(Self::Memory);
            }
            return Ok(Self::SQLite {
                path: PathBuf::from(path),
            });
        }
        if s.contains("://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unsupported database URL '{s}': only sqlite is supported"),
            ));
        }
        Ok(Self::SQLite {
            path: PathBuf::from(s),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DEFAULT_DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DEFAULT_DATABASE_URL),
            ),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Complete Neural Trainer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Database location
    pub database: DatabaseUrl,
    /// Session cache settings
    pub session_cache: SessionCacheConfig,
    /// Active user
    pub user_id: String,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseUrl::default(),
            session_cache: SessionCacheConfig::default(),
            user_id: defaults::DEFAULT_USER_ID.to_owned(),
        }
    }
}

impl TrainerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unparseable value or the result
    /// fails [`Self::validate`]
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();
        let database = match env::var(env_config::DATABASE_URL) {
            Ok(url) => DatabaseUrl::parse_url(&url)?,
            Err(_) => DatabaseUrl::default(),
        };
        let user_id = env::var(env_config::USER_ID)
            .unwrap_or_else(|_| defaults::DEFAULT_USER_ID.to_owned());

        let config = Self {
            environment,
            log_level,
            database,
            session_cache: SessionCacheConfig::from_env()?,
            user_id,
        };
        config.validate()?;
        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ConfigInvalid`] for a blank user id or a zero-capacity
    /// memory cache
    pub fn validate(&self) -> AppResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} cannot be empty", env_config::USER_ID),
            ));
        }
        if self.session_cache.backend == SessionCacheBackend::Memory
            && self.session_cache.max_users == 0
        {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("{} must be at least 1", env_config::SESSION_CACHE_MAX_USERS),
            ));
        }
        Ok(())
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let cache = match self.session_cache.backend {
            SessionCacheBackend::File => {
                format!("file ({})", self.session_cache.directory.display())
            }
            SessionCacheBackend::Memory => {
                format!("memory (max {} users)", self.session_cache.max_users)
            }
        };
        format!(
            "environment={} log_level={} database={} session_cache={} user={}",
            self.environment, self.log_level, self.database, cache, self.user_id
        )
    }
}
