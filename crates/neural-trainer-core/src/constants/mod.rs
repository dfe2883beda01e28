// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for sessions, caching, history, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Session cache constants (capacity, key naming, file layout)
pub mod cache;

/// Active workout session constants
pub mod session {
    /// Version written into every session snapshot; older snapshots are discarded on load
    pub const SNAPSHOT_VERSION: u32 = 1;
}

/// Training history and insights constants
pub mod history {
    /// Number of workouts returned as "recent"
    pub const RECENT_WORKOUTS_LIMIT: usize = 10;
    /// Number of exercises ranked in "most frequent"
    pub const MOST_FREQUENT_EXERCISES_LIMIT: usize = 5;
    /// Window for the "this week" counter
    pub const WEEK_WINDOW_DAYS: i64 = 7;
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported at startup
    pub const NEURAL_TRAINER: &str = "neural-trainer";
}

/// Environment-based configuration defaults
pub mod defaults {
    /// Default SQLite database location
    pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/neural_trainer.db";
    /// Default directory for file-backed session snapshots
    pub const DEFAULT_SESSION_CACHE_DIR: &str = "./data/sessions";
    /// User id used when none is configured
    pub const DEFAULT_USER_ID: &str = "local";
}

/// Environment variable names
pub mod env_config {
    /// Database connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Session cache backend (`file` or `memory`)
    pub const SESSION_CACHE_BACKEND: &str = "SESSION_CACHE_BACKEND";
    /// Directory for file-backed session snapshots
    pub const SESSION_CACHE_DIR: &str = "SESSION_CACHE_DIR";
    /// Capacity of the in-memory session cache
    pub const SESSION_CACHE_MAX_USERS: &str = "SESSION_CACHE_MAX_USERS";
    /// Active user id
    pub const USER_ID: &str = "NEURAL_TRAINER_USER";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
