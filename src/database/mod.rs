// ABOUTME: SQLite persistence for custom exercises, routines, and finished workouts
// ABOUTME: Database owns the pool and migrations; managers implement each table's operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Database Management
//!
//! Vec-valued fields (routine exercises, workout sets) are stored as JSON text and
//! timestamps as RFC 3339 text in UTC, which sorts chronologically.

mod exercises;
mod routines;
mod workout_logs;

pub use exercises::ExerciseManager;
pub use routines::{validate_routine, RoutineManager};
pub use workout_logs::WorkoutLogManager;

use crate::errors::StoreError;
use crate::models::{Routine, WorkoutLog};
use crate::stores::{RoutineStore, WorkoutLogStore};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;

/// Database manager for exercise, routine, and workout log storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` and run migrations
    ///
    /// File databases and their parent directory are created when missing. An
    /// in-memory database is held on a single connection so every query sees the
    /// same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the database cannot be opened, or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

        let pool = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
            SqlitePoolOptions::new().connect_with(options).await?
        };

        let db = Self { pool };
        db.migrate().await?;
        debug!(url = %database_url, "Database ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Custom exercise operations
    #[must_use]
    pub fn exercises(&self) -> ExerciseManager {
        ExerciseManager::new(self.pool.clone())
    }

    /// Routine operations
    #[must_use]
    pub fn routines(&self) -> RoutineManager {
        RoutineManager::new(self.pool.clone())
    }

    /// Workout log operations
    #[must_use]
    pub fn workout_logs(&self) -> WorkoutLogManager {
        WorkoutLogManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a table or index cannot be created
    pub async fn migrate(&self) -> Result<(), StoreError> {
        self.migrate_custom_exercises().await?;
        self.migrate_routines().await?;
        self.migrate_workout_logs().await?;
        Ok(())
    }

    async fn migrate_custom_exercises(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS custom_exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                muscle_group TEXT NOT NULL,
                equipment TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_custom_exercises_user ON custom_exercises(user_id)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_routines(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS routines (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                exercises TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_routines_user_updated ON routines(user_id, updated_at)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_workout_logs(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_logs (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                routine_id TEXT,
                routine_name TEXT,
                sets TEXT NOT NULL,
                duration INTEGER NOT NULL,
                started_at TEXT NOT NULL,
                completed_at TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT ''
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_workout_logs_user_completed
            ON workout_logs(user_id, completed_at)
            ",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl RoutineStore for Database {
    async fn get_routine(
        &self,
        user_id: &str,
        routine_id: &str,
    ) -> Result<Option<Routine>, StoreError> {
        self.routines().get_routine(user_id, routine_id).await
    }
}

#[async_trait]
impl WorkoutLogStore for Database {
    async fn submit(&self, log: &WorkoutLog) -> Result<(), StoreError> {
        self.workout_logs().submit(log).await
    }
}

/// Encode a timestamp for storage
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp
pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Serialization {
            context: format!("Invalid timestamp '{value}': {e}"),
        })
}
