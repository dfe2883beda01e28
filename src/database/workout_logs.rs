// ABOUTME: Database operations for finished workout logs
// ABOUTME: Inserts are idempotent on the client-generated log id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{format_timestamp, parse_timestamp};
use crate::errors::StoreError;
use crate::logging::AppLogger;
use crate::models::WorkoutLog;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::time::Instant;
use tracing::debug;

const SELECT_COLUMNS: &str = r"
    SELECT id, user_id, routine_id, routine_name, sets, duration, started_at, completed_at, notes
    FROM workout_logs
";

/// Workout log database operations manager
pub struct WorkoutLogManager {
    pool: SqlitePool,
}

impl WorkoutLogManager {
    /// Create a new workout log manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a finished workout
    ///
    /// A log whose id is already stored is left untouched and the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or inserted
    pub async fn submit(&self, log: &WorkoutLog) -> Result<(), StoreError> {
        let started = Instant::now();
        let duration = i64::try_from(log.duration)
            .map_err(|_| StoreError::validation("workout duration is too large"))?;

        let result = sqlx::query(
            r"
            INSERT INTO workout_logs
                (id, user_id, routine_id, routine_name, sets, duration, started_at, completed_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(&log.id)
        .bind(&log.user_id)
        .bind(log.routine_id.as_deref())
        .bind(log.routine_name.as_deref())
        .bind(serde_json::to_string(&log.sets)?)
        .bind(duration)
        .bind(format_timestamp(&log.started_at))
        .bind(format_timestamp(&log.completed_at))
        .bind(&log.notes)
        .execute(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "insert",
            "workout_logs",
            result.is_ok(),
            started.elapsed().as_millis() as u64,
        );
        if result?.rows_affected() == 0 {
            debug!(workout.id = %log.id, "Workout log already stored");
        }
        Ok(())
    }

    /// Fetch one workout log
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_workout_log(
        &self,
        user_id: &str,
        log_id: &str,
    ) -> Result<Option<WorkoutLog>, StoreError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1 AND user_id = $2"))
            .bind(log_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_workout_log).transpose()
    }

    /// All of the user's workouts, most recently completed first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_workout_logs(&self, user_id: &str) -> Result<Vec<WorkoutLog>, StoreError> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE user_id = $1 ORDER BY completed_at DESC, id ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout_log).collect()
    }

    /// Workouts started from `routine_id`, most recently completed first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_by_routine(
        &self,
        user_id: &str,
        routine_id: &str,
    ) -> Result<Vec<WorkoutLog>, StoreError> {
        let rows = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE user_id = $1 AND routine_id = $2 ORDER BY completed_at DESC, id ASC"
        ))
        .bind(user_id)
        .bind(routine_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout_log).collect()
    }

    /// Workouts completed within `start..=end`, most recently completed first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_in_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkoutLog>, StoreError> {
        let rows = sqlx::query(&format!(
            r"{SELECT_COLUMNS}
            WHERE user_id = $1 AND completed_at >= $2 AND completed_at <= $3
            ORDER BY completed_at DESC, id ASC"
        ))
        .bind(user_id)
        .bind(format_timestamp(&start))
        .bind(format_timestamp(&end))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_workout_log).collect()
    }

    /// Delete a workout log
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown log, or a database error
    pub async fn delete_workout_log(&self, user_id: &str, log_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM workout_logs WHERE id = $1 AND user_id = $2")
            .bind(log_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("workout log", log_id));
        }
        Ok(())
    }
}

fn row_to_workout_log(row: &SqliteRow) -> Result<WorkoutLog, StoreError> {
    let sets_json: String = row.try_get("sets")?;
    let duration: i64 = row.try_get("duration")?;
    let started_at: String = row.try_get("started_at")?;
    let completed_at: String = row.try_get("completed_at")?;

    Ok(WorkoutLog {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        routine_id: row.try_get("routine_id")?,
        routine_name: row.try_get("routine_name")?,
        sets: serde_json::from_str(&sets_json)?,
        duration: u64::try_from(duration).map_err(|_| StoreError::Serialization {
            context: format!("negative workout duration {duration}"),
        })?,
        started_at: parse_timestamp(&started_at)?,
        completed_at: parse_timestamp(&completed_at)?,
        notes: row.try_get("notes")?,
    })
}
