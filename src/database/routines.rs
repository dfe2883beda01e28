// ABOUTME: Database operations for routine templates
// ABOUTME: Validates and renumbers exercise slots before every write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{format_timestamp, parse_timestamp};
use crate::errors::StoreError;
use crate::logging::AppLogger;
use crate::models::{NewRoutine, Routine, RoutineExercise};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use std::collections::HashSet;
use std::time::Instant;
use uuid::Uuid;

/// Check a routine and return its exercises renumbered `0..n` in the given sequence
///
/// # Errors
///
/// Returns [`StoreError::Validation`] for a blank name, no exercises, a repeated
/// exercise, or a zero sets/reps target
pub fn validate_routine(routine: &NewRoutine) -> Result<Vec<RoutineExercise>, StoreError> {
    if routine.name.trim().is_empty() {
        return Err(StoreError::validation("routine name cannot be empty"));
    }
    if routine.exercises.is_empty() {
        return Err(StoreError::validation("routine needs at least one exercise"));
    }

    let mut seen = HashSet::new();
    routine
        .exercises
        .iter()
        .enumerate()
        .map(|(position, exercise)| {
            if !seen.insert(exercise.exercise_id.as_str()) {
                return Err(StoreError::validation(format!(
                    "exercise '{}' appears more than once",
                    exercise.exercise_id
                )));
            }
            if exercise.planned_sets == 0 || exercise.planned_reps == 0 {
                return Err(StoreError::validation(format!(
                    "exercise '{}' needs positive sets and reps",
                    exercise.exercise_id
                )));
            }
            Ok(RoutineExercise {
                order: position as u32,
                ..exercise.clone()
            })
        })
        .collect()
}

/// Routine database operations manager
pub struct RoutineManager {
    pool: SqlitePool,
}

impl RoutineManager {
    /// Create a new routine manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a routine
    ///
    /// # Errors
    ///
    /// Returns a validation error (see [`validate_routine`]) or a database error
    pub async fn create_routine(
        &self,
        user_id: &str,
        routine: NewRoutine,
    ) -> Result<Routine, StoreError> {
        let started = Instant::now();
        let exercises = validate_routine(&routine)?;
        let now = chrono::Utc::now();
        let created = Routine {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_owned(),
            name: routine.name.trim().to_owned(),
            exercises,
            created_at: now,
            updated_at: now,
        };

        let result = sqlx::query(
            r"
            INSERT INTO routines (id, user_id, name, exercises, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ",
        )
        .bind(&created.id)
        .bind(user_id)
        .bind(&created.name)
        .bind(serde_json::to_string(&created.exercises)?)
        .bind(format_timestamp(&now))
        .execute(&self.pool)
        .await;

        AppLogger::log_database_operation(
            "insert",
            "routines",
            result.is_ok(),
            started.elapsed().as_millis() as u64,
        );
        result?;
        Ok(created)
    }

    /// Fetch one routine
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_routine(
        &self,
        user_id: &str,
        routine_id: &str,
    ) -> Result<Option<Routine>, StoreError> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, name, exercises, created_at, updated_at
            FROM routines
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(routine_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_routine).transpose()
    }

    /// Routines owned by `user_id`, most recently updated first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_routines(&self, user_id: &str) -> Result<Vec<Routine>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, exercises, created_at, updated_at
            FROM routines
            WHERE user_id = $1
            ORDER BY updated_at DESC, id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_routine).collect()
    }

    /// Replace a routine's name and exercises
    ///
    /// # Errors
    ///
    /// Returns a validation error, [`StoreError::NotFound`] for an unknown routine,
    /// or a database error
    pub async fn update_routine(
        &self,
        user_id: &str,
        routine_id: &str,
        routine: NewRoutine,
    ) -> Result<Routine, StoreError> {
        let exercises = validate_routine(&routine)?;
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r"
            UPDATE routines SET name = $1, exercises = $2, updated_at = $3
            WHERE id = $4 AND user_id = $5
            ",
        )
        .bind(routine.name.trim())
        .bind(serde_json::to_string(&exercises)?)
        .bind(format_timestamp(&now))
        .bind(routine_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("routine", routine_id));
        }
        self.get_routine(user_id, routine_id)
            .await?
            .ok_or_else(|| StoreError::not_found("routine", routine_id))
    }

    /// Delete a routine; workout logs that reference it are kept
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown routine, or a database error
    pub async fn delete_routine(&self, user_id: &str, routine_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM routines WHERE id = $1 AND user_id = $2")
            .bind(routine_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("routine", routine_id));
        }
        Ok(())
    }
}

fn row_to_routine(row: &SqliteRow) -> Result<Routine, StoreError> {
    let exercises_json: String = row.try_get("exercises")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Routine {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        exercises: serde_json::from_str(&exercises_json)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(exercise_id: &str, order: u32) -> RoutineExercise {
        RoutineExercise {
            exercise_id: exercise_id.to_owned(),
            planned_sets: 3,
            planned_reps: 10,
            order,
        }
    }

    #[test]
    fn test_validate_renumbers_in_given_sequence() {
        let routine = NewRoutine {
            name: "Leg Day".to_owned(),
            exercises: vec![slot("squats", 7), slot("lunges", 2), slot("calf-raises", 7)],
        };
        let orders: Vec<(String, u32)> = validate_routine(&routine)
            .unwrap()
            .into_iter()
            .map(|e| (e.exercise_id, e.order))
            .collect();
        assert_eq!(
            orders,
            [
                ("squats".to_owned(), 0),
                ("lunges".to_owned(), 1),
                ("calf-raises".to_owned(), 2)
            ]
        );
    }

    #[test]
    fn test_validate_rejects_bad_routines() {
        let blank = NewRoutine {
            name: "   ".to_owned(),
            exercises: vec![slot("squats", 0)],
        };
        let empty = NewRoutine {
            name: "Leg Day".to_owned(),
            exercises: vec![],
        };
        let duplicate = NewRoutine {
            name: "Leg Day".to_owned(),
            exercises: vec![slot("squats", 0), slot("squats", 1)],
        };
        let zero_sets = NewRoutine {
            name: "Leg Day".to_owned(),
            exercises: vec![RoutineExercise {
                planned_sets: 0,
                ..slot("squats", 0)
            }],
        };
        for routine in [blank, empty, duplicate, zero_sets] {
            assert!(matches!(
                validate_routine(&routine),
                Err(StoreError::Validation { .. })
            ));
        }
    }
}
