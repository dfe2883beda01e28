// ABOUTME: Database operations for user-created exercises
// ABOUTME: Custom exercises extend the built-in library for one user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::format_timestamp;
use crate::catalog::ExerciseLibrary;
use crate::errors::StoreError;
use crate::models::{Equipment, Exercise, MuscleGroup};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

/// Custom exercise database operations manager
pub struct ExerciseManager {
    pool: SqlitePool,
}

impl ExerciseManager {
    /// Create a new exercise manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a custom exercise with a generated id
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name, or a database error
    pub async fn add_custom_exercise(
        &self,
        user_id: &str,
        name: &str,
        muscle_group: MuscleGroup,
        equipment: Equipment,
    ) -> Result<Exercise, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::validation("exercise name cannot be empty"));
        }

        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            muscle_group,
            equipment,
            is_custom: true,
            user_id: Some(user_id.to_owned()),
        };

        sqlx::query(
            r"
            INSERT INTO custom_exercises (id, user_id, name, muscle_group, equipment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&exercise.id)
        .bind(user_id)
        .bind(&exercise.name)
        .bind(muscle_group.as_str())
        .bind(equipment.as_str())
        .bind(format_timestamp(&chrono::Utc::now()))
        .execute(&self.pool)
        .await?;

        Ok(exercise)
    }

    /// Custom exercises owned by `user_id`, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn list_custom_exercises(&self, user_id: &str) -> Result<Vec<Exercise>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, muscle_group, equipment
            FROM custom_exercises
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Delete a custom exercise
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the user has no such exercise
    pub async fn delete_custom_exercise(
        &self,
        user_id: &str,
        exercise_id: &str,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM custom_exercises WHERE id = $1 AND user_id = $2")
            .bind(exercise_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("exercise", exercise_id));
        }
        Ok(())
    }

    /// Built-in exercises plus the user's custom exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the custom exercises cannot be loaded
    pub async fn library(&self, user_id: &str) -> Result<ExerciseLibrary, StoreError> {
        Ok(ExerciseLibrary::with_custom(
            self.list_custom_exercises(user_id).await?,
        ))
    }
}

fn row_to_exercise(row: &SqliteRow) -> Result<Exercise, StoreError> {
    let muscle_group: String = row.try_get("muscle_group")?;
    let equipment: String = row.try_get("equipment")?;

    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        muscle_group: MuscleGroup::parse(&muscle_group),
        equipment: Equipment::parse(&equipment),
        is_custom: true,
        user_id: Some(row.try_get("user_id")?),
    })
}
