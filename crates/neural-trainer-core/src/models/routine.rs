// ABOUTME: Routine templates with ordered exercises and planned sets/reps
// ABOUTME: Routine, RoutineExercise, NewRoutine, and RoutineRef definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One exercise slot in a routine template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercise {
    /// Exercise library identifier
    pub exercise_id: String,
    /// Target number of sets
    pub planned_sets: u32,
    /// Target reps per set
    pub planned_reps: u32,
    /// Position within the routine (0-based)
    pub order: u32,
}

/// A named, reusable workout template owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Unique identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Exercise slots
    pub exercises: Vec<RoutineExercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Routine {
    /// Lightweight reference kept by a session started from this routine
    #[must_use]
    pub fn to_ref(&self) -> RoutineRef {
        RoutineRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Exercise slots sorted by `order`, ties kept in stored sequence
    #[must_use]
    pub fn ordered_exercises(&self) -> Vec<&RoutineExercise> {
        let mut exercises: Vec<&RoutineExercise> = self.exercises.iter().collect();
        exercises.sort_by_key(|exercise| exercise.order);
        exercises
    }
}

/// Routine fields supplied by a caller creating or updating a routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoutine {
    /// Display name
    pub name: String,
    /// Exercise slots in the desired sequence
    pub exercises: Vec<RoutineExercise>,
}

/// Reference from a session or workout log back to its routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineRef {
    /// Routine identifier
    pub id: String,
    /// Routine name at session start
    pub name: String,
}
