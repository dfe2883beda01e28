// ABOUTME: Exercise catalog lookup used when a session materializes a routine
// ABOUTME: ExerciseLibrary merges built-in and custom exercises with filtering and search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Exercise Catalog
//!
//! The session only needs to turn an exercise id into an [`ExerciseRef`]. Anything
//! that can do that implements [`ExerciseCatalog`]: a plain slice of exercises, or
//! the full [`ExerciseLibrary`] of built-in plus user-created exercises.

/// Built-in exercise definitions
pub mod defaults;

pub use defaults::default_exercises;

use crate::models::{Exercise, ExerciseRef, MuscleGroup};

/// Resolves exercise identifiers to exercise snapshots
pub trait ExerciseCatalog {
    /// Look up an exercise by id
    fn resolve(&self, exercise_id: &str) -> Option<ExerciseRef>;
}

impl ExerciseCatalog for [Exercise] {
    fn resolve(&self, exercise_id: &str) -> Option<ExerciseRef> {
        self.iter()
            .find(|exercise| exercise.id == exercise_id)
            .map(ExerciseRef::from)
    }
}

impl ExerciseCatalog for Vec<Exercise> {
    fn resolve(&self, exercise_id: &str) -> Option<ExerciseRef> {
        self.as_slice().resolve(exercise_id)
    }
}

/// Built-in exercises followed by a user's custom exercises
#[derive(Debug, Clone, Default)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
}

impl ExerciseLibrary {
    /// Library containing only the built-in exercises
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            exercises: default_exercises(),
        }
    }

    /// Library of built-ins plus `custom`
    ///
    /// A custom exercise never shadows a built-in with the same id; lookups find
    /// the built-in first.
    #[must_use]
    pub fn with_custom(custom: Vec<Exercise>) -> Self {
        let mut exercises = default_exercises();
        exercises.extend(custom);
        Self { exercises }
    }

    /// All exercises
    #[must_use]
    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up the full exercise record
    #[must_use]
    pub fn get(&self, exercise_id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }

    /// Exercises training `muscle_group`
    #[must_use]
    pub fn by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect()
    }

    /// Case-insensitive substring search over exercise names
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Exercise> {
        let needle = query.to_lowercase();
        self.exercises
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Custom exercises only
    #[must_use]
    pub fn custom(&self) -> Vec<&Exercise> {
        self.exercises.iter().filter(|e| e.is_custom).collect()
    }
}

impl ExerciseCatalog for ExerciseLibrary {
    fn resolve(&self, exercise_id: &str) -> Option<ExerciseRef> {
        self.get(exercise_id).map(ExerciseRef::from)
    }
}
