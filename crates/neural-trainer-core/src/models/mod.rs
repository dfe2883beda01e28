// ABOUTME: Core data models for exercises, routines, sessions, and workout logs
// ABOUTME: Re-exports the fundamental data structures shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Data Models
//!
//! - `Exercise` / `ExerciseRef`: library entries and the snapshot a session keeps
//! - `Routine`: reusable template of exercises with planned sets/reps
//! - `SessionSnapshot`: serialized in-progress workout
//! - `WorkoutLog`: persisted record of a finished workout
//!
//! All models serialize with camelCase field names so stored records keep the
//! shape the web client wrote.

mod exercise;
mod routine;
mod session;
mod workout_log;

pub use exercise::{Equipment, Exercise, ExerciseRef, MuscleGroup};
pub use routine::{NewRoutine, Routine, RoutineExercise, RoutineRef};
pub use session::{SessionExercise, SessionSnapshot, SetEntry};
pub use workout_log::{SetLog, WorkoutLog};
