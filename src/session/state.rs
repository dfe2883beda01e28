// ABOUTME: Pure Idle/InProgress state machine for one user's active workout
// ABOUTME: Every transition validates first and mutates only on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::catalog::ExerciseCatalog;
use crate::errors::SessionError;
use crate::models::{
    ExerciseRef, Routine, SessionExercise, SessionSnapshot, SetEntry, SetLog, WorkoutLog,
};
use chrono::{DateTime, Utc};

/// Lifecycle state of an active workout
///
/// `SessionState` performs no I/O and reads no clock; callers pass in the
/// timestamps and identifiers each transition needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No workout in progress
    #[default]
    Idle,
    /// A workout is being tracked
    InProgress(SessionSnapshot),
}

impl SessionState {
    /// Whether a workout is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::InProgress(_))
    }

    /// The in-progress state, if any
    #[must_use]
    pub const fn snapshot(&self) -> Option<&SessionSnapshot> {
        match self {
            Self::Idle => None,
            Self::InProgress(snapshot) => Some(snapshot),
        }
    }

    fn active_mut(&mut self) -> Result<&mut SessionSnapshot, SessionError> {
        match self {
            Self::Idle => Err(SessionError::NoActiveSession),
            Self::InProgress(snapshot) => Ok(snapshot),
        }
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        match self {
            Self::Idle => Ok(()),
            Self::InProgress(_) => Err(SessionError::SessionAlreadyActive),
        }
    }

    /// Start a workout from a routine template
    ///
    /// Exercises are resolved in ascending routine order. Each session exercise
    /// keeps its routine `order`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionAlreadyActive`] if a workout is in progress
    /// - [`SessionError::ExerciseNotFound`] if the catalog cannot resolve an
    ///   exercise; the state stays `Idle`
    /// - [`SessionError::InvalidPlan`] if an entry plans zero sets or reps; the
    ///   state stays `Idle`
    pub fn start_with_routine<C>(
        &mut self,
        user_id: &str,
        routine: &Routine,
        catalog: &C,
        log_id: String,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError>
    where
        C: ExerciseCatalog + ?Sized,
    {
        self.ensure_idle()?;

        let exercises = routine
            .ordered_exercises()
            .into_iter()
            .map(|entry| {
                let exercise = catalog.resolve(&entry.exercise_id).ok_or_else(|| {
                    SessionError::ExerciseNotFound {
                        exercise_id: entry.exercise_id.clone(),
                    }
                })?;
                if entry.planned_sets == 0 || entry.planned_reps == 0 {
                    return Err(SessionError::invalid_plan(format!(
                        "routine entry '{}' needs positive planned sets and reps",
                        entry.exercise_id
                    )));
                }
                Ok(SessionExercise {
                    exercise,
                    planned_sets: entry.planned_sets,
                    planned_reps: entry.planned_reps,
                    completed_sets: Vec::new(),
                    order: entry.order,
                })
            })
            .collect::<Result<Vec<_>, SessionError>>()?;

        *self = Self::InProgress(SessionSnapshot::new(
            user_id,
            log_id,
            Some(routine.to_ref()),
            exercises,
            now,
        ));
        Ok(())
    }

    /// Start a workout with no exercises
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionAlreadyActive`] if a workout is in progress
    pub fn start_empty(
        &mut self,
        user_id: &str,
        log_id: String,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.ensure_idle()?;
        *self = Self::InProgress(SessionSnapshot::new(user_id, log_id, None, Vec::new(), now));
        Ok(())
    }

    /// Append an exercise slot and return its index
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSession`] when idle
    /// - [`SessionError::InvalidPlan`] for zero planned sets or reps
    pub fn add_exercise(
        &mut self,
        exercise: ExerciseRef,
        planned_sets: u32,
        planned_reps: u32,
    ) -> Result<usize, SessionError> {
        let snapshot = self.active_mut()?;
        if planned_sets == 0 {
            return Err(SessionError::invalid_plan("planned sets must be positive"));
        }
        if planned_reps == 0 {
            return Err(SessionError::invalid_plan("planned reps must be positive"));
        }

        let index = snapshot.exercises.len();
        snapshot.exercises.push(SessionExercise {
            exercise,
            planned_sets,
            planned_reps,
            completed_sets: Vec::new(),
            order: index as u32,
        });
        Ok(index)
    }

    /// Record a completed set against the exercise at `exercise_index`
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSession`] when idle
    /// - [`SessionError::ExerciseIndexOutOfRange`] for an unknown slot
    /// - [`SessionError::InvalidSet`] for a negative or non-finite weight, or zero reps
    pub fn log_set(
        &mut self,
        exercise_index: usize,
        weight: f64,
        reps: u32,
        set_id: String,
        now: DateTime<Utc>,
    ) -> Result<SetEntry, SessionError> {
        let snapshot = self.active_mut()?;
        let slot = slot_mut(snapshot, exercise_index)?;

        if !weight.is_finite() {
            return Err(SessionError::invalid_set("weight must be a finite number"));
        }
        if weight < 0.0 {
            return Err(SessionError::invalid_set("weight cannot be negative"));
        }
        if reps == 0 {
            return Err(SessionError::invalid_set("reps must be positive"));
        }

        let entry = SetEntry {
            id: set_id,
            weight,
            reps,
            order: slot.completed_sets.len() as u32 + 1,
            completed_at: now,
        };
        slot.completed_sets.push(entry.clone());
        Ok(entry)
    }

    /// Remove the most recent set of the exercise at `exercise_index`
    ///
    /// Returns `None` when that exercise has no sets.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSession`] when idle
    /// - [`SessionError::ExerciseIndexOutOfRange`] for an unknown slot
    pub fn undo_last_set(&mut self, exercise_index: usize) -> Result<Option<SetEntry>, SessionError> {
        let snapshot = self.active_mut()?;
        Ok(slot_mut(snapshot, exercise_index)?.completed_sets.pop())
    }

    /// Advance the cursor, staying on the last exercise at the boundary
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub fn next_exercise(&mut self) -> Result<usize, SessionError> {
        let snapshot = self.active_mut()?;
        if snapshot.current_exercise_index + 1 < snapshot.exercises.len() {
            snapshot.current_exercise_index += 1;
        }
        Ok(snapshot.current_exercise_index)
    }

    /// Move the cursor back, staying on the first exercise at the boundary
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub fn previous_exercise(&mut self) -> Result<usize, SessionError> {
        let snapshot = self.active_mut()?;
        snapshot.current_exercise_index = snapshot.current_exercise_index.saturating_sub(1);
        Ok(snapshot.current_exercise_index)
    }

    /// Replace the workout notes
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub fn update_notes(&mut self, notes: impl Into<String>) -> Result<(), SessionError> {
        self.active_mut()?.notes = notes.into();
        Ok(())
    }

    /// Build the workout log a finish at `completed_at` would submit
    ///
    /// Sets are flattened in exercise order and keep their per-exercise `order`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub fn build_workout_log(&self, completed_at: DateTime<Utc>) -> Result<WorkoutLog, SessionError> {
        let snapshot = self.snapshot().ok_or(SessionError::NoActiveSession)?;

        let sets = snapshot
            .exercises
            .iter()
            .flat_map(|slot| {
                slot.completed_sets.iter().map(move |set| SetLog {
                    id: set.id.clone(),
                    exercise_id: slot.exercise.id.clone(),
                    weight: set.weight,
                    reps: set.reps,
                    order: set.order,
                    completed_at: set.completed_at,
                })
            })
            .collect();

        Ok(WorkoutLog {
            id: snapshot.log_id.clone(),
            user_id: snapshot.user_id.clone(),
            routine_id: snapshot.routine.as_ref().map(|r| r.id.clone()),
            routine_name: snapshot.routine.as_ref().map(|r| r.name.clone()),
            sets,
            duration: elapsed_seconds(snapshot.started_at, completed_at),
            started_at: snapshot.started_at,
            completed_at,
            notes: snapshot.notes.clone(),
        })
    }

    /// Return to `Idle`, handing back the discarded state
    pub fn clear(&mut self) -> Option<SessionSnapshot> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::InProgress(snapshot) => Some(snapshot),
        }
    }
}

impl From<SessionSnapshot> for SessionState {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self::InProgress(snapshot)
    }
}

fn slot_mut(
    snapshot: &mut SessionSnapshot,
    index: usize,
) -> Result<&mut SessionExercise, SessionError> {
    let len = snapshot.exercises.len();
    snapshot
        .exercises
        .get_mut(index)
        .ok_or(SessionError::ExerciseIndexOutOfRange { index, len })
}

/// Whole seconds between two instants, floored and never negative
#[must_use]
pub fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    (to - from).num_seconds().max(0) as u64
}
