// ABOUTME: Derived workout metrics computed on read from session state
// ABOUTME: Duration, volume, per-exercise progress, and a printable summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::state::{elapsed_seconds, SessionState};
use crate::models::{SessionExercise, SessionSnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Seconds since the workout started, 0 when idle
#[must_use]
pub fn workout_duration(state: &SessionState, now: DateTime<Utc>) -> u64 {
    state
        .snapshot()
        .map_or(0, |snapshot| elapsed_seconds(snapshot.started_at, now))
}

/// Sum of weight x reps over every completed set
#[must_use]
pub fn total_volume(exercises: &[SessionExercise]) -> f64 {
    exercises.iter().map(exercise_volume).sum()
}

/// Sum of weight x reps over one exercise's sets
#[must_use]
pub fn exercise_volume(exercise: &SessionExercise) -> f64 {
    exercise.completed_sets.iter().map(|set| set.volume()).sum()
}

/// Mean weight per set, `None` before the first set
#[must_use]
pub fn average_weight(exercise: &SessionExercise) -> Option<f64> {
    let sets = &exercise.completed_sets;
    if sets.is_empty() {
        return None;
    }
    let total: f64 = sets.iter().map(|set| set.weight).sum();
    Some(total / sets.len() as f64)
}

/// Planned sets not yet logged
#[must_use]
pub fn remaining_sets(exercise: &SessionExercise) -> u32 {
    exercise
        .planned_sets
        .saturating_sub(exercise.completed_sets.len() as u32)
}

/// Whether at least the planned number of sets has been logged
#[must_use]
pub fn plan_met(exercise: &SessionExercise) -> bool {
    remaining_sets(exercise) == 0
}

/// The exercise under the cursor
#[must_use]
pub fn current_exercise(snapshot: &SessionSnapshot) -> Option<&SessionExercise> {
    snapshot.exercises.get(snapshot.current_exercise_index)
}

/// Format seconds as `MM:SS`; minutes are not wrapped into hours
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Point-in-time overview of an in-progress workout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Routine name, if started from one
    pub routine_name: Option<String>,
    /// Exercise slots in the session
    pub exercise_count: usize,
    /// Sets logged across all exercises
    pub completed_sets: usize,
    /// Weight x reps across all sets
    pub total_volume: f64,
    /// Seconds elapsed
    pub duration: u64,
    /// Cursor position
    pub current_exercise_index: usize,
    /// Name of the exercise under the cursor
    pub current_exercise: Option<String>,
}

/// Summarize the workout, `None` when idle
#[must_use]
pub fn summarize(state: &SessionState, now: DateTime<Utc>) -> Option<SessionSummary> {
    let snapshot = state.snapshot()?;
    Some(SessionSummary {
        routine_name: snapshot.routine.as_ref().map(|r| r.name.clone()),
        exercise_count: snapshot.exercises.len(),
        completed_sets: snapshot
            .exercises
            .iter()
            .map(|e| e.completed_sets.len())
            .sum(),
        total_volume: total_volume(&snapshot.exercises),
        duration: workout_duration(state, now),
        current_exercise_index: snapshot.current_exercise_index,
        current_exercise: current_exercise(snapshot).map(|e| e.exercise.name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ExerciseCatalog, ExerciseLibrary};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn bench_session() -> SessionState {
        let library = ExerciseLibrary::with_defaults();
        let mut state = SessionState::Idle;
        state.start_empty("athlete-1", "log-1".to_owned(), t0()).unwrap();
        state
            .add_exercise(library.resolve("bench-press").unwrap(), 3, 10)
            .unwrap();
        state
    }

    #[test]
    fn test_empty_workout_with_bench_press() {
        let mut state = bench_session();
        state.log_set(0, 135.0, 10, "a".to_owned(), t0()).unwrap();
        state.log_set(0, 140.0, 8, "b".to_owned(), t0()).unwrap();

        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.exercises[0].completed_sets.len(), 2);
        assert!((total_volume(&snapshot.exercises) - 2470.0).abs() < f64::EPSILON);
        assert_eq!(remaining_sets(&snapshot.exercises[0]), 1);
        assert!(!plan_met(&snapshot.exercises[0]));
        assert_eq!(average_weight(&snapshot.exercises[0]), Some(137.5));
    }

    #[test]
    fn test_extra_sets_saturate_remaining() {
        let mut state = bench_session();
        for i in 0..4 {
            state.log_set(0, 95.0, 10, format!("s{i}"), t0()).unwrap();
        }
        let exercise = &state.snapshot().unwrap().exercises[0];
        assert_eq!(remaining_sets(exercise), 0);
        assert!(plan_met(exercise));
    }

    #[test]
    fn test_duration_and_summary() {
        let state = bench_session();
        assert_eq!(workout_duration(&SessionState::Idle, t0()), 0);
        assert_eq!(workout_duration(&state, t0() + Duration::seconds(95)), 95);

        let summary = summarize(&state, t0() + Duration::seconds(61)).unwrap();
        assert_eq!(summary.duration, 61);
        assert_eq!(summary.exercise_count, 1);
        assert_eq!(summary.current_exercise.as_deref(), Some("Bench Press"));
        assert!(summarize(&SessionState::Idle, t0()).is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(95), "01:35");
        assert_eq!(format_duration(3725), "62:05");
    }
}
