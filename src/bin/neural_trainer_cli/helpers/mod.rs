// ABOUTME: Shared helpers for neural-trainer commands
// ABOUTME: Command context, argument parsers, and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

pub mod display;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use neural_trainer::{
    cache::{Cache, SessionCacheBackend, SessionCacheConfig},
    catalog::ExerciseLibrary,
    constants::env_config,
    database::Database,
    errors::{AppError, AppResult},
    models::{Equipment, MuscleGroup, RoutineExercise},
    session::{ActiveWorkoutSession, RestoreOutcome},
};
use std::sync::Arc;
use tracing::warn;

/// Collaborators shared by every command
pub struct CliContext {
    pub database: Arc<Database>,
    pub cache: Arc<Cache>,
    pub user_id: String,
}

impl CliContext {
    pub fn new(database: Database, cache: Cache, user_id: String) -> Self {
        Self {
            database: Arc::new(database),
            cache: Arc::new(cache),
            user_id,
        }
    }

    /// Session for the configured user, restored from the cache
    pub async fn open_session(&self) -> ActiveWorkoutSession {
        let mut session =
            ActiveWorkoutSession::new(&self.user_id, self.cache.clone(), self.database.clone());
        if let RestoreOutcome::Discarded { reason } = session.init().await {
            warn!("Saved workout could not be resumed: {reason}");
            eprintln!("Saved workout could not be resumed and was discarded ({reason})");
        }
        session
    }

    /// Built-in plus custom exercises for the configured user
    pub async fn library(&self) -> AppResult<ExerciseLibrary> {
        Ok(self.database.exercises().library(&self.user_id).await?)
    }
}

/// Exercise slot parsed from `exercise-id:sets:reps`
#[derive(Debug, Clone)]
pub struct RoutineSlot {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
}

impl RoutineSlot {
    pub fn into_routine_exercise(self, order: u32) -> RoutineExercise {
        RoutineExercise {
            exercise_id: self.exercise_id,
            planned_sets: self.sets,
            planned_reps: self.reps,
            order,
        }
    }
}

pub fn parse_routine_slot(value: &str) -> Result<RoutineSlot, String> {
    let mut parts = value.split(':');
    let (Some(exercise_id), Some(sets), Some(reps), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected exercise-id:sets:reps, got '{value}'"));
    };
    if exercise_id.is_empty() {
        return Err("exercise id cannot be empty".to_owned());
    }
    let sets = sets
        .parse()
        .map_err(|e| format!("invalid sets '{sets}': {e}"))?;
    let reps = reps
        .parse()
        .map_err(|e| format!("invalid reps '{reps}': {e}"))?;
    Ok(RoutineSlot {
        exercise_id: exercise_id.to_owned(),
        sets,
        reps,
    })
}

pub fn parse_muscle_group(value: &str) -> Result<MuscleGroup, String> {
    MuscleGroup::ALL
        .into_iter()
        .find(|group| group.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            let names: Vec<&str> = MuscleGroup::ALL.iter().map(MuscleGroup::as_str).collect();
            format!("unknown muscle group '{value}' (expected one of {})", names.join(", "))
        })
}

pub fn parse_equipment(value: &str) -> Result<Equipment, String> {
    Equipment::ALL
        .into_iter()
        .find(|equipment| equipment.as_str().eq_ignore_ascii_case(value))
        .ok_or_else(|| {
            let names: Vec<&str> = Equipment::ALL.iter().map(Equipment::as_str).collect();
            format!("unknown equipment '{value}' (expected one of {})", names.join(", "))
        })
}

/// Convert a 1-based exercise number from the command line to an index
pub fn exercise_index(number: Option<usize>, current: usize) -> AppResult<usize> {
    match number {
        None => Ok(current),
        Some(0) => Err(AppError::invalid_input("exercise numbers start at 1")),
        Some(n) => Ok(n - 1),
    }
}

/// Calendar date in `YYYY-MM-DD` form
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

/// Inclusive UTC bounds covering whole days from `since` through `until`
///
/// Returns `None` when neither bound is given. A missing bound falls back to
/// the Unix epoch or the last day of year 9999.
pub fn day_range(
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
) -> AppResult<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    if since.is_none() && until.is_none() {
        return Ok(None);
    }
    let first = since
        .or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1))
        .unwrap_or(NaiveDate::MIN);
    let last = until
        .or_else(|| NaiveDate::from_ymd_opt(9999, 12, 31))
        .unwrap_or(NaiveDate::MAX);
    if first > last {
        return Err(AppError::invalid_input("--since must not be after --until"));
    }
    let start = first.and_time(NaiveTime::MIN).and_utc();
    let end = last
        .and_hms_micro_opt(23, 59, 59, 999_999)
        .map_or(start, |t| t.and_utc());
    Ok(Some((start, end)))
}

/// Reject cache backends that cannot carry a workout between invocations
pub fn ensure_persistent_cache(config: &SessionCacheConfig) -> AppResult<()> {
    match config.backend {
        SessionCacheBackend::File => Ok(()),
        SessionCacheBackend::Memory => Err(AppError::config(format!(
            "{}=memory cannot resume a workout across CLI invocations; use file",
            env_config::SESSION_CACHE_BACKEND
        ))),
    }
}
