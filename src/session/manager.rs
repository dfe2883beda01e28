// ABOUTME: Active workout session owner wiring the state machine to cache, log store, and clock
// ABOUTME: Persists a snapshot after every mutation and submits the workout log on finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::metrics::{self, SessionSummary};
use super::state::SessionState;
use crate::cache::SessionCache;
use crate::catalog::ExerciseCatalog;
use crate::clock::{Clock, SystemClock};
use crate::errors::{SessionError, StoreError};
use crate::logging::AppLogger;
use crate::models::{ExerciseRef, Routine, SessionExercise, SessionSnapshot, SetEntry, WorkoutLog};
use crate::stores::{RoutineStore, WorkoutLogStore};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Result of restoring a session from the local cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A saved workout was resumed
    Restored,
    /// Nothing was saved
    Empty,
    /// A saved entry was unusable and has been cleared
    Discarded {
        /// Why the entry was rejected
        reason: String,
    },
    /// Restore already ran, or a workout was started before `init`
    Skipped,
}

/// One user's active workout
///
/// Every method takes `&mut self`, so a single owner can never overlap two
/// operations. Wrap in [`super::SharedWorkoutSession`] to share across tasks.
pub struct ActiveWorkoutSession {
    user_id: String,
    state: SessionState,
    cache: Arc<dyn SessionCache>,
    logs: Arc<dyn WorkoutLogStore>,
    clock: Arc<dyn Clock>,
    initialized: bool,
}

impl ActiveWorkoutSession {
    /// Create an idle session for `user_id` using wall-clock time
    pub fn new(
        user_id: impl Into<String>,
        cache: Arc<dyn SessionCache>,
        logs: Arc<dyn WorkoutLogStore>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            state: SessionState::Idle,
            cache,
            logs,
            clock: Arc::new(SystemClock),
            initialized: false,
        }
    }

    /// Replace the time source
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Restore a saved workout from the cache
    ///
    /// Runs once per login; later calls return [`RestoreOutcome::Skipped`] until
    /// [`Self::teardown`]. Entries that fail to decode or were written by an
    /// incompatible version are cleared. An entry owned by another user is left
    /// in place and the slot is treated as empty.
    pub async fn init(&mut self) -> RestoreOutcome {
        if self.initialized || self.state.is_active() {
            self.initialized = true;
            return RestoreOutcome::Skipped;
        }
        self.initialized = true;

        let loaded = match self.cache.load(&self.user_id).await {
            Ok(loaded) => loaded,
            Err(StoreError::Serialization { context }) => {
                return self.discard(format!("snapshot does not decode: {context}")).await;
            }
            Err(e) => {
                AppLogger::log_cache_failure(&self.user_id, "load", &e);
                return RestoreOutcome::Empty;
            }
        };

        let Some(mut snapshot) = loaded else {
            return RestoreOutcome::Empty;
        };
        if !snapshot.is_current_version() {
            return self
                .discard(format!("unsupported snapshot version {}", snapshot.version))
                .await;
        }
        if snapshot.user_id != self.user_id {
            warn!(
                user.id = %self.user_id,
                owner = %snapshot.user_id,
                "Ignoring saved session owned by another user"
            );
            return RestoreOutcome::Empty;
        }

        let last = snapshot.exercises.len().saturating_sub(1);
        snapshot.current_exercise_index = snapshot.current_exercise_index.min(last);
        self.state = SessionState::from(snapshot);
        self.log_event("restore");
        RestoreOutcome::Restored
    }

    async fn discard(&self, reason: String) -> RestoreOutcome {
        warn!(user.id = %self.user_id, reason = %reason, "Discarding saved session");
        if let Err(e) = self.cache.clear(&self.user_id).await {
            AppLogger::log_cache_failure(&self.user_id, "clear", &e);
        }
        RestoreOutcome::Discarded { reason }
    }

    /// Drop in-memory state without touching the cache
    ///
    /// The saved workout is resumed by the next [`Self::init`].
    pub fn teardown(&mut self) {
        self.state = SessionState::Idle;
        self.initialized = false;
    }

    /// Start a workout from a routine template
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionAlreadyActive`] if a workout is in progress
    /// - [`SessionError::ExerciseNotFound`] if a routine exercise is unknown
    pub async fn start_with_routine<C>(
        &mut self,
        routine: &Routine,
        catalog: &C,
    ) -> Result<(), SessionError>
    where
        C: ExerciseCatalog + Sync + ?Sized,
    {
        self.state.start_with_routine(
            &self.user_id,
            routine,
            catalog,
            Uuid::new_v4().to_string(),
            self.clock.now(),
        )?;
        self.persist().await;
        self.log_event("start");
        Ok(())
    }

    /// Look up `routine_id` and start a workout from it
    ///
    /// # Errors
    ///
    /// - [`SessionError::SessionAlreadyActive`] if a workout is in progress
    /// - [`SessionError::RoutineNotFound`] if the user has no such routine
    /// - [`SessionError::RoutineLookupFailed`] if the store cannot be queried
    /// - [`SessionError::ExerciseNotFound`] if a routine exercise is unknown
    pub async fn start_from_store<C>(
        &mut self,
        routine_id: &str,
        routines: &dyn RoutineStore,
        catalog: &C,
    ) -> Result<(), SessionError>
    where
        C: ExerciseCatalog + Sync + ?Sized,
    {
        if self.state.is_active() {
            return Err(SessionError::SessionAlreadyActive);
        }
        let routine = routines
            .get_routine(&self.user_id, routine_id)
            .await
            .map_err(|source| SessionError::RoutineLookupFailed { source })?
            .ok_or_else(|| SessionError::RoutineNotFound {
                routine_id: routine_id.to_owned(),
            })?;
        self.start_with_routine(&routine, catalog).await
    }

    /// Start a workout with no exercises
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SessionAlreadyActive`] if a workout is in progress
    pub async fn start_empty(&mut self) -> Result<(), SessionError> {
        self.state
            .start_empty(&self.user_id, Uuid::new_v4().to_string(), self.clock.now())?;
        self.persist().await;
        self.log_event("start");
        Ok(())
    }

    /// Append an exercise and return its index
    ///
    /// # Errors
    ///
    /// See [`SessionState::add_exercise`]
    pub async fn add_exercise(
        &mut self,
        exercise: ExerciseRef,
        planned_sets: u32,
        planned_reps: u32,
    ) -> Result<usize, SessionError> {
        let index = self.state.add_exercise(exercise, planned_sets, planned_reps)?;
        debug!(user.id = %self.user_id, index, "Added exercise");
        self.persist().await;
        Ok(index)
    }

    /// Resolve `exercise_id` against `catalog` and append it
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ExerciseNotFound`] for an unknown id, otherwise see
    /// [`SessionState::add_exercise`]
    pub async fn add_exercise_by_id<C>(
        &mut self,
        exercise_id: &str,
        catalog: &C,
        planned_sets: u32,
        planned_reps: u32,
    ) -> Result<usize, SessionError>
    where
        C: ExerciseCatalog + Sync + ?Sized,
    {
        if !self.state.is_active() {
            return Err(SessionError::NoActiveSession);
        }
        let exercise = catalog
            .resolve(exercise_id)
            .ok_or_else(|| SessionError::ExerciseNotFound {
                exercise_id: exercise_id.to_owned(),
            })?;
        self.add_exercise(exercise, planned_sets, planned_reps).await
    }

    /// Record a completed set
    ///
    /// # Errors
    ///
    /// See [`SessionState::log_set`]
    pub async fn log_set(
        &mut self,
        exercise_index: usize,
        weight: f64,
        reps: u32,
    ) -> Result<SetEntry, SessionError> {
        let entry = self.state.log_set(
            exercise_index,
            weight,
            reps,
            Uuid::new_v4().to_string(),
            self.clock.now(),
        )?;
        debug!(user.id = %self.user_id, exercise_index, weight, reps, "Logged set");
        self.persist().await;
        Ok(entry)
    }

    /// Remove the most recent set of an exercise
    ///
    /// # Errors
    ///
    /// See [`SessionState::undo_last_set`]
    pub async fn undo_last_set(
        &mut self,
        exercise_index: usize,
    ) -> Result<Option<SetEntry>, SessionError> {
        let removed = self.state.undo_last_set(exercise_index)?;
        if removed.is_some() {
            debug!(user.id = %self.user_id, exercise_index, "Undid set");
            self.persist().await;
        }
        Ok(removed)
    }

    /// Move to the next exercise
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub async fn next_exercise(&mut self) -> Result<usize, SessionError> {
        let index = self.state.next_exercise()?;
        self.persist().await;
        Ok(index)
    }

    /// Move to the previous exercise
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub async fn previous_exercise(&mut self) -> Result<usize, SessionError> {
        let index = self.state.previous_exercise()?;
        self.persist().await;
        Ok(index)
    }

    /// Replace the workout notes
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub async fn update_notes(&mut self, notes: impl Into<String> + Send) -> Result<(), SessionError> {
        self.state.update_notes(notes)?;
        self.persist().await;
        Ok(())
    }

    /// Submit the workout and return to idle
    ///
    /// On failure the workout stays in progress with its cache entry intact, and
    /// retrying resubmits the same log id.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NoActiveSession`] when idle
    /// - [`SessionError::PersistenceFailure`] if the log store rejects the workout
    pub async fn finish(&mut self) -> Result<WorkoutLog, SessionError> {
        let log = self.state.build_workout_log(self.clock.now())?;

        if let Err(source) = self.logs.submit(&log).await {
            AppLogger::log_persistence_failure(&self.user_id, &log.id, &source);
            return Err(SessionError::PersistenceFailure { source });
        }

        self.log_event("finish");
        self.state.clear();
        if let Err(e) = self.cache.clear(&self.user_id).await {
            AppLogger::log_cache_failure(&self.user_id, "clear", &e);
        }
        Ok(log)
    }

    /// Discard the workout without saving it
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoActiveSession`] when idle
    pub async fn cancel(&mut self) -> Result<(), SessionError> {
        if !self.state.is_active() {
            return Err(SessionError::NoActiveSession);
        }
        self.log_event("cancel");
        self.state.clear();
        if let Err(e) = self.cache.clear(&self.user_id).await {
            AppLogger::log_cache_failure(&self.user_id, "clear", &e);
        }
        Ok(())
    }

    async fn persist(&self) {
        let Some(snapshot) = self.state.snapshot() else {
            return;
        };
        if let Err(e) = self.cache.save(&self.user_id, snapshot).await {
            AppLogger::log_cache_failure(&self.user_id, "save", &e);
        }
    }

    fn log_event(&self, event: &str) {
        let (exercises, volume) = self.state.snapshot().map_or((0, 0.0), |s| {
            (s.exercises.len(), metrics::total_volume(&s.exercises))
        });
        AppLogger::log_session_event(&self.user_id, event, exercises, volume);
    }

    /// Owning user
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether a workout is in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// In-progress state, if any
    #[must_use]
    pub const fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.state.snapshot()
    }

    /// Seconds since the workout started, 0 when idle
    #[must_use]
    pub fn workout_duration(&self) -> u64 {
        metrics::workout_duration(&self.state, self.clock.now())
    }

    /// Weight x reps across every logged set, 0 when idle
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.state
            .snapshot()
            .map_or(0.0, |s| metrics::total_volume(&s.exercises))
    }

    /// Exercise under the cursor
    #[must_use]
    pub fn current_exercise(&self) -> Option<&SessionExercise> {
        self.state.snapshot().and_then(metrics::current_exercise)
    }

    /// Cursor position, 0 when idle
    #[must_use]
    pub fn current_exercise_index(&self) -> usize {
        self.state
            .snapshot()
            .map_or(0, |s| s.current_exercise_index)
    }

    /// Point-in-time overview, `None` when idle
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        metrics::summarize(&self.state, self.clock.now())
    }
}
