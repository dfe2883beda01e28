// ABOUTME: Error types for the active workout session state machine
// ABOUTME: Each variant leaves the session in a well-defined, continuable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Session Error Types
//!
//! - `SessionError` - failures of session transitions
//! - Conversion to `AppError` for reporting at the binary boundary
//!
//! A failed transition never mutates the session. The only error raised after an
//! external call is [`SessionError::PersistenceFailure`], and it leaves the session
//! in progress so `finish()` can be retried.

use super::{AppError, ErrorCode, StoreError};
use thiserror::Error;

/// Errors returned by active workout session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// A routine references an exercise the catalog cannot resolve
    #[error("Exercise not found: {exercise_id}")]
    ExerciseNotFound {
        /// Identifier that failed to resolve
        exercise_id: String,
    },

    /// A routine id could not be found in the routine store
    #[error("Routine not found: {routine_id}")]
    RoutineNotFound {
        /// Requested routine identifier
        routine_id: String,
    },

    /// `log_set` was called with a negative weight or non-positive reps
    #[error("Invalid set: {reason}")]
    InvalidSet {
        /// Which field was rejected
        reason: String,
    },

    /// `add_exercise` was called with a zero planned sets/reps target
    #[error("Invalid plan: {reason}")]
    InvalidPlan {
        /// Which field was rejected
        reason: String,
    },

    /// An exercise index outside the session's exercise list
    #[error("Exercise index {index} out of range (session has {len} exercises)")]
    ExerciseIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of exercises in the session
        len: usize,
    },

    /// Operation requires an in-progress session
    #[error("No workout session is in progress")]
    NoActiveSession,

    /// A session is already in progress for this user
    #[error("A workout session is already in progress")]
    SessionAlreadyActive,

    /// A `finish()` call for this session has not resolved yet
    #[error("Finishing the workout is already in progress")]
    FinishInProgress,

    /// The routine store could not be queried
    #[error("Failed to load routine: {source}")]
    RoutineLookupFailed {
        /// Underlying store failure
        #[source]
        source: StoreError,
    },

    /// The workout log store rejected the finished workout
    #[error("Failed to save workout: {source}")]
    PersistenceFailure {
        /// Underlying store failure
        #[source]
        source: StoreError,
    },
}

impl SessionError {
    /// Create an "invalid set" error
    #[must_use]
    pub fn invalid_set(reason: impl Into<String>) -> Self {
        Self::InvalidSet {
            reason: reason.into(),
        }
    }

    /// Create an "invalid plan" error
    #[must_use]
    pub fn invalid_plan(reason: impl Into<String>) -> Self {
        Self::InvalidPlan {
            reason: reason.into(),
        }
    }

    /// Whether the caller can retry the same call unchanged
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::PersistenceFailure { .. }
                | Self::RoutineLookupFailed { .. }
                | Self::FinishInProgress
        )
    }

    const fn code(&self) -> ErrorCode {
        match self {
            Self::ExerciseNotFound { .. } | Self::RoutineNotFound { .. } => {
                ErrorCode::ResourceNotFound
            }
            Self::InvalidSet { .. } | Self::InvalidPlan { .. } => ErrorCode::InvalidInput,
            Self::ExerciseIndexOutOfRange { .. } => ErrorCode::ValueOutOfRange,
            Self::NoActiveSession => ErrorCode::SessionNotActive,
            Self::SessionAlreadyActive => ErrorCode::SessionAlreadyActive,
            Self::FinishInProgress => ErrorCode::ResourceLocked,
            Self::PersistenceFailure { .. } | Self::RoutineLookupFailed { .. } => {
                ErrorCode::ExternalServiceError
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        let code = error.code();
        let resource_id = match &error {
            SessionError::ExerciseNotFound { exercise_id } => Some(exercise_id.clone()),
            SessionError::RoutineNotFound { routine_id } => Some(routine_id.clone()),
            _ => None,
        };
        let mut app_error = Self::new(code, error.to_string());
        app_error.resource_id = resource_id;
        app_error.with_source(error)
    }
}
