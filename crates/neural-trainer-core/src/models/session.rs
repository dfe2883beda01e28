// ABOUTME: Serializable state of an in-progress workout session
// ABOUTME: SessionSnapshot, SessionExercise, and SetEntry used by the session cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{ExerciseRef, RoutineRef};
use crate::constants::session::SNAPSHOT_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed set inside an active session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    /// Unique within the session
    pub id: String,
    /// Non-negative load
    pub weight: f64,
    /// Positive repetition count
    pub reps: u32,
    /// 1-based insertion position within its exercise
    pub order: u32,
    /// When the set was logged
    pub completed_at: DateTime<Utc>,
}

impl SetEntry {
    /// Training volume of this set (weight x reps)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// An exercise slot within the active session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    /// Exercise captured at add time
    pub exercise: ExerciseRef,
    /// Informational target, never enforced
    pub planned_sets: u32,
    /// Informational target, never enforced
    pub planned_reps: u32,
    /// Append/undo only
    pub completed_sets: Vec<SetEntry>,
    /// Stable position among session exercises
    pub order: u32,
}

/// Complete in-progress session state, as written to the session cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,
    /// Client-generated workout log id submitted on finish
    pub log_id: String,
    /// Owning user
    pub user_id: String,
    /// Routine the session was started from
    pub routine: Option<RoutineRef>,
    /// Exercise slots in navigation order
    pub exercises: Vec<SessionExercise>,
    /// Cursor into `exercises`
    pub current_exercise_index: usize,
    /// Session start, immutable
    pub started_at: DateTime<Utc>,
    /// Free-text notes
    pub notes: String,
}

impl SessionSnapshot {
    /// Create an empty snapshot for a session starting at `started_at`
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        log_id: impl Into<String>,
        routine: Option<RoutineRef>,
        exercises: Vec<SessionExercise>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            log_id: log_id.into(),
            user_id: user_id.into(),
            routine,
            exercises,
            current_exercise_index: 0,
            started_at,
            notes: String::new(),
        }
    }

    /// Whether this snapshot was written by a compatible build
    #[must_use]
    pub const fn is_current_version(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }
}
