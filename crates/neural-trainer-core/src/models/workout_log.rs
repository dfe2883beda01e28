// ABOUTME: Persisted record of a finished workout session
// ABOUTME: WorkoutLog and SetLog definitions matching the workout log store shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed set, tagged with the exercise it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLog {
    /// Set identifier (unique within the workout)
    pub id: String,
    /// Exercise the set was performed on
    pub exercise_id: String,
    /// Load in the user's unit
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// 1-based position within its exercise
    pub order: u32,
    /// When the set was logged
    pub completed_at: DateTime<Utc>,
}

impl SetLog {
    /// Training volume of this set (weight x reps)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// A finished workout as stored by the workout log store
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use neural_trainer_core::models::WorkoutLog;
///
/// let now = Utc::now();
/// let log = WorkoutLog {
///     id: "7f1c".into(),
///     user_id: "athlete-1".into(),
///     routine_id: None,
///     routine_name: None,
///     sets: vec![],
///     duration: 1800,
///     started_at: now,
///     completed_at: now,
///     notes: String::new(),
/// };
/// assert_eq!(log.total_volume(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Client-generated identifier, doubles as the idempotency key
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Routine the workout was started from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<String>,
    /// Routine name at session start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine_name: Option<String>,
    /// All sets, concatenated in exercise order
    pub sets: Vec<SetLog>,
    /// Elapsed seconds between start and finish
    pub duration: u64,
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session finish
    pub completed_at: DateTime<Utc>,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl WorkoutLog {
    /// Total training volume across all sets
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.sets.iter().map(SetLog::volume).sum()
    }
}
