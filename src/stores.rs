// ABOUTME: Persistence seams consumed by the active workout session
// ABOUTME: RoutineStore supplies templates, WorkoutLogStore receives finished workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Store Traits
//!
//! The session never talks to SQLite directly. It is handed trait objects for the
//! two stores it needs, which keeps the state machine testable against in-memory
//! fakes and lets [`crate::database::Database`] provide the production versions.

use crate::errors::StoreError;
use crate::models::{Routine, WorkoutLog};
use async_trait::async_trait;

/// Source of routine templates
#[async_trait]
pub trait RoutineStore: Send + Sync {
    /// Fetch a routine owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn get_routine(
        &self,
        user_id: &str,
        routine_id: &str,
    ) -> Result<Option<Routine>, StoreError>;
}

/// Destination for finished workouts
#[async_trait]
pub trait WorkoutLogStore: Send + Sync {
    /// Persist a finished workout
    ///
    /// Submitting a record whose id is already stored succeeds without writing a
    /// second copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be stored
    async fn submit(&self, log: &WorkoutLog) -> Result<(), StoreError>;
}
