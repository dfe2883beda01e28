// ABOUTME: Active workout session: state machine, derived metrics, and session owners
// ABOUTME: Tracks one in-progress workout and reconciles it with the cache and log store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Active Workout Session
//!
//! - [`SessionState`] is the pure `Idle`/`InProgress` machine.
//! - [`ActiveWorkoutSession`] owns a state plus its collaborators: it saves a
//!   snapshot to the [`crate::cache::SessionCache`] after every change and submits a
//!   [`crate::models::WorkoutLog`] on finish.
//! - [`SharedWorkoutSession`] lets several tasks drive one session.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use neural_trainer::cache::InMemorySessionCache;
//! use neural_trainer::catalog::ExerciseLibrary;
//! use neural_trainer::database::Database;
//! use neural_trainer::session::ActiveWorkoutSession;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let database = Arc::new(Database::new("sqlite::memory:").await?);
//! let mut session =
//!     ActiveWorkoutSession::new("athlete-1", Arc::new(InMemorySessionCache::default()), database);
//! session.init().await;
//!
//! let library = ExerciseLibrary::with_defaults();
//! session.start_empty().await?;
//! session.add_exercise_by_id("bench-press", &library, 3, 10).await?;
//! session.log_set(0, 135.0, 10).await?;
//! let log = session.finish().await?;
//! assert_eq!(log.sets.len(), 1);
//! # Ok(())
//! # }
//! ```

/// Active session owner
pub mod manager;
/// Derived metrics
pub mod metrics;
/// Shared handle with finish guard
pub mod shared;
/// Pure state machine
pub mod state;

pub use manager::{ActiveWorkoutSession, RestoreOutcome};
pub use metrics::SessionSummary;
pub use shared::SharedWorkoutSession;
pub use state::SessionState;
