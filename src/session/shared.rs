// ABOUTME: Shareable handle to an active workout session for callback-style owners
// ABOUTME: An atomic finish guard rejects overlapping finish and cancel calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::manager::ActiveWorkoutSession;
use crate::errors::SessionError;
use crate::models::WorkoutLog;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Cloneable handle to one [`ActiveWorkoutSession`]
///
/// Ordinary operations go through [`Self::lock`] and wait their turn. While a
/// [`Self::finish`] is pending, a second `finish` or a `cancel` fails at once
/// with [`SessionError::FinishInProgress`].
#[derive(Clone)]
pub struct SharedWorkoutSession {
    inner: Arc<Mutex<ActiveWorkoutSession>>,
    finishing: Arc<AtomicBool>,
}

/// Clears the finish flag however the finish future ends, including when dropped
struct FinishGuard<'a>(&'a AtomicBool);

impl Drop for FinishGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SharedWorkoutSession {
    /// Wrap `session`
    #[must_use]
    pub fn new(session: ActiveWorkoutSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
            finishing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Exclusive access to the session
    pub async fn lock(&self) -> MutexGuard<'_, ActiveWorkoutSession> {
        self.inner.lock().await
    }

    /// Whether a finish is pending
    #[must_use]
    pub fn is_finishing(&self) -> bool {
        self.finishing.load(Ordering::Acquire)
    }

    /// Submit the workout
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::FinishInProgress`] if another finish is pending,
    /// otherwise see [`ActiveWorkoutSession::finish`]
    pub async fn finish(&self) -> Result<WorkoutLog, SessionError> {
        self.finishing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::FinishInProgress)?;
        let _guard = FinishGuard(&self.finishing);

        self.inner.lock().await.finish().await
    }

    /// Discard the workout
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::FinishInProgress`] if a finish is pending,
    /// otherwise see [`ActiveWorkoutSession::cancel`]
    pub async fn cancel(&self) -> Result<(), SessionError> {
        if self.is_finishing() {
            return Err(SessionError::FinishInProgress);
        }
        self.inner.lock().await.cancel().await
    }
}
