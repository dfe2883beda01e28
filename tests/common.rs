// ABOUTME: Shared test utilities for neural-trainer integration tests
// ABOUTME: Logging setup, in-memory collaborators, and fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use neural_trainer::{
    cache::InMemorySessionCache,
    clock::ManualClock,
    database::Database,
    errors::StoreError,
    models::WorkoutLog,
    session::ActiveWorkoutSession,
    stores::WorkoutLogStore,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, Once,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const USER: &str = "athlete-1";

/// Fixed session start used across tests
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// Fresh in-memory database with migrations applied
pub async fn create_test_database() -> anyhow::Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// Log store that keeps submissions in memory and can be told to fail
#[derive(Default)]
pub struct RecordingLogStore {
    pub logs: Mutex<Vec<WorkoutLog>>,
    pub failures_remaining: AtomicUsize,
    pub attempts: AtomicUsize,
}

impl RecordingLogStore {
    pub fn failing(times: usize) -> Self {
        Self {
            failures_remaining: AtomicUsize::new(times),
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Vec<WorkoutLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkoutLogStore for RecordingLogStore {
    async fn submit(&self, log: &WorkoutLog) -> Result<(), StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(StoreError::Unavailable {
                context: "network offline".to_owned(),
            });
        }
        let mut logs = self.logs.lock().unwrap();
        if !logs.iter().any(|stored| stored.id == log.id) {
            logs.push(log.clone());
        }
        Ok(())
    }
}

/// Session wired to in-memory collaborators and a manual clock
pub struct TestSession {
    pub session: ActiveWorkoutSession,
    pub cache: Arc<InMemorySessionCache>,
    pub logs: Arc<RecordingLogStore>,
    pub clock: Arc<ManualClock>,
}

pub fn create_test_session(logs: RecordingLogStore) -> TestSession {
    init_test_logging();
    let cache = Arc::new(InMemorySessionCache::default());
    let logs = Arc::new(logs);
    let clock = Arc::new(ManualClock::new(t0()));
    let session = ActiveWorkoutSession::new(USER, cache.clone(), logs.clone())
        .with_clock(clock.clone());
    TestSession {
        session,
        cache,
        logs,
        clock,
    }
}
