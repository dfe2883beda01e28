// ABOUTME: Integration tests for resuming an active workout from the session cache
// ABOUTME: Covers restore by a fresh instance, discard rules, and init-once semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_test_session, t0, RecordingLogStore, USER};
use neural_trainer::{
    cache::{InMemorySessionCache, SessionCache},
    catalog::{ExerciseCatalog, ExerciseLibrary},
    models::SessionSnapshot,
    session::{ActiveWorkoutSession, RestoreOutcome},
};
use std::sync::Arc;

fn fresh_session(cache: &Arc<InMemorySessionCache>) -> ActiveWorkoutSession {
    ActiveWorkoutSession::new(
        USER,
        cache.clone(),
        Arc::new(RecordingLogStore::default()),
    )
}

#[tokio::test]
async fn test_fresh_instance_resumes_saved_workout() -> Result<()> {
    let mut t = create_test_session(RecordingLogStore::default());
    let library = ExerciseLibrary::with_defaults();
    t.session.start_empty().await?;
    t.session
        .add_exercise(library.resolve("pull-ups").unwrap(), 3, 8)
        .await?;
    t.session
        .add_exercise(library.resolve("bent-over-row").unwrap(), 3, 10)
        .await?;
    t.session.log_set(0, 0.0, 8).await?;
    t.session.next_exercise().await?;
    t.session.update_notes("felt strong").await?;

    let mut resumed = fresh_session(&t.cache);
    assert_eq!(resumed.init().await, RestoreOutcome::Restored);
    assert_eq!(resumed.snapshot(), t.session.snapshot());
    assert_eq!(resumed.current_exercise_index(), 1);
    assert_eq!(resumed.snapshot().unwrap().notes, "felt strong");
    Ok(())
}

#[tokio::test]
async fn test_init_with_empty_cache() {
    let cache = Arc::new(InMemorySessionCache::default());
    let mut session = fresh_session(&cache);
    assert_eq!(session.init().await, RestoreOutcome::Empty);
    assert!(!session.is_active());
}

#[tokio::test]
async fn test_corrupt_snapshot_is_discarded() -> Result<()> {
    common::init_test_logging();
    let cache = Arc::new(InMemorySessionCache::default());
    cache.insert_raw(USER, b"{not json".to_vec()).await;

    let mut session = fresh_session(&cache);
    assert!(matches!(
        session.init().await,
        RestoreOutcome::Discarded { .. }
    ));
    assert!(!session.is_active());
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_incompatible_version_is_discarded() -> Result<()> {
    let cache = Arc::new(InMemorySessionCache::default());
    let mut snapshot = SessionSnapshot::new(USER, "log-1", None, Vec::new(), t0());
    snapshot.version += 1;
    cache.save(USER, &snapshot).await?;

    let mut session = fresh_session(&cache);
    assert!(matches!(
        session.init().await,
        RestoreOutcome::Discarded { .. }
    ));
    assert!(cache.load(USER).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_snapshot_of_another_user_is_ignored() -> Result<()> {
    let cache = Arc::new(InMemorySessionCache::default());
    let snapshot = SessionSnapshot::new("someone-else", "log-1", None, Vec::new(), t0());
    cache.save(USER, &snapshot).await?;

    let mut session = fresh_session(&cache);
    assert_eq!(session.init().await, RestoreOutcome::Empty);
    assert!(!session.is_active());
    assert_eq!(cache.load(USER).await?, Some(snapshot));
    Ok(())
}

#[tokio::test]
async fn test_restored_cursor_is_clamped() -> Result<()> {
    let cache = Arc::new(InMemorySessionCache::default());
    let mut snapshot = SessionSnapshot::new(USER, "log-1", None, Vec::new(), t0());
    snapshot.current_exercise_index = 7;
    cache.save(USER, &snapshot).await?;

    let mut session = fresh_session(&cache);
    assert_eq!(session.init().await, RestoreOutcome::Restored);
    assert_eq!(session.current_exercise_index(), 0);
    Ok(())
}

#[tokio::test]
async fn test_init_runs_once_until_teardown() -> Result<()> {
    let mut t = create_test_session(RecordingLogStore::default());
    t.session.start_empty().await?;

    let mut other = fresh_session(&t.cache);
    assert_eq!(other.init().await, RestoreOutcome::Restored);
    assert_eq!(other.init().await, RestoreOutcome::Skipped);

    other.teardown();
    assert!(!other.is_active());
    assert_eq!(other.init().await, RestoreOutcome::Restored);
    Ok(())
}

#[tokio::test]
async fn test_init_after_start_does_not_overwrite() -> Result<()> {
    let mut t = create_test_session(RecordingLogStore::default());
    t.session.start_empty().await?;
    let log_id = t.session.snapshot().unwrap().log_id.clone();

    assert_eq!(t.session.init().await, RestoreOutcome::Skipped);
    assert_eq!(t.session.snapshot().unwrap().log_id, log_id);
    Ok(())
}
