// ABOUTME: Integration tests for the file-backed session cache
// ABOUTME: Covers snapshot files on disk, missing files, and corrupt snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{t0, RecordingLogStore, USER};
use neural_trainer::{
    cache::{factory::Cache, FileSessionCache, SessionCache, SessionCacheBackend, SessionCacheConfig},
    errors::StoreError,
    models::SessionSnapshot,
    session::{ActiveWorkoutSession, RestoreOutcome},
};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_snapshot_round_trips_through_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let cache = FileSessionCache::new(dir.path().join("sessions"));
    let snapshot = SessionSnapshot::new(USER, "log-1", None, Vec::new(), t0());

    assert!(cache.load(USER).await?.is_none());
    cache.save(USER, &snapshot).await?;
    assert!(cache.path_for(USER).exists());
    assert_eq!(cache.load(USER).await?, Some(snapshot));

    cache.clear(USER).await?;
    assert!(!cache.path_for(USER).exists());
    cache.clear(USER).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_ids_are_sanitized_into_file_names() {
    let cache = FileSessionCache::new("/tmp/sessions");
    let path = cache.path_for("../evil/user");
    assert_eq!(path.parent().unwrap(), cache.directory());
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "neural-trainer-active-workout-_2E_2E_2Fevil_2Fuser.json"
    );
}

#[tokio::test]
async fn test_similar_user_ids_keep_separate_slots() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let cache = Arc::new(FileSessionCache::new(dir.path()));
    assert_ne!(cache.path_for("a.b"), cache.path_for("a_b"));

    let mut dotted = ActiveWorkoutSession::new(
        "a.b",
        cache.clone(),
        Arc::new(RecordingLogStore::default()),
    );
    dotted.start_empty().await?;
    let saved = cache.load("a.b").await?;
    assert!(saved.is_some());

    let mut underscored = ActiveWorkoutSession::new(
        "a_b",
        cache.clone(),
        Arc::new(RecordingLogStore::default()),
    );
    assert_eq!(underscored.init().await, RestoreOutcome::Empty);
    underscored.start_empty().await?;

    assert_eq!(cache.load("a.b").await?, saved);
    assert_eq!(cache.load("a_b").await?.unwrap().user_id, "a_b");

    let mut resumed = ActiveWorkoutSession::new(
        "a.b",
        cache.clone(),
        Arc::new(RecordingLogStore::default()),
    );
    assert_eq!(resumed.init().await, RestoreOutcome::Restored);
    assert_eq!(resumed.snapshot(), saved.as_ref());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_is_discarded_on_restore() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let cache = Arc::new(FileSessionCache::new(dir.path()));
    tokio::fs::write(cache.path_for(USER), b"{\"version\": ").await?;

    assert!(matches!(
        cache.load(USER).await,
        Err(StoreError::Serialization { .. })
    ));

    let mut session = ActiveWorkoutSession::new(
        USER,
        cache.clone(),
        Arc::new(RecordingLogStore::default()),
    );
    assert!(matches!(
        session.init().await,
        RestoreOutcome::Discarded { .. }
    ));
    assert!(!cache.path_for(USER).exists());
    Ok(())
}

#[tokio::test]
async fn test_factory_selects_backend() -> Result<()> {
    let dir = TempDir::new()?;
    let file = Cache::new(&SessionCacheConfig {
        backend: SessionCacheBackend::File,
        directory: dir.path().to_path_buf(),
        max_users: 10,
    });
    assert_eq!(file.backend(), SessionCacheBackend::File);

    let snapshot = SessionSnapshot::new(USER, "log-1", None, Vec::new(), t0());
    file.save(USER, &snapshot).await?;
    assert_eq!(file.load(USER).await?, Some(snapshot));

    let memory = Cache::new(&SessionCacheConfig {
        backend: SessionCacheBackend::Memory,
        ..SessionCacheConfig::default()
    });
    assert_eq!(memory.backend(), SessionCacheBackend::Memory);
    assert!(memory.load(USER).await?.is_none());
    Ok(())
}
