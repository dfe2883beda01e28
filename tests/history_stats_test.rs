// ABOUTME: Integration tests for training history built from finished workouts
// ABOUTME: Finishes sessions into SQLite and computes statistics over the stored logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use chrono::Duration;
use common::{create_test_database, t0, USER};
use neural_trainer::{
    cache::InMemorySessionCache,
    catalog::ExerciseLibrary,
    clock::ManualClock,
    history::{compute_stats, default_recent_workouts, search_workouts},
    session::ActiveWorkoutSession,
};
use std::sync::Arc;

#[tokio::test]
async fn test_stats_over_finished_workouts() -> Result<()> {
    let db = Arc::new(create_test_database().await?);
    let library = ExerciseLibrary::with_defaults();
    let clock = Arc::new(ManualClock::new(t0()));
    let mut session = ActiveWorkoutSession::new(
        USER,
        Arc::new(InMemorySessionCache::default()),
        db.clone(),
    )
    .with_clock(clock.clone());

    // Day 1: squats and bench
    session.start_empty().await?;
    session.add_exercise_by_id("squats", &library, 3, 5).await?;
    session.add_exercise_by_id("bench-press", &library, 3, 5).await?;
    session.log_set(0, 100.0, 5).await?;
    session.log_set(0, 100.0, 5).await?;
    session.log_set(1, 80.0, 5).await?;
    clock.advance(Duration::minutes(30));
    session.finish().await?;

    // Day 3: squats only
    clock.advance(Duration::days(2));
    session.start_empty().await?;
    session.add_exercise_by_id("squats", &library, 3, 5).await?;
    session.log_set(0, 110.0, 5).await?;
    clock.advance(Duration::minutes(20));
    session.finish().await?;

    let logs = db.workout_logs().list_workout_logs(USER).await?;
    assert_eq!(default_recent_workouts(&logs).len(), 2);

    let stats = compute_stats(&logs, t0() + Duration::days(3));
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_duration, 3000);
    assert_eq!(stats.avg_duration, 1500);
    assert_eq!(stats.total_sets, 4);
    assert!((stats.total_volume - 1950.0).abs() < f64::EPSILON);
    assert_eq!(stats.this_week, 2);
    assert_eq!(stats.this_month, 2);
    assert_eq!(stats.most_frequent_exercises[0].exercise_id, "squats");
    assert_eq!(stats.most_frequent_exercises[0].count, 3);

    let later = compute_stats(&logs, t0() + Duration::days(20));
    assert_eq!(later.this_week, 0);
    assert_eq!(later.this_month, 2);
    Ok(())
}

#[tokio::test]
async fn test_search_finished_workouts_by_notes() -> Result<()> {
    let db = Arc::new(create_test_database().await?);
    let library = ExerciseLibrary::with_defaults();
    let clock = Arc::new(ManualClock::new(t0()));
    let mut session = ActiveWorkoutSession::new(
        USER,
        Arc::new(InMemorySessionCache::default()),
        db.clone(),
    )
    .with_clock(clock.clone());

    session.start_empty().await?;
    session.add_exercise_by_id("deadlift", &library, 1, 3).await?;
    session.log_set(0, 180.0, 3).await?;
    session.update_notes("New deadlift PR").await?;
    clock.advance(Duration::minutes(40));
    let pr = session.finish().await?;

    clock.advance(Duration::days(1));
    session.start_empty().await?;
    session.update_notes("Light recovery walk").await?;
    clock.advance(Duration::minutes(15));
    session.finish().await?;

    let in_first_day = db
        .workout_logs()
        .list_in_range(USER, t0(), t0() + Duration::hours(12))
        .await?;
    assert_eq!(in_first_day.len(), 1);

    let logs = db.workout_logs().list_workout_logs(USER).await?;
    let found = search_workouts(&logs, "deadlift pr");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, pr.id);
    assert_eq!(search_workouts(&logs, "").len(), 2);
    assert!(search_workouts(&logs, "tempo run").is_empty());
    Ok(())
}
