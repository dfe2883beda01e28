// ABOUTME: Integration tests for workout log storage in SQLite
// ABOUTME: Covers idempotent submit, ordering, date ranges, and deletion
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
    errors::StoreError,
    models::{SetLog, WorkoutLog},
    stores::WorkoutLogStore,
};

fn workout(id: &str, hours_after_t0: i64, routine_id: Option<&str>) -> WorkoutLog {
    let completed_at = t0() + Duration::hours(hours_after_t0);
    WorkoutLog {
        id: id.to_owned(),
        user_id: USER.to_owned(),
        routine_id: routine_id.map(str::to_owned),
        routine_name: routine_id.map(|_| "Push Day".to_owned()),
        sets: vec![
            SetLog {
                id: format!("{id}-1"),
                exercise_id: "bench-press".to_owned(),
                weight: 135.0,
                reps: 10,
                order: 1,
                completed_at,
            },
            SetLog {
                id: format!("{id}-2"),
                exercise_id: "bench-press".to_owned(),
                weight: 140.0,
                reps: 8,
                order: 2,
                completed_at,
            },
        ],
        duration: 1800,
        started_at: completed_at - Duration::seconds(1800),
        completed_at,
        notes: "solid".to_owned(),
    }
}

#[tokio::test]
async fn test_submit_and_fetch() -> Result<()> {
    let db = create_test_database().await?;
    let log = workout("log-1", 0, Some("routine-1"));
    db.workout_logs().submit(&log).await?;

    let fetched = db.workout_logs().get_workout_log(USER, "log-1").await?;
    assert_eq!(fetched, Some(log));
    assert!(db
        .workout_logs()
        .get_workout_log("someone-else", "log-1")
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn test_resubmitting_same_id_stores_one_log() -> Result<()> {
    let db = create_test_database().await?;
    let log = workout("log-1", 0, None);

    WorkoutLogStore::submit(&db, &log).await?;
    let mut retried = log.clone();
    retried.notes = "second attempt".to_owned();
    WorkoutLogStore::submit(&db, &retried).await?;

    let logs = db.workout_logs().list_workout_logs(USER).await?;
    assert_eq!(logs, vec![log]);
    Ok(())
}

#[tokio::test]
async fn test_list_orders_and_filters() -> Result<()> {
    let db = create_test_database().await?;
    let logs = db.workout_logs();
    logs.submit(&workout("early", 0, Some("routine-1"))).await?;
    logs.submit(&workout("late", 48, Some("routine-1"))).await?;
    logs.submit(&workout("middle", 24, None)).await?;

    let ids: Vec<String> = logs
        .list_workout_logs(USER)
        .await?
        .into_iter()
        .map(|log| log.id)
        .collect();
    assert_eq!(ids, ["late", "middle", "early"]);

    let by_routine = logs.list_by_routine(USER, "routine-1").await?;
    assert_eq!(by_routine.len(), 2);

    let in_range = logs
        .list_in_range(USER, t0() + Duration::hours(24), t0() + Duration::hours(48))
        .await?;
    let ids: Vec<&str> = in_range.iter().map(|log| log.id.as_str()).collect();
    assert_eq!(ids, ["late", "middle"]);
    Ok(())
}

#[tokio::test]
async fn test_delete_workout_log() -> Result<()> {
    let db = create_test_database().await?;
    let logs = db.workout_logs();
    logs.submit(&workout("log-1", 0, None)).await?;

    logs.delete_workout_log(USER, "log-1").await?;
    assert!(logs.list_workout_logs(USER).await?.is_empty());
    assert!(matches!(
        logs.delete_workout_log(USER, "log-1").await,
        Err(StoreError::NotFound { .. })
    ));
    Ok(())
}
