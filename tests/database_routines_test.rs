// ABOUTME: Integration tests for routine storage in SQLite
// ABOUTME: Covers CRUD, per-user isolation, validation, and starting a session from a routine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{create_test_database, USER};
use neural_trainer::{
    cache::InMemorySessionCache,
    catalog::ExerciseLibrary,
    errors::{SessionError, StoreError},
    models::{NewRoutine, RoutineExercise},
    session::ActiveWorkoutSession,
};
use std::sync::Arc;

fn slot(exercise_id: &str, sets: u32, reps: u32) -> RoutineExercise {
    RoutineExercise {
        exercise_id: exercise_id.to_owned(),
        planned_sets: sets,
        planned_reps: reps,
        order: 0,
    }
}

fn push_day() -> NewRoutine {
    NewRoutine {
        name: "  Push Day ".to_owned(),
        exercises: vec![
            slot("bench-press", 4, 8),
            slot("overhead-press", 3, 10),
            slot("tricep-dips", 3, 12),
        ],
    }
}

#[tokio::test]
async fn test_create_and_get_routine() -> Result<()> {
    let db = create_test_database().await?;
    let routines = db.routines();

    let created = routines.create_routine(USER, push_day()).await?;
    assert_eq!(created.name, "Push Day");
    let orders: Vec<u32> = created.exercises.iter().map(|e| e.order).collect();
    assert_eq!(orders, [0, 1, 2]);

    let fetched = routines.get_routine(USER, &created.id).await?.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.exercises, created.exercises);
    assert_eq!(
        fetched.created_at.timestamp_micros(),
        created.created_at.timestamp_micros()
    );
    assert!(routines.get_routine("someone-else", &created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_update_delete() -> Result<()> {
    let db = create_test_database().await?;
    let routines = db.routines();

    let first = routines.create_routine(USER, push_day()).await?;
    let second = routines
        .create_routine(
            USER,
            NewRoutine {
                name: "Leg Day".to_owned(),
                exercises: vec![slot("squats", 5, 5)],
            },
        )
        .await?;
    assert_eq!(routines.list_routines(USER).await?.len(), 2);

    let updated = routines
        .update_routine(
            USER,
            &first.id,
            NewRoutine {
                name: "Push Day v2".to_owned(),
                exercises: vec![slot("push-ups", 3, 20)],
            },
        )
        .await?;
    assert_eq!(updated.name, "Push Day v2");
    assert_eq!(updated.exercises.len(), 1);
    assert_eq!(
        updated.created_at.timestamp_micros(),
        first.created_at.timestamp_micros()
    );

    let listed = routines.list_routines(USER).await?;
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);

    routines.delete_routine(USER, &second.id).await?;
    assert!(matches!(
        routines.delete_routine(USER, &second.id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        routines.update_routine(USER, &second.id, push_day()).await,
        Err(StoreError::NotFound { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_invalid_routine_is_rejected() -> Result<()> {
    let db = create_test_database().await?;
    let result = db
        .routines()
        .create_routine(
            USER,
            NewRoutine {
                name: "Twice".to_owned(),
                exercises: vec![slot("squats", 3, 5), slot("squats", 3, 5)],
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::Validation { .. })));
    assert!(db.routines().list_routines(USER).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_start_session_from_stored_routine() -> Result<()> {
    let db = Arc::new(create_test_database().await?);
    let routine = db.routines().create_routine(USER, push_day()).await?;
    let library = ExerciseLibrary::with_defaults();

    let mut session = ActiveWorkoutSession::new(
        USER,
        Arc::new(InMemorySessionCache::default()),
        db.clone(),
    );
    session
        .start_from_store(&routine.id, db.as_ref(), &library)
        .await?;

    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.routine.as_ref().unwrap().name, "Push Day");
    let names: Vec<&str> = snapshot
        .exercises
        .iter()
        .map(|e| e.exercise.name.as_str())
        .collect();
    assert_eq!(names, ["Bench Press", "Overhead Press", "Tricep Dips"]);
    assert_eq!(snapshot.exercises[0].planned_sets, 4);

    session.log_set(0, 135.0, 8).await?;
    let log = session.finish().await?;
    assert_eq!(log.routine_id.as_deref(), Some(routine.id.as_str()));

    db.routines().delete_routine(USER, &routine.id).await?;
    let kept = db.workout_logs().list_by_routine(USER, &routine.id).await?;
    assert_eq!(kept.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_start_from_unknown_routine() -> Result<()> {
    let db = Arc::new(create_test_database().await?);
    let library = ExerciseLibrary::with_defaults();
    let mut session = ActiveWorkoutSession::new(
        USER,
        Arc::new(InMemorySessionCache::default()),
        db.clone(),
    );

    let result = session
        .start_from_store("missing", db.as_ref(), &library)
        .await;
    assert!(matches!(result, Err(SessionError::RoutineNotFound { .. })));
    assert!(!session.is_active());
    Ok(())
}
