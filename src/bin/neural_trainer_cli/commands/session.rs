// ABOUTME: Active workout commands for neural-trainer
// ABOUTME: Start, log sets, navigate, and finish the workout in progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::helpers::{display, exercise_index, CliContext};
use neural_trainer::errors::AppResult;
use neural_trainer::session::ActiveWorkoutSession;

fn print_status(session: &ActiveWorkoutSession) {
    match session.snapshot() {
        Some(snapshot) => display::display_session(snapshot, session.workout_duration()),
        None => println!("No workout in progress. Start one with `session start`."),
    }
}

pub async fn start(ctx: &CliContext, routine_id: Option<&str>) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    match routine_id {
        Some(routine_id) => {
            let library = ctx.library().await?;
            session
                .start_from_store(routine_id, ctx.database.as_ref(), &library)
                .await?;
        }
        None => session.start_empty().await?,
    }
    println!("Workout started.");
    print_status(&session);
    Ok(())
}

pub async fn add(ctx: &CliContext, exercise_id: &str, sets: u32, reps: u32) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    let library = ctx.library().await?;
    let index = session
        .add_exercise_by_id(exercise_id, &library, sets, reps)
        .await?;
    println!("Added exercise #{}.", index + 1);
    Ok(())
}

pub async fn log(ctx: &CliContext, exercise: Option<usize>, weight: f64, reps: u32) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    let index = exercise_index(exercise, session.current_exercise_index())?;
    let entry = session.log_set(index, weight, reps).await?;
    println!(
        "Logged set {} of exercise #{}: {} x {}",
        entry.order,
        index + 1,
        entry.weight,
        entry.reps
    );
    Ok(())
}

pub async fn undo(ctx: &CliContext, exercise: Option<usize>) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    let index = exercise_index(exercise, session.current_exercise_index())?;
    match session.undo_last_set(index).await? {
        Some(entry) => println!("Removed set {}: {} x {}", entry.order, entry.weight, entry.reps),
        None => println!("Exercise #{} has no sets to undo.", index + 1),
    }
    Ok(())
}

pub async fn next(ctx: &CliContext) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    session.next_exercise().await?;
    print_status(&session);
    Ok(())
}

pub async fn previous(ctx: &CliContext) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    session.previous_exercise().await?;
    print_status(&session);
    Ok(())
}

pub async fn notes(ctx: &CliContext, text: String) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    session.update_notes(text).await?;
    println!("Notes updated.");
    Ok(())
}

pub async fn status(ctx: &CliContext) -> AppResult<()> {
    let session = ctx.open_session().await;
    print_status(&session);
    Ok(())
}

pub async fn finish(ctx: &CliContext) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    let library = ctx.library().await?;
    let log = session.finish().await?;
    println!("Workout saved.");
    display::display_workout_log(&log, &library);
    Ok(())
}

pub async fn cancel(ctx: &CliContext) -> AppResult<()> {
    let mut session = ctx.open_session().await;
    session.cancel().await?;
    println!("Workout discarded.");
    Ok(())
}
