// ABOUTME: Routine template commands for neural-trainer
// ABOUTME: List, show, create, and delete workout routines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::helpers::{display, CliContext, RoutineSlot};
use neural_trainer::errors::{AppError, AppResult};
use neural_trainer::models::NewRoutine;

pub async fn list(ctx: &CliContext) -> AppResult<()> {
    let routines = ctx.database.routines().list_routines(&ctx.user_id).await?;
    if routines.is_empty() {
        println!("No routines yet. Create one with `routines create`.");
        return Ok(());
    }
    let library = ctx.library().await?;
    for routine in &routines {
        display::display_routine(routine, &library);
    }
    Ok(())
}

pub async fn show(ctx: &CliContext, routine_id: &str) -> AppResult<()> {
    let routine = ctx
        .database
        .routines()
        .get_routine(&ctx.user_id, routine_id)
        .await?
        .ok_or_else(|| AppError::not_found("routine").with_resource_id(routine_id))?;
    let library = ctx.library().await?;
    display::display_routine(&routine, &library);
    Ok(())
}

pub async fn create(ctx: &CliContext, name: String, slots: Vec<RoutineSlot>) -> AppResult<()> {
    let library = ctx.library().await?;
    if let Some(unknown) = slots.iter().find(|slot| library.get(&slot.exercise_id).is_none()) {
        return Err(AppError::invalid_input(format!(
            "Unknown exercise '{}'",
            unknown.exercise_id
        )));
    }

    let exercises = (0_u32..)
        .zip(slots)
        .map(|(order, slot)| slot.into_routine_exercise(order))
        .collect();
    let routine = ctx
        .database
        .routines()
        .create_routine(&ctx.user_id, NewRoutine { name, exercises })
        .await?;
    println!("Created routine '{}' ({})", routine.name, routine.id);
    Ok(())
}

pub async fn delete(ctx: &CliContext, routine_id: &str) -> AppResult<()> {
    ctx.database
        .routines()
        .delete_routine(&ctx.user_id, routine_id)
        .await?;
    println!("Deleted routine {routine_id}");
    Ok(())
}
