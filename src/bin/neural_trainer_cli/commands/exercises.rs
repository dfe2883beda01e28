// ABOUTME: Exercise library commands for neural-trainer
// ABOUTME: List built-in and custom exercises, add and remove custom ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::helpers::{display, CliContext};
use neural_trainer::errors::AppResult;
use neural_trainer::models::{Equipment, Exercise, MuscleGroup};

pub async fn list(
    ctx: &CliContext,
    muscle: Option<MuscleGroup>,
    search: Option<&str>,
) -> AppResult<()> {
    let library = ctx.library().await?;
    let mut exercises: Vec<&Exercise> = match search {
        Some(query) => library.search(query),
        None => library.all().iter().collect(),
    };
    if let Some(muscle) = muscle {
        exercises.retain(|exercise| exercise.muscle_group == muscle);
    }

    if exercises.is_empty() {
        println!("No exercises match.");
        return Ok(());
    }
    println!("{:<26} {:<24} {:<10} EQUIPMENT", "ID", "NAME", "MUSCLE");
    for exercise in exercises {
        display::display_exercise(exercise);
    }
    Ok(())
}

pub async fn add(
    ctx: &CliContext,
    name: &str,
    muscle: MuscleGroup,
    equipment: Equipment,
) -> AppResult<()> {
    let exercise = ctx
        .database
        .exercises()
        .add_custom_exercise(&ctx.user_id, name, muscle, equipment)
        .await?;
    println!("Created custom exercise '{}' ({})", exercise.name, exercise.id);
    Ok(())
}

pub async fn remove(ctx: &CliContext, exercise_id: &str) -> AppResult<()> {
    ctx.database
        .exercises()
        .delete_custom_exercise(&ctx.user_id, exercise_id)
        .await?;
    println!("Removed custom exercise {exercise_id}");
    Ok(())
}
