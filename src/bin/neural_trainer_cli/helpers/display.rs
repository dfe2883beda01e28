// ABOUTME: Output formatting helpers for neural-trainer
// ABOUTME: Consistent display of sessions, exercises, routines, and workout history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use neural_trainer::{
    catalog::ExerciseLibrary,
    history::WorkoutStats,
    models::{Exercise, Routine, SessionSnapshot, WorkoutLog},
    session::metrics::{self, format_duration},
};

fn exercise_name<'a>(library: &'a ExerciseLibrary, exercise_id: &'a str) -> &'a str {
    library
        .get(exercise_id)
        .map_or(exercise_id, |exercise| exercise.name.as_str())
}

/// Display the workout in progress
pub fn display_session(snapshot: &SessionSnapshot, elapsed: u64) {
    let title = snapshot
        .routine
        .as_ref()
        .map_or("Workout", |routine| routine.name.as_str());
    println!("\n{title}  [{}]", format_duration(elapsed));
    println!("{}", "=".repeat(60));

    if snapshot.exercises.is_empty() {
        println!("No exercises yet. Add one with `session add <exercise-id>`.");
    }
    for (index, exercise) in snapshot.exercises.iter().enumerate() {
        let marker = if index == snapshot.current_exercise_index {
            ">"
        } else {
            " "
        };
        let done = if metrics::plan_met(exercise) { " done" } else { "" };
        println!(
            "{marker} {}. {} ({}) {}/{} sets x {} reps{done}",
            index + 1,
            exercise.exercise.name,
            exercise.exercise.muscle_group,
            exercise.completed_sets.len(),
            exercise.planned_sets,
            exercise.planned_reps,
        );
        for set in &exercise.completed_sets {
            println!("      set {}: {} x {}", set.order, set.weight, set.reps);
        }
        if let Some(average) = metrics::average_weight(exercise) {
            println!(
                "      volume {:.1}, average weight {average:.1}",
                metrics::exercise_volume(exercise)
            );
        }
    }

    println!("{}", "-".repeat(60));
    println!(
        "Total volume: {:.1}",
        metrics::total_volume(&snapshot.exercises)
    );
    if !snapshot.notes.is_empty() {
        println!("Notes: {}", snapshot.notes);
    }
}

/// Display a saved workout
pub fn display_workout_log(log: &WorkoutLog, library: &ExerciseLibrary) {
    let title = log.routine_name.as_deref().unwrap_or("Workout");
    println!(
        "{}  {title}  {}  {} sets  volume {:.1}  [{}]",
        log.completed_at.format("%Y-%m-%d %H:%M"),
        format_duration(log.duration),
        log.sets.len(),
        log.total_volume(),
        log.id,
    );
    let mut previous: Option<&str> = None;
    for set in &log.sets {
        if previous != Some(set.exercise_id.as_str()) {
            println!("    {}", exercise_name(library, &set.exercise_id));
            previous = Some(set.exercise_id.as_str());
        }
        println!("      {} x {}", set.weight, set.reps);
    }
    if !log.notes.is_empty() {
        println!("    Notes: {}", log.notes);
    }
}

/// Display one exercise as a table row
pub fn display_exercise(exercise: &Exercise) {
    let custom = if exercise.is_custom { " (custom)" } else { "" };
    println!(
        "{:<26} {:<24} {:<10} {}{custom}",
        exercise.id, exercise.name, exercise.muscle_group, exercise.equipment
    );
}

/// Display a routine with its exercise slots
pub fn display_routine(routine: &Routine, library: &ExerciseLibrary) {
    println!("\n{}  [{}]", routine.name, routine.id);
    println!("   Updated: {}", routine.updated_at.format("%Y-%m-%d %H:%M UTC"));
    for exercise in routine.ordered_exercises() {
        println!(
            "   {}. {} - {} x {}",
            exercise.order + 1,
            exercise_name(library, &exercise.exercise_id),
            exercise.planned_sets,
            exercise.planned_reps
        );
    }
}

/// Display aggregate training statistics
pub fn display_stats(stats: &WorkoutStats, library: &ExerciseLibrary) {
    println!("\nTraining Statistics");
    println!("{}", "=".repeat(40));
    println!("   Workouts:          {}", stats.total_workouts);
    println!("   This week:         {}", stats.this_week);
    println!("   This month:        {}", stats.this_month);
    println!("   Total time:        {}", format_duration(stats.total_duration));
    println!("   Average duration:  {}", format_duration(stats.avg_duration));
    println!("   Total sets:        {}", stats.total_sets);
    println!("   Total volume:      {:.1}", stats.total_volume);

    if !stats.most_frequent_exercises.is_empty() {
        println!("\n   Most frequent exercises:");
        for (rank, entry) in stats.most_frequent_exercises.iter().enumerate() {
            println!(
                "   {}. {} ({} sets)",
                rank + 1,
                exercise_name(library, &entry.exercise_id),
                entry.count
            );
        }
    }
}
