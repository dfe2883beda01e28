// ABOUTME: Built-in exercise library shipped with every installation
// ABOUTME: Stable slug identifiers used by routines and workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::models::{Equipment, Exercise, MuscleGroup};

use Equipment::{Barbell, Bodyweight, Cable, Dumbbell, Machine};
use MuscleGroup::{Arms, Back, Cardio, Chest, Core, Legs, Shoulders};

/// (id, name, muscle group, equipment)
const DEFAULT_EXERCISES: &[(&str, &str, MuscleGroup, Equipment)] = &[
    ("bench-press", "Bench Press", Chest, Barbell),
    ("dumbbell-press", "Dumbbell Press", Chest, Dumbbell),
    ("push-ups", "Push-ups", Chest, Bodyweight),
    ("incline-bench-press", "Incline Bench Press", Chest, Barbell),
    ("chest-fly", "Chest Fly", Chest, Dumbbell),
    ("deadlift", "Deadlift", Back, Barbell),
    ("pull-ups", "Pull-ups", Back, Bodyweight),
    ("bent-over-row", "Bent-over Row", Back, Barbell),
    ("lat-pulldown", "Lat Pulldown", Back, Machine),
    ("seated-row", "Seated Row", Back, Cable),
    ("overhead-press", "Overhead Press", Shoulders, Barbell),
    ("lateral-raises", "Lateral Raises", Shoulders, Dumbbell),
    ("front-raises", "Front Raises", Shoulders, Dumbbell),
    ("rear-delt-fly", "Rear Delt Fly", Shoulders, Dumbbell),
    ("bicep-curls", "Bicep Curls", Arms, Dumbbell),
    ("tricep-dips", "Tricep Dips", Arms, Bodyweight),
    ("hammer-curls", "Hammer Curls", Arms, Dumbbell),
    ("tricep-extensions", "Tricep Extensions", Arms, Dumbbell),
    ("squats", "Squats", Legs, Barbell),
    ("lunges", "Lunges", Legs, Bodyweight),
    ("leg-press", "Leg Press", Legs, Machine),
    ("leg-curls", "Leg Curls", Legs, Machine),
    ("calf-raises", "Calf Raises", Legs, Bodyweight),
    ("bulgarian-split-squats", "Bulgarian Split Squats", Legs, Bodyweight),
    ("plank", "Plank", Core, Bodyweight),
    ("crunches", "Crunches", Core, Bodyweight),
    ("russian-twists", "Russian Twists", Core, Bodyweight),
    ("mountain-climbers", "Mountain Climbers", Core, Bodyweight),
    ("dead-bug", "Dead Bug", Core, Bodyweight),
    ("running", "Running", Cardio, Equipment::Other),
    ("cycling", "Cycling", Cardio, Equipment::Other),
    ("jumping-jacks", "Jumping Jacks", Cardio, Bodyweight),
    ("burpees", "Burpees", Cardio, Bodyweight),
];

/// The built-in exercises, in display order
#[must_use]
pub fn default_exercises() -> Vec<Exercise> {
    DEFAULT_EXERCISES
        .iter()
        .map(|&(id, name, muscle_group, equipment)| Exercise {
            id: id.to_owned(),
            name: name.to_owned(),
            muscle_group,
            equipment,
            is_custom: false,
            user_id: None,
        })
        .collect()
}
