// ABOUTME: Exercise definitions with muscle group and equipment classification
// ABOUTME: Exercise, ExerciseRef, MuscleGroup, and Equipment types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary muscle group trained by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, and spinal erectors
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps, triceps, and forearms
    Arms,
    /// Quads, hamstrings, glutes, and calves
    Legs,
    /// Abdominals and obliques
    Core,
    /// Conditioning work
    Cardio,
    /// Anything else
    #[default]
    Other,
}

impl MuscleGroup {
    /// All muscle groups in display order
    pub const ALL: [Self; 8] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Arms,
        Self::Legs,
        Self::Core,
        Self::Cardio,
        Self::Other,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Core => "core",
            Self::Cardio => "cardio",
            Self::Other => "other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "chest" => Self::Chest,
            "back" => Self::Back,
            "shoulders" => Self::Shoulders,
            "arms" => Self::Arms,
            "legs" => Self::Legs,
            "core" => Self::Core,
            "cardio" => Self::Cardio,
            // Default to Other for unrecognized values
            _ => Self::Other,
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment an exercise is performed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    /// Olympic or standard barbell
    Barbell,
    /// One or two dumbbells
    Dumbbell,
    /// Selectorized or plate-loaded machine
    Machine,
    /// No external load
    Bodyweight,
    /// Cable stack
    Cable,
    /// Anything else
    #[default]
    Other,
}

impl Equipment {
    /// All equipment kinds in display order
    pub const ALL: [Self; 6] = [
        Self::Barbell,
        Self::Dumbbell,
        Self::Machine,
        Self::Bodyweight,
        Self::Cable,
        Self::Other,
    ];

    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Barbell => "barbell",
            Self::Dumbbell => "dumbbell",
            Self::Machine => "machine",
            Self::Bodyweight => "bodyweight",
            Self::Cable => "cable",
            Self::Other => "other",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "barbell" => Self::Barbell,
            "dumbbell" => Self::Dumbbell,
            "machine" => Self::Machine,
            "bodyweight" => Self::Bodyweight,
            "cable" => Self::Cable,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exercise in the library, either built in or created by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Stable identifier (slug for built-ins, UUID for custom exercises)
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group
    pub muscle_group: MuscleGroup,
    /// Equipment used
    pub equipment: Equipment,
    /// Whether a user created this exercise
    #[serde(default)]
    pub is_custom: bool,
    /// Owner of a custom exercise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Snapshot of an exercise captured when it enters a workout session
///
/// Later edits to the library never reach an exercise already in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRef {
    /// Exercise identifier
    pub id: String,
    /// Name at capture time
    pub name: String,
    /// Muscle group at capture time
    pub muscle_group: MuscleGroup,
    /// Equipment at capture time
    pub equipment: Equipment,
}

impl From<&Exercise> for ExerciseRef {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            muscle_group: exercise.muscle_group,
            equipment: exercise.equipment,
        }
    }
}
