// ABOUTME: Training history insights computed from finished workout logs
// ABOUTME: Totals, weekly and monthly counts, and most frequently trained exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::constants::history::{
    MOST_FREQUENT_EXERCISES_LIMIT, RECENT_WORKOUTS_LIMIT, WEEK_WINDOW_DAYS,
};
use crate::models::WorkoutLog;
use chrono::{DateTime, Duration, Months, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// How often an exercise appears across logged sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFrequency {
    /// Exercise identifier
    pub exercise_id: String,
    /// Number of sets logged for it
    pub count: usize,
}

/// Aggregate statistics over a user's workout logs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Number of workouts
    pub total_workouts: usize,
    /// Sum of workout durations in seconds
    pub total_duration: u64,
    /// Sum of weight x reps over every set
    pub total_volume: f64,
    /// Number of sets
    pub total_sets: usize,
    /// Workouts completed in the last 7 days
    pub this_week: usize,
    /// Workouts completed since the same day last month
    pub this_month: usize,
    /// Rounded mean duration in seconds, 0 without workouts
    pub avg_duration: u64,
    /// Top exercises by set count, ties broken by exercise id
    pub most_frequent_exercises: Vec<ExerciseFrequency>,
}

/// Total volume of one workout
#[must_use]
pub fn log_volume(log: &WorkoutLog) -> f64 {
    log.total_volume()
}

/// Compute statistics for `logs` relative to `now`
#[must_use]
pub fn compute_stats(logs: &[WorkoutLog], now: DateTime<Utc>) -> WorkoutStats {
    let total_workouts = logs.len();
    let total_duration: u64 = logs.iter().map(|log| log.duration).sum();
    let total_volume: f64 = logs.iter().map(log_volume).sum();
    let total_sets: usize = logs.iter().map(|log| log.sets.len()).sum();

    let week_ago = now - Duration::days(WEEK_WINDOW_DAYS);
    let month_ago = now.checked_sub_months(Months::new(1)).unwrap_or(week_ago);
    let completed_since =
        |cutoff: DateTime<Utc>| logs.iter().filter(|log| log.completed_at >= cutoff).count();

    let avg_duration = if total_workouts == 0 {
        0
    } else {
        (total_duration as f64 / total_workouts as f64).round() as u64
    };

    WorkoutStats {
        total_workouts,
        total_duration,
        total_volume,
        total_sets,
        this_week: completed_since(week_ago),
        this_month: completed_since(month_ago),
        avg_duration,
        most_frequent_exercises: most_frequent_exercises(logs, MOST_FREQUENT_EXERCISES_LIMIT),
    }
}

/// Exercises with the most logged sets
#[must_use]
pub fn most_frequent_exercises(logs: &[WorkoutLog], limit: usize) -> Vec<ExerciseFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for set in logs.iter().flat_map(|log| &log.sets) {
        *counts.entry(set.exercise_id.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<ExerciseFrequency> = counts
        .into_iter()
        .map(|(exercise_id, count)| ExerciseFrequency {
            exercise_id: exercise_id.to_owned(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.exercise_id.cmp(&b.exercise_id))
    });
    ranked.truncate(limit);
    ranked
}

/// The first `limit` logs of a most-recent-first list
#[must_use]
pub fn recent_workouts(logs: &[WorkoutLog], limit: usize) -> &[WorkoutLog] {
    &logs[..limit.min(logs.len())]
}

/// The default number of recent workouts
#[must_use]
pub fn default_recent_workouts(logs: &[WorkoutLog]) -> &[WorkoutLog] {
    recent_workouts(logs, RECENT_WORKOUTS_LIMIT)
}

/// Logs whose routine name or notes contain `query`, ignoring case
///
/// A blank query matches every log. Input order is preserved.
#[must_use]
pub fn search_workouts<'a>(logs: &'a [WorkoutLog], query: &str) -> Vec<&'a WorkoutLog> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return logs.iter().collect();
    }
    logs.iter()
        .filter(|log| {
            log.routine_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
                || log.notes.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SetLog;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap()
    }

    fn set(exercise_id: &str, weight: f64, reps: u32) -> SetLog {
        SetLog {
            id: format!("{exercise_id}-{weight}-{reps}"),
            exercise_id: exercise_id.to_owned(),
            weight,
            reps,
            order: 1,
            completed_at: now(),
        }
    }

    fn workout(id: &str, days_ago: i64, duration: u64, sets: Vec<SetLog>) -> WorkoutLog {
        let completed_at = now() - Duration::days(days_ago);
        WorkoutLog {
            id: id.to_owned(),
            user_id: "athlete-1".to_owned(),
            routine_id: None,
            routine_name: None,
            sets,
            duration,
            started_at: completed_at - Duration::seconds(duration as i64),
            completed_at,
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = compute_stats(&[], now());
        assert_eq!(stats.total_workouts, 0);
        assert_eq!(stats.avg_duration, 0);
        assert!(stats.most_frequent_exercises.is_empty());
    }

    #[test]
    fn test_stats_windows_and_totals() {
        let logs = vec![
            workout("a", 1, 1800, vec![set("squats", 100.0, 5), set("squats", 100.0, 5)]),
            workout("b", 6, 2401, vec![set("bench-press", 135.0, 10)]),
            workout("c", 20, 3600, vec![set("deadlift", 200.0, 3)]),
            workout("d", 40, 600, vec![]),
        ];
        let stats = compute_stats(&logs, now());

        assert_eq!(stats.total_workouts, 4);
        assert_eq!(stats.total_duration, 8401);
        assert_eq!(stats.avg_duration, 2100);
        assert_eq!(stats.total_sets, 4);
        assert!((stats.total_volume - 2950.0).abs() < f64::EPSILON);
        assert_eq!(stats.this_week, 2);
        assert_eq!(stats.this_month, 3);
    }

    #[test]
    fn test_most_frequent_ties_break_by_id() {
        let logs = vec![workout(
            "a",
            0,
            60,
            vec![
                set("squats", 1.0, 1),
                set("lunges", 1.0, 1),
                set("squats", 2.0, 1),
                set("plank", 0.0, 1),
                set("burpees", 0.0, 1),
                set("crunches", 0.0, 1),
                set("deadlift", 1.0, 1),
            ],
        )];
        let ids: Vec<String> = most_frequent_exercises(&logs, 5)
            .into_iter()
            .map(|f| f.exercise_id)
            .collect();
        assert_eq!(ids, ["squats", "burpees", "crunches", "deadlift", "lunges"]);
    }

    #[test]
    fn test_recent_workouts_limits() {
        let logs: Vec<WorkoutLog> = (0..12)
            .map(|i| workout(&format!("w{i}"), i, 60, vec![]))
            .collect();
        assert_eq!(default_recent_workouts(&logs).len(), 10);
        assert_eq!(recent_workouts(&logs, 3)[2].id, "w2");
        assert_eq!(recent_workouts(&logs[..2], 5).len(), 2);
    }

    #[test]
    fn test_search_matches_routine_name_or_notes() {
        let mut push = workout("push", 1, 60, vec![]);
        push.routine_name = Some("Push Day".to_owned());
        let mut legs = workout("legs", 2, 60, vec![]);
        legs.routine_name = Some("Leg Day".to_owned());
        legs.notes = "Knee felt fine, pushed the last set".to_owned();
        let mut free = workout("free", 3, 60, vec![]);
        free.notes = "Easy recovery session".to_owned();
        let logs = vec![push, legs, free];

        let ids = |query: &str| -> Vec<String> {
            search_workouts(&logs, query)
                .into_iter()
                .map(|log| log.id.clone())
                .collect()
        };
        assert_eq!(ids("PUSH"), ["push", "legs"]);
        assert_eq!(ids("recovery"), ["free"]);
        assert_eq!(ids("  day "), ["push", "legs"]);
        assert!(ids("deadlift").is_empty());
        assert_eq!(ids("   "), ["push", "legs", "free"]);
    }
}
