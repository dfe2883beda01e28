// ABOUTME: Workout history commands for neural-trainer
// ABOUTME: Recent workouts, training statistics, and log deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use crate::helpers::{display, CliContext};
use chrono::{DateTime, Utc};
use neural_trainer::errors::AppResult;
use neural_trainer::history::{compute_stats, search_workouts};

/// Narrowing applied by `history list`
#[derive(Debug, Default)]
pub struct HistoryFilter {
    pub search: Option<String>,
    pub routine_id: Option<String>,
    pub range: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl HistoryFilter {
    const fn is_empty(&self) -> bool {
        self.search.is_none() && self.routine_id.is_none() && self.range.is_none()
    }
}

pub async fn list(ctx: &CliContext, limit: usize, filter: &HistoryFilter) -> AppResult<()> {
    let store = ctx.database.workout_logs();
    let mut logs = match (&filter.routine_id, filter.range) {
        (Some(routine_id), _) => store.list_by_routine(&ctx.user_id, routine_id).await?,
        (None, Some((start, end))) => store.list_in_range(&ctx.user_id, start, end).await?,
        (None, None) => store.list_workout_logs(&ctx.user_id).await?,
    };
    if let (Some(_), Some((start, end))) = (&filter.routine_id, filter.range) {
        logs.retain(|log| log.completed_at >= start && log.completed_at <= end);
    }

    let matches = search_workouts(&logs, filter.search.as_deref().unwrap_or_default());
    if matches.is_empty() {
        if filter.is_empty() {
            println!("No workouts logged yet.");
        } else {
            println!("No workouts match the given filters.");
        }
        return Ok(());
    }
    let library = ctx.library().await?;
    for log in matches.into_iter().take(limit) {
        display::display_workout_log(log, &library);
    }
    Ok(())
}

pub async fn stats(ctx: &CliContext) -> AppResult<()> {
    let logs = ctx
        .database
        .workout_logs()
        .list_workout_logs(&ctx.user_id)
        .await?;
    let library = ctx.library().await?;
    display::display_stats(&compute_stats(&logs, Utc::now()), &library);
    Ok(())
}

pub async fn delete(ctx: &CliContext, log_id: &str) -> AppResult<()> {
    ctx.database
        .workout_logs()
        .delete_workout_log(&ctx.user_id, log_id)
        .await?;
    println!("Deleted workout {log_id}");
    Ok(())
}
