// ABOUTME: Neural Trainer CLI - command-line front end for workout tracking
// ABOUTME: Runs active workout sessions and manages exercises, routines, and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors
//!
//! Usage:
//! ```bash
//! # Start a workout from a saved routine
//! neural-trainer session start --routine 6f1c...
//!
//! # Or start empty and add exercises as you go
//! neural-trainer session start
//! neural-trainer session add bench-press --sets 3 --reps 10
//!
//! # Log 135 x 10 on the current exercise, then check progress
//! neural-trainer session log 135 10
//! neural-trainer session status
//!
//! # Save the workout
//! neural-trainer session finish
//!
//! # Create a routine and look at training history
//! neural-trainer routines create "Push Day" --exercise bench-press:3:10 --exercise overhead-press:3:8
//! neural-trainer history stats
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use neural_trainer::{
    cache::Cache,
    config::{DatabaseUrl, TrainerConfig},
    database::Database,
    errors::{AppError, AppResult, ErrorResponse},
    logging::LoggingConfig,
    models::{Equipment, MuscleGroup},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use helpers::{ensure_persistent_cache, CliContext, RoutineSlot};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "neural-trainer",
    about = "Neural Trainer workout tracking CLI",
    long_about = "Track active workouts, manage exercises and routines, and review training history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// User id override
    #[arg(long, global = true)]
    user: Option<String>,

    /// Session cache directory override
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Report failures as JSON on stderr
    #[arg(long, global = true)]
    json_errors: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Active workout commands
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Exercise library commands
    Exercises {
        #[command(subcommand)]
        action: ExerciseCommand,
    },

    /// Routine template commands
    Routines {
        #[command(subcommand)]
        action: RoutineCommand,
    },

    /// Workout history commands
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SessionCommand {
    /// Start a workout
    Start {
        /// Routine to start from (empty workout if omitted)
        #[arg(long)]
        routine: Option<String>,
    },

    /// Add an exercise to the workout
    Add {
        /// Exercise id (see `exercises list`)
        exercise_id: String,

        /// Planned sets
        #[arg(long, default_value = "3")]
        sets: u32,

        /// Planned reps per set
        #[arg(long, default_value = "10")]
        reps: u32,
    },

    /// Log a completed set
    Log {
        /// Exercise number (defaults to the current exercise)
        #[arg(long)]
        exercise: Option<usize>,

        /// Weight lifted
        weight: f64,

        /// Repetitions completed
        reps: u32,
    },

    /// Remove the last logged set of an exercise
    Undo {
        /// Exercise number (defaults to the current exercise)
        #[arg(long)]
        exercise: Option<usize>,
    },

    /// Move to the next exercise
    Next,

    /// Move to the previous exercise
    Prev,

    /// Replace the workout notes
    Notes {
        /// Note text
        text: String,
    },

    /// Show the workout in progress
    Status,

    /// Save the workout to history
    Finish,

    /// Discard the workout without saving
    Cancel,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExerciseCommand {
    /// List exercises
    List {
        /// Only exercises for this muscle group
        #[arg(long, value_parser = helpers::parse_muscle_group)]
        muscle: Option<MuscleGroup>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a custom exercise
    Add {
        /// Exercise name
        name: String,

        /// Primary muscle group
        #[arg(long, value_parser = helpers::parse_muscle_group)]
        muscle: MuscleGroup,

        /// Equipment used
        #[arg(long, value_parser = helpers::parse_equipment, default_value = "other")]
        equipment: Equipment,
    },

    /// Delete a custom exercise
    Remove {
        /// Custom exercise id
        exercise_id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RoutineCommand {
    /// List routines
    List,

    /// Show one routine
    Show {
        /// Routine id
        routine_id: String,
    },

    /// Create a routine
    Create {
        /// Routine name
        name: String,

        /// Exercise slot as `exercise-id:sets:reps`, repeat in order
        #[arg(long = "exercise", required = true, value_parser = helpers::parse_routine_slot)]
        exercises: Vec<RoutineSlot>,
    },

    /// Delete a routine
    Delete {
        /// Routine id
        routine_id: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum HistoryCommand {
    /// List finished workouts, newest first
    List {
        /// Number of workouts to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Only workouts whose routine name or notes contain this text
        #[arg(long)]
        search: Option<String>,

        /// Only workouts started from this routine id
        #[arg(long)]
        routine: Option<String>,

        /// Only workouts completed on or after this day (YYYY-MM-DD, UTC)
        #[arg(long, value_parser = helpers::parse_date)]
        since: Option<NaiveDate>,

        /// Only workouts completed on or before this day (YYYY-MM-DD, UTC)
        #[arg(long, value_parser = helpers::parse_date)]
        until: Option<NaiveDate>,
    },

    /// Show training statistics
    Stats,

    /// Delete a workout log
    Delete {
        /// Workout log id
        log_id: String,
    },
}

fn load_config(cli: &Cli) -> Result<TrainerConfig> {
    let mut config = TrainerConfig::from_env()?;
    if let Some(url) = &cli.database_url {
        config.database = DatabaseUrl::parse_url(url)?;
    }
    if let Some(user) = &cli.user {
        config.user_id.clone_from(user);
    }
    if let Some(dir) = &cli.cache_dir {
        config.session_cache.directory.clone_from(dir);
    }
    config.validate()?;
    ensure_persistent_cache(&config.session_cache)?;
    Ok(config)
}

fn report_error(error: &AppError, as_json: bool) {
    if as_json {
        if let Ok(payload) = serde_json::to_string(&ErrorResponse::from(error)) {
            eprintln!("{payload}");
            return;
        }
    }
    eprintln!("Error: {error}");
    if error.code.is_retryable() {
        eprintln!("The operation can be retried.");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error, json_errors);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = load_config(&cli)?;
    info!("Neural Trainer CLI: {}", config.summary());

    let database = Database::new(&config.database.to_connection_string()).await?;
    let cache = Cache::new(&config.session_cache);
    let ctx = CliContext::new(database, cache, config.user_id);

    match cli.command {
        Command::Session { action } => match action {
            SessionCommand::Start { routine } => {
                commands::session::start(&ctx, routine.as_deref()).await?;
            }
            SessionCommand::Add {
                exercise_id,
                sets,
                reps,
            } => commands::session::add(&ctx, &exercise_id, sets, reps).await?,
            SessionCommand::Log {
                exercise,
                weight,
                reps,
            } => commands::session::log(&ctx, exercise, weight, reps).await?,
            SessionCommand::Undo { exercise } => commands::session::undo(&ctx, exercise).await?,
            SessionCommand::Next => commands::session::next(&ctx).await?,
            SessionCommand::Prev => commands::session::previous(&ctx).await?,
            SessionCommand::Notes { text } => commands::session::notes(&ctx, text).await?,
            SessionCommand::Status => commands::session::status(&ctx).await?,
            SessionCommand::Finish => commands::session::finish(&ctx).await?,
            SessionCommand::Cancel => commands::session::cancel(&ctx).await?,
        },
        Command::Exercises { action } => match action {
            ExerciseCommand::List { muscle, search } => {
                commands::exercises::list(&ctx, muscle, search.as_deref()).await?;
            }
            ExerciseCommand::Add {
                name,
                muscle,
                equipment,
            } => commands::exercises::add(&ctx, &name, muscle, equipment).await?,
            ExerciseCommand::Remove { exercise_id } => {
                commands::exercises::remove(&ctx, &exercise_id).await?;
            }
        },
        Command::Routines { action } => match action {
            RoutineCommand::List => commands::routines::list(&ctx).await?,
            RoutineCommand::Show { routine_id } => {
                commands::routines::show(&ctx, &routine_id).await?;
            }
            RoutineCommand::Create { name, exercises } => {
                commands::routines::create(&ctx, name, exercises).await?;
            }
            RoutineCommand::Delete { routine_id } => {
                commands::routines::delete(&ctx, &routine_id).await?;
            }
        },
        Command::History { action } => match action {
            HistoryCommand::List {
                limit,
                search,
                routine,
                since,
                until,
            } => {
                let filter = commands::history::HistoryFilter {
                    search,
                    routine_id: routine,
                    range: helpers::day_range(since, until)?,
                };
                commands::history::list(&ctx, limit, &filter).await?;
            }
            HistoryCommand::Stats => commands::history::stats(&ctx).await?,
            HistoryCommand::Delete { log_id } => commands::history::delete(&ctx, &log_id).await?,
        },
    }

    Ok(())
}
