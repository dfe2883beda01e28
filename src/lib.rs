// ABOUTME: Main library entry point for Neural Trainer workout tracking
// ABOUTME: Active workout sessions, exercise library, routines, and training history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![deny(unsafe_code)]

//! # Neural Trainer
//!
//! Tracks strength workouts: pick a routine (or start empty), log sets as you go,
//! and finish to store a workout log. An in-progress workout survives restarts
//! through a local session cache.
//!
//! ## Architecture
//!
//! - **Session**: the active-workout state machine and its owners
//! - **Catalog**: built-in and custom exercises
//! - **Cache**: best-effort local snapshot of the in-progress workout
//! - **Database**: `SQLite` storage for custom exercises, routines, and workout logs
//! - **History**: statistics over finished workouts
//! - **Config**: environment-driven configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use neural_trainer::config::TrainerConfig;
//! use neural_trainer::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = TrainerConfig::from_env()?;
//!     println!("Neural Trainer configured: {}", config.summary());
//!     Ok(())
//! }
//! ```

/// Session snapshot cache backends
pub mod cache;

/// Exercise lookup and the exercise library
pub mod catalog;

/// Time source abstraction
pub mod clock;

/// Environment configuration
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` persistence
pub mod database;

/// Error types
pub mod errors;

/// Workout history statistics
pub mod history;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Active workout session
pub mod session;

/// Store traits consumed by the session
pub mod stores;
