// ABOUTME: Core types and constants for the Neural Trainer workout tracker
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![deny(unsafe_code)]

//! # Neural Trainer Core
//!
//! Foundation crate providing shared types and constants for the Neural Trainer
//! workout tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Exercises, routines, session snapshots, and workout logs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (Exercise, Routine, SessionSnapshot, WorkoutLog)
pub mod models;
