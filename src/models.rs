// ABOUTME: Domain models re-exported from neural-trainer-core
// ABOUTME: Exercises, routines, session snapshots, and workout logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

pub use neural_trainer_core::models::*;
