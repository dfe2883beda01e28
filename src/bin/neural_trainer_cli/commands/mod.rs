// ABOUTME: Command implementations for neural-trainer
// ABOUTME: Session, exercise, routine, and history subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

pub mod exercises;
pub mod history;
pub mod routines;
pub mod session;
