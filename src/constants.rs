// ABOUTME: Application constants re-exported from neural-trainer-core
// ABOUTME: Session, cache, history, and environment configuration constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

pub use neural_trainer_core::constants::*;
