// ABOUTME: Unified error handling re-exported from neural-trainer-core
// ABOUTME: AppError, ErrorCode, SessionError, and StoreError for the whole crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

pub use neural_trainer_core::errors::*;
