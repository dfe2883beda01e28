// ABOUTME: Configuration management module for Neural Trainer settings
// ABOUTME: Environment-driven configuration with command-line overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! Configuration module for Neural Trainer
//!
//! All settings come from environment variables (see
//! [`crate::constants::env_config`]); the command-line tool layers its flags on
//! top of [`TrainerConfig::from_env`].

/// Environment and deployment configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, TrainerConfig};
