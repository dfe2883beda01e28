// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Validates parsing, defaults, and rejection of invalid settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use neural_trainer::cache::{SessionCacheBackend, SessionCacheConfig};
use neural_trainer::config::{DatabaseUrl, Environment, LogLevel, TrainerConfig};
use neural_trainer::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 7] = [
    "DATABASE_URL",
    "SESSION_CACHE_BACKEND",
    "SESSION_CACHE_DIR",
    "SESSION_CACHE_MAX_USERS",
    "NEURAL_TRAINER_USER",
    "ENVIRONMENT",
    "LOG_LEVEL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("INFO"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("loud"), LogLevel::Warn);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_database_url_parsing() {
    assert_eq!(
        DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
        DatabaseUrl::Memory
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:./data/trainer.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/trainer.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("sqlite:///var/lib/trainer.db").unwrap(),
        DatabaseUrl::SQLite {
            path: PathBuf::from("/var/lib/trainer.db")
        }
    );
    assert_eq!(
        DatabaseUrl::parse_url("trainer.db").unwrap().to_connection_string(),
        "sqlite:trainer.db"
    );

    let err = DatabaseUrl::parse_url("postgres://localhost/trainer").unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(DatabaseUrl::parse_url("  ").is_err());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = TrainerConfig::from_env().unwrap();
    assert_eq!(config, TrainerConfig::default());
    assert_eq!(config.user_id, "local");
    assert_eq!(config.session_cache.backend, SessionCacheBackend::File);
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("SESSION_CACHE_BACKEND", "Memory");
    env::set_var("SESSION_CACHE_MAX_USERS", "25");
    env::set_var("NEURAL_TRAINER_USER", "athlete-1");
    env::set_var("LOG_LEVEL", "debug");

    let config = TrainerConfig::from_env().unwrap();
    clear_env();

    assert!(config.database.is_memory());
    assert_eq!(
        config.session_cache,
        SessionCacheConfig {
            backend: SessionCacheBackend::Memory,
            directory: PathBuf::from("./data/sessions"),
            max_users: 25,
        }
    );
    assert_eq!(config.user_id, "athlete-1");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.summary().contains("session_cache=memory (max 25 users)"));
}

#[test]
#[serial]
fn test_invalid_environment_is_rejected() {
    clear_env();
    env::set_var("SESSION_CACHE_BACKEND", "redis");
    assert!(TrainerConfig::from_env().is_err());

    clear_env();
    env::set_var("SESSION_CACHE_MAX_USERS", "lots");
    assert!(TrainerConfig::from_env().is_err());

    clear_env();
    env::set_var("SESSION_CACHE_BACKEND", "memory");
    env::set_var("SESSION_CACHE_MAX_USERS", "0");
    assert_eq!(
        TrainerConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    clear_env();
    env::set_var("NEURAL_TRAINER_USER", "  ");
    assert!(TrainerConfig::from_env().is_err());
    clear_env();
}
