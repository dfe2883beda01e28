// ABOUTME: Session cache constants for capacity and key naming
// ABOUTME: Shared by the in-memory and file-backed session cache backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

/// Default number of users whose active sessions the in-memory cache retains
pub const DEFAULT_SESSION_CACHE_MAX_USERS: usize = 1_000;

/// Key prefix for namespacing active-workout snapshots
pub const SESSION_CACHE_KEY_PREFIX: &str = "neural-trainer-active-workout";

/// File extension for file-backed snapshots
pub const SESSION_SNAPSHOT_EXTENSION: &str = "json";
