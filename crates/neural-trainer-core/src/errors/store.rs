// ABOUTME: Structured error types for routine, exercise, workout log, and session cache stores
// ABOUTME: Every store operation returns these instead of panicking across the store boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors surfaced by persistence collaborators
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure in the backing database
    #[error("Database error: {context}")]
    Database {
        /// What the store was doing when it failed
        context: String,
    },

    /// Record could not be encoded or decoded
    #[error("Serialization error: {context}")]
    Serialization {
        /// Description of the malformed payload
        context: String,
    },

    /// Filesystem failure in a file-backed store
    #[error("I/O error: {context}")]
    Io {
        /// Path or operation that failed
        context: String,
    },

    /// Record lookup failed
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Kind of record (routine, exercise, workout log)
        entity: &'static str,
        /// Requested identifier
        id: String,
    },

    /// Record rejected before it reached the store
    #[error("Validation failed: {reason}")]
    Validation {
        /// Why the record was rejected
        reason: String,
    },

    /// Store is reachable but refused the write
    #[error("Store unavailable: {context}")]
    Unavailable {
        /// Reason reported by the store
        context: String,
    },
}

impl StoreError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Create a database error
    #[must_use]
    pub fn database(context: impl Into<String>) -> Self {
        Self::Database {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            context: error.to_string(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            context: error.to_string(),
        }
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity: "row",
                id: String::new(),
            },
            other => Self::Database {
                context: other.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let code = match &error {
            StoreError::Database { .. } => ErrorCode::DatabaseError,
            StoreError::Serialization { .. } => ErrorCode::SerializationError,
            StoreError::Io { .. } => ErrorCode::StorageError,
            StoreError::NotFound { .. } => ErrorCode::ResourceNotFound,
            StoreError::Validation { .. } => ErrorCode::InvalidInput,
            StoreError::Unavailable { .. } => ErrorCode::ExternalServiceUnavailable,
        };
        let resource_id = match &error {
            StoreError::NotFound { id, .. } if !id.is_empty() => Some(id.clone()),
            _ => None,
        };
        let mut app_error = Self::new(code, error.to_string());
        app_error.resource_id = resource_id;
        app_error.with_source(error)
    }
}
