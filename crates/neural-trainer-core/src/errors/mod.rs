// ABOUTME: Unified error handling with standard error codes for Neural Trainer
// ABOUTME: Defines AppError, ErrorCode, and the domain error modules that convert into them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Neural Trainer Contributors

//! # Unified Error Handling System
//!
//! All crates in the workspace report failures through [`AppError`], which pairs a
//! stable [`ErrorCode`] with a human-readable message. Domain-specific errors
//! ([`SessionError`], [`StoreError`]) keep their structured variants for callers that
//! want to match on them and convert into `AppError` at the binary boundary.

/// Active workout session errors
pub mod session;
/// Persistence-layer errors
pub mod store;

pub use session::SessionError;
pub use store::StoreError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    #[serde(rename = "RESOURCE_LOCKED")]
    ResourceLocked = 4002,
    #[serde(rename = "SESSION_NOT_ACTIVE")]
    SessionNotActive = 4010,
    #[serde(rename = "SESSION_ALREADY_ACTIVE")]
    SessionAlreadyActive = 4011,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceLocked => "The resource is busy and cannot be modified right now",
            Self::SessionNotActive => "No workout session is in progress",
            Self::SessionAlreadyActive => "A workout session is already in progress",
            Self::ExternalServiceError => "The workout log store reported an error",
            Self::ExternalServiceUnavailable => "The workout log store is unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether retrying the same operation may succeed without user changes
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ResourceLocked
                | Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::DatabaseError
                | Self::StorageError
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the resource involved, if any
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error payload for machine-readable CLI output
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Resource identifier when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Whether the operation can be retried as-is
    pub retryable: bool,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            code: error.code,
            message: error.message.clone(),
            resource_id: error.resource_id.clone(),
            retryable: error.code.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::not_found("Routine push-day");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Routine push-day not found"
        );
    }

    #[test]
    fn test_retryable_codes() {
        assert!(ErrorCode::ExternalServiceError.is_retryable());
        assert!(ErrorCode::ResourceLocked.is_retryable());
        assert!(!ErrorCode::InvalidInput.is_retryable());
        assert!(!ErrorCode::SessionNotActive.is_retryable());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_input("reps must be positive").with_resource_id("bench-press");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("INVALID_INPUT"));
        assert!(json.contains("bench-press"));
        assert!(json.contains("\"retryable\":false"));
    }

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::ConfigInvalid).unwrap(),
            "\"CONFIG_INVALID\""
        );
        let parsed: ErrorCode = serde_json::from_str("\"SESSION_ALREADY_ACTIVE\"").unwrap();
        assert_eq!(parsed, ErrorCode::SessionAlreadyActive);
        for retired in ["MISSING_REQUIRED_FIELD", "INVALID_FORMAT", "RESOURCE_ALREADY_EXISTS", "CONFIG_MISSING"] {
            assert!(serde_json::from_str::<ErrorCode>(&format!("\"{retired}\"")).is_err());
        }
    }
}
