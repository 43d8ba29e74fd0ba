//! Structured application error

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Cross-crate error: a numeric [`ErrorCode`], a message, and optional
/// structured details (zone, seat id, path, ...)
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::SeatNotFound);
        assert_eq!(err.code, ErrorCode::SeatNotFound);
        assert_eq!(err.message, "Seat not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::LayoutInconsistent, "zone B drifted")
            .with_detail("zone", "B")
            .with_detail("number", 40);

        assert_eq!(err.to_string(), "zone B drifted");
        assert_eq!(err.detail("zone").unwrap(), "B");
        assert_eq!(err.detail("number").unwrap(), 40);
        assert!(err.detail("seat_id").is_none());
    }

    #[test]
    fn test_from_code_uses_default_message() {
        let err: AppError = ErrorCode::SnapshotLoadFailed.into();
        assert_eq!(err.message, "Failed to load snapshot");
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_serialize_skips_empty_details() {
        let json = serde_json::to_value(AppError::with_message(ErrorCode::InternalError, "boom")).unwrap();
        assert_eq!(json["code"], 9001);
        assert_eq!(json["message"], "boom");
        assert!(json.get("details").is_none());
    }
}
