//! Error types for walletledger-core
//!
//! Only loading, constructing and totalling transactions can fail. Everything
//! in the view pipeline clamps its inputs instead of returning errors.

use thiserror::Error;
use serde::{Deserialize, Serialize};
use std::io;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount sign disagrees with the declared type
    InconsistentType,
    /// Two transactions share an id
    DuplicateId,
    /// Data file not found
    FileNotFound,
    /// Invalid data format
    InvalidFormat,
    /// A total exceeds the decimal range
    AmountOverflow,
    /// IO error
    IoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InconsistentType => write!(f, "INCONSISTENT_TYPE"),
            ErrorCode::DuplicateId => write!(f, "DUPLICATE_ID"),
            ErrorCode::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
            ErrorCode::AmountOverflow => write!(f, "AMOUNT_OVERFLOW"),
            ErrorCode::IoError => write!(f, "IO_ERROR"),
        }
    }
}

/// Detailed error information for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for walletledger-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Transaction {id}: amount {amount} does not match type {declared}")]
    InconsistentType {
        id: String,
        amount: String,
        declared: String,
    },

    #[error("Duplicate transaction id: {id}")]
    DuplicateId { id: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("Totals overflow at transaction {id}")]
    AmountOverflow { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InconsistentType { .. } => ErrorCode::InconsistentType,
            CoreError::DuplicateId { .. } => ErrorCode::DuplicateId,
            CoreError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CoreError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            CoreError::AmountOverflow { .. } => ErrorCode::AmountOverflow,
            CoreError::IoError(_) => ErrorCode::IoError,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InconsistentType { id, amount, declared } => {
                details = details.with_detail(serde_json::json!({
                    "id": id,
                    "amount": amount,
                    "type": declared,
                }));
                details = details.with_suggestion(
                    "Credits must have a non-negative amount and debits a negative one.".to_string()
                );
            }
            CoreError::DuplicateId { id } => {
                details = details.with_suggestion(format!(
                    "Give every transaction a unique id; '{}' appears more than once.", id
                ));
            }
            CoreError::FileNotFound { .. } => {
                details = details.with_suggestion(
                    "Check data.path in the config or the --data argument.".to_string()
                );
                details = details.with_suggestion(
                    "Remove data.path to use the built-in transactions.".to_string()
                );
            }
            CoreError::InvalidFormat { message } => {
                details = details.with_detail(serde_json::json!({ "parse_message": message }));
                details = details.with_suggestion(
                    "The data file must be a JSON array of transaction objects.".to_string()
                );
            }
            CoreError::AmountOverflow { id } => {
                details = details.with_detail(serde_json::json!({ "id": id }));
                details = details.with_suggestion(
                    "Check the amounts in the data file for misplaced digits.".to_string()
                );
            }
            CoreError::IoError(_) => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::InconsistentType.to_string(), "INCONSISTENT_TYPE");
        assert_eq!(ErrorCode::DuplicateId.to_string(), "DUPLICATE_ID");
        assert_eq!(ErrorCode::InvalidFormat.to_string(), "INVALID_FORMAT");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::DuplicateId { id: "7".to_string() };
        assert_eq!(error.code(), ErrorCode::DuplicateId);

        let error = CoreError::AmountOverflow { id: "9".to_string() };
        assert_eq!(error.code().to_string(), "AMOUNT_OVERFLOW");
        assert_eq!(error.to_details().details, Some(serde_json::json!({ "id": "9" })));

        let error = CoreError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(error.code(), ErrorCode::IoError);
    }

    #[test]
    fn test_error_details_inconsistent_type() {
        let error = CoreError::InconsistentType {
            id: "3".to_string(),
            amount: "-50".to_string(),
            declared: "Credit".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::InconsistentType);
        assert!(details.details.is_some());
        assert!(!details.suggestions.is_empty());
        assert!(details.message.contains("-50"));
    }

    #[test]
    fn test_error_details_serialization() {
        let details = CoreError::InvalidFormat { message: "expected array".to_string() }.to_details();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["code"], "INVALID_FORMAT");
        assert_eq!(json["details"]["parse_message"], "expected array");
    }
}
