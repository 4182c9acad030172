//! Error types for the Notarium core crate.
//!
//! The evaluation paths of the engine are total: incomplete or invalid user
//! input degrades to a suppressed result, never an error. These error types
//! cover construction-time validation only (impossible dates, malformed ISO
//! strings, out-of-range periods).

use thiserror::Error;

/// A specialized Result type for Notarium core operations.
pub type NotariumResult<T> = Result<T, NotariumError>;

/// The main error type for Notarium core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotariumError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Input text could not be interpreted.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what went wrong.
        reason: String,
    },

    /// Calendar configuration error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl NotariumError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NotariumError::invalid_date("2025-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }
}
