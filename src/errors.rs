//! Error types for scenario setup
//!
//! This module defines [`VizError`], which covers everything that can stop a
//! run *before* it produces frames: malformed user input, violated algorithm
//! preconditions and unknown selectors.
//!
//! Structural absence (searching for a missing value, popping an empty stack)
//! is not an error. Runners report it as a terminal frame instead.

use thiserror::Error;

/// Errors raised while preparing or presenting a run
#[derive(Debug, Error)]
pub enum VizError {
    /// A token could not be read as the value the operation needs
    #[error("Malformed input '{input}': {reason}")]
    MalformedInput { input: String, reason: String },

    /// Counting and radix sort index arrays by value
    #[error("{algorithm} requires non-negative integers, got {value}")]
    NegativeValue { algorithm: &'static str, value: i64 },

    /// Counting sort would allocate one bucket per possible value
    #[error("{algorithm} supports values up to {limit}, got {value}")]
    ValueTooLarge {
        algorithm: &'static str,
        value: i64,
        limit: i64,
    },

    /// Unknown algorithm, structure or operation name
    #[error("Unsupported {kind} '{name}' (expected one of: {expected})")]
    UnsupportedSelector {
        kind: &'static str,
        name: String,
        expected: &'static str,
    },

    /// The operation needs a value that was not supplied
    #[error("Operation '{operation}' needs {parameter}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VizError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VizError::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = VizError::NegativeValue {
            algorithm: "Counting Sort",
            value: -4,
        };
        assert_eq!(
            err.to_string(),
            "Counting Sort requires non-negative integers, got -4"
        );

        let err = VizError::UnsupportedSelector {
            kind: "sorting algorithm",
            name: "bogo".to_string(),
            expected: "insertion, bubble",
        };
        assert!(err.to_string().contains("'bogo'"));
    }
}
