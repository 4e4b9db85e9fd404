//! Error types
//!
//! Malformed food data is never an error here; it degrades to zero or to a
//! default. Only arguments a caller could not meaningfully pass are rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl NutritionError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        NutritionError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Result type for nutrition operations that validate their arguments
pub type NutritionResult<T> = Result<T, NutritionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = NutritionError::invalid_argument("target_calories", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid argument `target_calories`: must be greater than zero"
        );
    }
}
