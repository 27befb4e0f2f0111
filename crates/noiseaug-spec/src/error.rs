//! Error types for noise spec parsing and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating a noise spec.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The spec document is not valid JSON or does not match the schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the synthesizer cannot use.
    #[error("invalid value for '{field}': {message}")]
    Validation {
        /// Dotted path of the offending field.
        field: String,
        /// Human readable reason.
        message: String,
    },
}

impl SpecError {
    /// Creates a validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::Json(_) => "SPEC_001",
            SpecError::Validation { .. } => "SPEC_002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_helper() {
        let err = SpecError::validation("formant.bandwidths", "must not be empty");
        assert!(err.to_string().contains("formant.bandwidths"));
        assert!(err.to_string().contains("must not be empty"));
        assert_eq!(err.code(), "SPEC_002");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SpecError = json_err.into();
        assert_eq!(err.code(), "SPEC_001");
    }
}
