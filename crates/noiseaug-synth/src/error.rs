//! Error types for noise synthesis.

use noiseaug_spec::SpecError;
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during noise synthesis.
///
/// Bad input values fall into one category made of several variants:
/// [`InvalidSampleRate`](SynthError::InvalidSampleRate),
/// [`InvalidDuration`](SynthError::InvalidDuration),
/// [`InvalidParameter`](SynthError::InvalidParameter) and
/// [`Spec`](SynthError::Spec). [`SynthError::is_invalid_parameter`] tests
/// for that category. [`DegenerateSignal`](SynthError::DegenerateSignal) is
/// the only variant outside it.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Normalization hit an all-zero signal.
    #[error("degenerate signal: {message}")]
    DegenerateSignal {
        /// Error message.
        message: String,
    },

    /// The noise spec failed validation.
    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate signal error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateSignal {
            message: message.into(),
        }
    }

    /// Returns true for every error caused by a bad input value.
    ///
    /// Sample rate, duration, and spec validation failures are all
    /// parameter errors; only [`SynthError::DegenerateSignal`] is not.
    pub fn is_invalid_parameter(&self) -> bool {
        !matches!(self, SynthError::DegenerateSignal { .. })
    }

    /// Returns a stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidSampleRate { .. } => "SYNTH_001",
            SynthError::InvalidDuration { .. } => "SYNTH_002",
            SynthError::InvalidParameter { .. } => "SYNTH_003",
            SynthError::DegenerateSignal { .. } => "SYNTH_004",
            SynthError::Spec(_) => "SYNTH_005",
        }
    }
}
