//! JSON output types for machine-readable CLI output.
//!
//! Every command that takes `--json` prints one [`JsonOutput`] document on
//! stdout, successful or not.

use noiseaug_spec::SpecError;
use noiseaug_synth::SynthError;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Library errors keep their own codes (`SPEC_00x`, `SYNTH_00x`); anything
/// else is reported with one of these.
pub mod error_codes {
    /// File could not be read or written
    pub const IO: &str = "CLI_001";
    /// Any other failure
    pub const GENERAL: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code
    pub code: String,
    /// Human-readable error message, including context
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Converts an error chain, picking the most specific code it carries.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let code = err
            .chain()
            .find_map(|cause| {
                if let Some(e) = cause.downcast_ref::<SynthError>() {
                    Some(e.code())
                } else if let Some(e) = cause.downcast_ref::<SpecError>() {
                    Some(e.code())
                } else if cause.downcast_ref::<std::io::Error>().is_some()
                    || cause.downcast_ref::<hound::Error>().is_some()
                {
                    Some(error_codes::IO)
                } else {
                    None
                }
            })
            .unwrap_or(error_codes::GENERAL);

        Self::new(code, format!("{:#}", err))
    }
}

/// Envelope for a command's JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> JsonOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Result of `add-noise`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNoiseResult {
    pub input: String,
    pub output: String,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub seed: u32,
    /// Noise kinds added, in order
    pub kinds: Vec<String>,
    /// BLAKE3 hash of the canonical noise spec
    pub spec_hash: String,
    pub input_rms: f64,
    pub output_rms: f64,
}

/// Result of `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    pub kind: String,
    pub output: String,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub seed: u32,
    pub peak: f64,
    pub rms: f64,
}

/// One file written by `split`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentFile {
    pub path: String,
    pub num_samples: usize,
    pub duration_seconds: f64,
}

/// Result of `split`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    pub input: String,
    pub output_dir: String,
    pub sample_rate: u32,
    pub segments: Vec<SegmentFile>,
}

/// Result of `analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub input: String,
    /// BLAKE3 hash of the input file
    pub input_hash: String,
    pub sample_rate: u32,
    pub num_samples: usize,
    pub duration_seconds: f64,
    pub peak: f64,
    pub rms: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub spectral_centroid_hz: f64,
}

/// Prints `output` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(output: &JsonOutput<T>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}
