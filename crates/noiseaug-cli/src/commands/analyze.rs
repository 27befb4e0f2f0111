//! Analyze command implementation
//!
//! Prints level and spectral statistics of a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use noiseaug_synth::analyze;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use crate::audio_io::load_wav;

use super::json_output::{print_json, AnalyzeResult, JsonError, JsonOutput};

/// Run the analyze command
///
/// # Arguments
/// * `input_path` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return match execute(input_path) {
            Ok(result) => {
                print_json(&JsonOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_json(&JsonOutput::<AnalyzeResult>::failure(vec![
                    JsonError::from_anyhow(&e),
                ]))?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Analyzing:".cyan().bold(), input_path);
    let result = execute(input_path)?;

    println!("{} {}", "Hash:".dimmed(), result.input_hash);
    println!(
        "{} {} samples at {} Hz ({:.3} s)",
        "Length:".dimmed(),
        result.num_samples,
        result.sample_rate,
        result.duration_seconds
    );
    println!("{} {:.6}", "Peak:".dimmed(), result.peak);
    println!("{} {:.6}", "RMS:".dimmed(), result.rms);
    println!("{} {:.6}", "Mean:".dimmed(), result.mean);
    println!("{} {:.6}", "Std dev:".dimmed(), result.std_dev);
    println!(
        "{} {:.1} Hz",
        "Spectral centroid:".dimmed(),
        result.spectral_centroid_hz
    );

    Ok(ExitCode::SUCCESS)
}

fn execute(input_path: &str) -> Result<AnalyzeResult> {
    let path = Path::new(input_path);
    let data = fs::read(path).with_context(|| format!("Failed to read file: {}", input_path))?;
    let input_hash = blake3::hash(&data).to_hex().to_string();

    let signal = load_wav(path)?;
    let stats = analyze(&signal);

    Ok(AnalyzeResult {
        input: input_path.to_string(),
        input_hash,
        sample_rate: stats.sample_rate,
        num_samples: stats.num_samples,
        duration_seconds: signal.duration_seconds(),
        peak: stats.peak,
        rms: stats.rms,
        mean: stats.mean,
        std_dev: stats.std_dev,
        spectral_centroid_hz: stats.spectral_centroid_hz,
    })
}
