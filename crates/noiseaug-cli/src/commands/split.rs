//! Split command implementation
//!
//! Cuts a long recording into fixed-length WAV segments after trimming
//! both ends.

use anyhow::{Context, Result};
use colored::Colorize;
use noiseaug_synth::split_segments;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::audio_io::{load_wav, write_wav, WavEncoding};

use super::json_output::{print_json, JsonError, JsonOutput, SegmentFile, SplitResult};

/// Default segment length in seconds.
pub const DEFAULT_SEGMENT_SECONDS: f64 = 10.0;

/// Default amount trimmed from each end, in seconds.
pub const DEFAULT_TRIM_SECONDS: f64 = 60.0;

/// Options for one `split` run.
#[derive(Debug, Clone)]
pub struct SplitOptions<'a> {
    pub input: &'a str,
    pub output_dir: &'a str,
    pub segment_seconds: f64,
    pub trim_seconds: f64,
    pub encoding: WavEncoding,
}

/// Path of the `index`-th segment (1-based) of `input`.
pub fn segment_path(output_dir: &Path, input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "segment".to_string());
    output_dir.join(format!("{}_segment_{}.wav", stem, index))
}

/// Run the split command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &SplitOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return match execute(options) {
            Ok(result) => {
                print_json(&JsonOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_json(&JsonOutput::<SplitResult>::failure(vec![
                    JsonError::from_anyhow(&e),
                ]))?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Splitting:".cyan().bold(), options.input);
    let result = execute(options)?;

    for segment in &result.segments {
        println!(
            "  {} {} ({:.2} s)",
            "->".dimmed(),
            segment.path,
            segment.duration_seconds
        );
    }
    println!(
        "{} Wrote {} segments to {}",
        "SUCCESS".green().bold(),
        result.segments.len(),
        result.output_dir
    );

    Ok(ExitCode::SUCCESS)
}

fn execute(options: &SplitOptions<'_>) -> Result<SplitResult> {
    let input = Path::new(options.input);
    let output_dir = Path::new(options.output_dir);

    let signal = load_wav(input)?;
    let segments = split_segments(&signal, options.segment_seconds, options.trim_seconds)
        .with_context(|| format!("Failed to split '{}'", options.input))?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut files = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let path = segment_path(output_dir, input, i + 1);
        write_wav(&path, segment, options.encoding)?;
        files.push(SegmentFile {
            path: path.display().to_string(),
            num_samples: segment.len(),
            duration_seconds: segment.duration_seconds(),
        });
    }

    Ok(SplitResult {
        input: options.input.to_string(),
        output_dir: options.output_dir.to_string(),
        sample_rate: signal.sample_rate(),
        segments: files,
    })
}
