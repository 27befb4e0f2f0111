//! Add-noise command implementation
//!
//! Mixes synthetic noise into a WAV recording and writes the result.

use anyhow::{Context, Result};
use colored::Colorize;
use noiseaug_spec::canonical_spec_hash;
use noiseaug_synth::analysis::rms;
use noiseaug_synth::compose_noise_seeded;
use std::path::Path;
use std::process::ExitCode;

use crate::audio_io::{load_wav_at_rate, write_wav, WavEncoding};
use crate::noise_args::NoiseArgs;

use super::json_output::{print_json, AddNoiseResult, JsonError, JsonOutput};

/// Options for one `add-noise` run.
#[derive(Debug, Clone)]
pub struct AddNoiseOptions<'a> {
    pub input: &'a str,
    pub output: &'a str,
    pub noise: &'a NoiseArgs,
    pub seed: u32,
    /// Sample rate the input is required to have
    pub sample_rate: Option<u32>,
    pub encoding: WavEncoding,
}

/// Run the add-noise command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &AddNoiseOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return match execute(options) {
            Ok(result) => {
                print_json(&JsonOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_json(&JsonOutput::<AddNoiseResult>::failure(vec![
                    JsonError::from_anyhow(&e),
                ]))?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!("{} {}", "Adding noise:".cyan().bold(), options.input);
    let result = execute(options)?;

    if result.kinds.is_empty() {
        println!(
            "{} no noise kinds enabled, input copied unchanged",
            "WARNING".yellow().bold()
        );
    } else {
        println!("{} {}", "Kinds:".dimmed(), result.kinds.join(", "));
    }
    println!("{} {}", "Seed:".dimmed(), result.seed);
    println!("{} {}", "Spec hash:".dimmed(), result.spec_hash);
    println!(
        "{} {} samples at {} Hz",
        "Length:".dimmed(),
        result.num_samples,
        result.sample_rate
    );
    println!(
        "{} {:.4} -> {:.4}",
        "RMS:".dimmed(),
        result.input_rms,
        result.output_rms
    );
    println!("{} Wrote {}", "SUCCESS".green().bold(), result.output);

    Ok(ExitCode::SUCCESS)
}

fn execute(options: &AddNoiseOptions<'_>) -> Result<AddNoiseResult> {
    let spec = options.noise.to_noise_spec()?;
    let spec_hash = canonical_spec_hash(&spec)?;

    let signal = load_wav_at_rate(Path::new(options.input), options.sample_rate)?;
    let noisy = compose_noise_seeded(&signal, &spec, options.seed)
        .with_context(|| format!("Failed to add noise to '{}'", options.input))?;

    write_wav(Path::new(options.output), &noisy, options.encoding)?;

    Ok(AddNoiseResult {
        input: options.input.to_string(),
        output: options.output.to_string(),
        sample_rate: noisy.sample_rate(),
        num_samples: noisy.len(),
        seed: options.seed,
        kinds: spec
            .enabled_kinds()
            .iter()
            .map(|kind| kind.as_str().to_string())
            .collect(),
        spec_hash,
        input_rms: rms(signal.samples()),
        output_rms: rms(noisy.samples()),
    })
}
