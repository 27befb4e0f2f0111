//! Generate command implementation
//!
//! Renders one noise kind on its own and writes it as a WAV file. The RNG
//! stream for a kind matches the one `add-noise` uses for the same seed, so
//! the output equals what `add-noise` would add to a silent recording.

use anyhow::{Context, Result};
use colored::Colorize;
use noiseaug_spec::NoiseKind;
use noiseaug_synth::analysis::{peak, rms};
use noiseaug_synth::rng::create_component_rng;
use noiseaug_synth::synthesis::sample_count;
use noiseaug_synth::{generate_noise, AudioSignal};
use std::path::Path;
use std::process::ExitCode;

use crate::audio_io::{write_wav, WavEncoding};
use crate::noise_args::NoiseParamArgs;

use super::json_output::{print_json, GenerateResult, JsonError, JsonOutput};

/// Options for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    pub kind: NoiseKind,
    pub output: &'a str,
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub seed: u32,
    pub params: &'a NoiseParamArgs,
    pub encoding: WavEncoding,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &GenerateOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return match execute(options) {
            Ok(result) => {
                print_json(&JsonOutput::success(result))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_json(&JsonOutput::<GenerateResult>::failure(vec![
                    JsonError::from_anyhow(&e),
                ]))?;
                Ok(ExitCode::from(1))
            }
        };
    }

    println!(
        "{} {} noise, {} s at {} Hz",
        "Generating:".cyan().bold(),
        options.kind,
        options.duration_seconds,
        options.sample_rate
    );
    let result = execute(options)?;

    println!("{} {}", "Samples:".dimmed(), result.num_samples);
    println!(
        "{} peak {:.4}, rms {:.4}",
        "Level:".dimmed(),
        result.peak,
        result.rms
    );
    println!("{} Wrote {}", "SUCCESS".green().bold(), result.output);

    Ok(ExitCode::SUCCESS)
}

fn execute(options: &GenerateOptions<'_>) -> Result<GenerateResult> {
    let kind = options.kind;
    let spec = options.params.spec_for(&[kind]);
    spec.validate()?;

    let num_samples = sample_count(options.duration_seconds, options.sample_rate)?;
    let mut rng = create_component_rng(options.seed, kind.as_str());
    let samples = generate_noise(kind, &spec, num_samples, options.sample_rate, &mut rng)
        .with_context(|| format!("Failed to generate {} noise", kind))?;

    let signal = AudioSignal::new(samples, options.sample_rate)?;
    write_wav(Path::new(options.output), &signal, options.encoding)?;

    Ok(GenerateResult {
        kind: kind.as_str().to_string(),
        output: options.output.to_string(),
        sample_rate: signal.sample_rate(),
        num_samples: signal.len(),
        seed: options.seed,
        peak: peak(signal.samples()),
        rms: rms(signal.samples()),
    })
}
