//! noiseaug CLI
//!
//! Command-line tool for augmenting audio datasets with synthetic noise.
//!
//! ## Commands
//!
//! - `add-noise` - Mix white, pink, and formant-like noise into a WAV file
//! - `generate` - Render a single noise kind to a WAV file
//! - `split` - Cut a long recording into fixed-length segments
//! - `analyze` - Print level and spectral statistics of a WAV file

mod cli_args;

use clap::Parser;
use cli_args::{Cli, Commands};
use noiseaug_cli::audio_io::WavEncoding;
use noiseaug_cli::commands::{add_noise, analyze, generate, split};
use noiseaug_cli::logging;
use std::process::ExitCode;

fn encoding(pcm16: bool) -> WavEncoding {
    if pcm16 {
        WavEncoding::Pcm16
    } else {
        WavEncoding::Float32
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::AddNoise {
            input,
            output,
            noise,
            seed,
            sample_rate,
            pcm16,
            json,
        } => add_noise::run(
            &add_noise::AddNoiseOptions {
                input: &input,
                output: &output,
                noise: &noise,
                seed,
                sample_rate,
                encoding: encoding(pcm16),
            },
            json,
        ),
        Commands::Generate {
            kind,
            output,
            duration,
            sample_rate,
            seed,
            params,
            pcm16,
            json,
        } => generate::run(
            &generate::GenerateOptions {
                kind,
                output: &output,
                duration_seconds: duration,
                sample_rate,
                seed,
                params: &params,
                encoding: encoding(pcm16),
            },
            json,
        ),
        Commands::Split {
            input,
            output_dir,
            segment_seconds,
            trim_seconds,
            pcm16,
            json,
        } => split::run(
            &split::SplitOptions {
                input: &input,
                output_dir: &output_dir,
                segment_seconds,
                trim_seconds,
                encoding: encoding(pcm16),
            },
            json,
        ),
        Commands::Analyze { input, json } => analyze::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
