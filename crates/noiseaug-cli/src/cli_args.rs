use clap::{Parser, Subcommand};
use noiseaug_cli::commands::split::{DEFAULT_SEGMENT_SECONDS, DEFAULT_TRIM_SECONDS};
use noiseaug_cli::noise_args::{parse_noise_kind, NoiseArgs, NoiseParamArgs};
use noiseaug_spec::NoiseKind;

/// noiseaug - Noise augmentation for audio datasets
#[derive(Parser)]
#[command(name = "noiseaug")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add synthetic noise to a WAV recording
    AddNoise {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        noise: NoiseArgs,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Required sample rate of the input in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Write 16-bit PCM instead of 32-bit float
        #[arg(long)]
        pcm16: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one noise kind to a WAV file
    Generate {
        /// Noise kind (white, pink, formant)
        #[arg(short, long, value_parser = parse_noise_kind)]
        kind: NoiseKind,

        /// Output WAV file
        #[arg(short, long)]
        output: String,

        /// Duration in seconds
        #[arg(short, long)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 22050)]
        sample_rate: u32,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u32,

        #[command(flatten)]
        params: NoiseParamArgs,

        /// Write 16-bit PCM instead of 32-bit float
        #[arg(long)]
        pcm16: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Cut a recording into fixed-length segments
    Split {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Directory for the segment files
        #[arg(long)]
        output_dir: String,

        /// Segment length in seconds
        #[arg(long, default_value_t = DEFAULT_SEGMENT_SECONDS)]
        segment_seconds: f64,

        /// Seconds dropped from each end before splitting
        #[arg(long, default_value_t = DEFAULT_TRIM_SECONDS)]
        trim_seconds: f64,

        /// Write 16-bit PCM instead of 32-bit float
        #[arg(long)]
        pcm16: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print level and spectral statistics of a WAV file
    Analyze {
        /// Input WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}
