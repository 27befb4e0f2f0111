//! noiseaug Noise Synthesizer
//!
//! This crate generates synthetic noise for augmenting speech and noise
//! recordings before they are turned into classifier training data.
//!
//! # Overview
//!
//! - **White noise** - independent Gaussian samples scaled by a level
//! - **Pink noise** - Gaussian samples shaped by a fixed third-order filter
//! - **Formant-like noise** - smoothed noise modulated by sinusoids at
//!   speech formant frequencies, normalized to a peak of 1.0
//! - **Composition** - mixing any subset of the above into a signal, as
//!   configured by a [`NoiseSpec`]
//!
//! # Determinism
//!
//! No generator touches a global random source. Every function takes an
//! `rng` argument, and [`rng::create_rng`] builds a seeded PCG32 for it.
//! [`compose_noise_seeded`] goes further and gives each noise kind its own
//! stream derived from one seed via BLAKE3.
//!
//! # Example
//!
//! ```
//! use noiseaug_synth::{compose_noise, rng::create_rng, AudioSignal};
//! use noiseaug_spec::NoiseSpec;
//!
//! let speech = AudioSignal::silence(22050, 22050).unwrap();
//! let spec = NoiseSpec::new().with_white(0.3).with_pink();
//!
//! let mut rng = create_rng(42);
//! let noisy = compose_noise(&speech, &spec, &mut rng).unwrap();
//! assert_eq!(noisy.len(), speech.len());
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesis`] - White, pink, and formant-like noise generators
//! - [`compose`] - Mixing noise into a signal
//! - [`segment`] - Cutting recordings into fixed-length segments
//! - [`analysis`] - Signal statistics
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod analysis;
pub mod compose;
pub mod error;
pub mod rng;
pub mod segment;
pub mod signal;
pub mod synthesis;

// Re-export main types at crate root
pub use analysis::{analyze, SignalStats};
pub use compose::{compose_noise, compose_noise_seeded};
pub use error::{SynthError, SynthResult};
pub use noiseaug_spec::{NoiseKind, NoiseSpec};
pub use segment::split_segments;
pub use signal::AudioSignal;
pub use synthesis::{
    generate_formant_like_noise, generate_noise, generate_pink_noise,
    generate_pink_noise_with_filter, generate_white_noise,
};
