//! Noise generators.
//!
//! All generators return raw sample buffers and take their randomness from
//! the caller-supplied `rng`, so a fixed seed gives a fixed result.

pub mod convolve;
pub mod formant;
pub mod pink;
pub mod white;

pub use formant::{generate_formant_like_noise, generate_formant_noise_from_params};
pub use pink::{generate_pink_noise, generate_pink_noise_with_filter, PINK_A, PINK_B};
pub use white::generate_white_noise;

use noiseaug_spec::{NoiseKind, NoiseSpec};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{SynthError, SynthResult};

/// Largest buffer a single generator call will produce.
pub const MAX_SAMPLES: usize = u32::MAX as usize;

/// Number of samples covering `duration_seconds`, rounded down.
///
/// # Errors
/// `InvalidParameter` when the count is zero or above [`MAX_SAMPLES`].
pub fn sample_count(duration_seconds: f64, sample_rate: u32) -> SynthResult<usize> {
    if sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate { rate: sample_rate });
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(SynthError::InvalidDuration {
            duration: duration_seconds,
        });
    }

    let exact = (duration_seconds * sample_rate as f64).floor();
    if exact > MAX_SAMPLES as f64 {
        return Err(SynthError::invalid_param(
            "duration",
            format!(
                "{} s at {} Hz exceeds the limit of {} samples",
                duration_seconds, sample_rate, MAX_SAMPLES
            ),
        ));
    }

    let num_samples = exact as usize;
    if num_samples == 0 {
        return Err(SynthError::invalid_param(
            "duration",
            format!(
                "{} s is shorter than one sample at {} Hz",
                duration_seconds, sample_rate
            ),
        ));
    }
    Ok(num_samples)
}

/// Draws `n` independent standard-normal samples.
pub(crate) fn gaussian_samples<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let x: f64 = StandardNormal.sample(rng);
            x
        })
        .collect()
}

/// Renders one noise kind as exactly `num_samples` samples.
///
/// Parameters come from the matching field of `spec`; a kind the spec does
/// not enable is rendered with its default parameters.
pub fn generate_noise<R: Rng + ?Sized>(
    kind: NoiseKind,
    spec: &NoiseSpec,
    num_samples: usize,
    sample_rate: u32,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    if sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate { rate: sample_rate });
    }
    if num_samples == 0 {
        return Err(SynthError::invalid_param(
            "num_samples",
            "must be at least 1 sample",
        ));
    }
    if num_samples > MAX_SAMPLES {
        return Err(SynthError::invalid_param(
            "num_samples",
            format!("{} exceeds the limit of {}", num_samples, MAX_SAMPLES),
        ));
    }

    match kind {
        NoiseKind::White => {
            let params = spec.white.unwrap_or_default();
            generate_white_noise(num_samples, params.level, rng)
        }
        NoiseKind::Pink => {
            let params = spec.pink.unwrap_or_default();
            Ok(pink::pink_noise_samples(num_samples, params.filter, rng))
        }
        NoiseKind::Formant => {
            let params = spec.formant.clone().unwrap_or_default();
            let duration = num_samples as f64 / sample_rate as f64;
            formant::formant_noise_samples(
                num_samples,
                sample_rate,
                duration,
                params.num_formants,
                &params.resolved_center_freqs(),
                &params.resolved_bandwidths(),
                rng,
            )
        }
    }
}
