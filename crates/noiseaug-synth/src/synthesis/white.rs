//! White noise.

use rand::Rng;

use super::{gaussian_samples, MAX_SAMPLES};
use crate::error::{SynthError, SynthResult};

/// Generates `length` independent standard-normal samples scaled by `level`.
///
/// # Errors
/// `InvalidParameter` when `length` is zero or above [`MAX_SAMPLES`], or
/// when `level` is not finite.
pub fn generate_white_noise<R: Rng + ?Sized>(
    length: usize,
    level: f64,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    if length == 0 {
        return Err(SynthError::invalid_param("length", "must be at least 1 sample"));
    }
    if length > MAX_SAMPLES {
        return Err(SynthError::invalid_param(
            "length",
            format!("{} exceeds the limit of {}", length, MAX_SAMPLES),
        ));
    }
    if !level.is_finite() {
        return Err(SynthError::invalid_param(
            "level",
            format!("must be finite, got {}", level),
        ));
    }

    tracing::debug!(length, level, "generating white noise");

    let mut samples = gaussian_samples(rng, length);
    for s in samples.iter_mut() {
        *s *= level;
    }
    Ok(samples)
}
