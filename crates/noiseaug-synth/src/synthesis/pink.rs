//! Pink noise.
//!
//! Gaussian noise shaped by a fixed third-order filter. The coefficients are
//! applied in one of two ways (see [`PinkFilter`]):
//!
//! - `Convolution` convolves the noise with `b`, then convolves the result
//!   with `a`, and keeps the first `num_samples` values. This is a
//!   sixth-order FIR with transfer function `B(z)·A(z)` and is the default.
//!   Its spectrum rises with frequency rather than falling.
//! - `Recursive` runs the textbook IIR `B(z)/A(z)`, whose response falls at
//!   roughly 3 dB per octave.

use noiseaug_spec::PinkFilter;
use rand::Rng;

use super::convolve::{convolve_full, lfilter};
use super::{gaussian_samples, sample_count};
use crate::error::SynthResult;

/// Feed-forward coefficients.
pub const PINK_B: [f64; 4] = [0.049922035, -0.095993537, 0.050612699, -0.004408786];

/// Feedback coefficients.
pub const PINK_A: [f64; 4] = [1.0, -2.494956002, 2.017265875, -0.522189400];

/// Generates `floor(duration_seconds × sample_rate)` samples of pink noise
/// using the default two-convolution filter.
pub fn generate_pink_noise<R: Rng + ?Sized>(
    duration_seconds: f64,
    sample_rate: u32,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    generate_pink_noise_with_filter(duration_seconds, sample_rate, PinkFilter::default(), rng)
}

/// Generates pink noise with an explicit filter mode.
pub fn generate_pink_noise_with_filter<R: Rng + ?Sized>(
    duration_seconds: f64,
    sample_rate: u32,
    filter: PinkFilter,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    let num_samples = sample_count(duration_seconds, sample_rate)?;
    Ok(pink_noise_samples(num_samples, filter, rng))
}

/// Generates exactly `num_samples` samples of pink noise.
pub(crate) fn pink_noise_samples<R: Rng + ?Sized>(
    num_samples: usize,
    filter: PinkFilter,
    rng: &mut R,
) -> Vec<f64> {
    tracing::debug!(num_samples, filter = filter.as_str(), "generating pink noise");

    let white = gaussian_samples(rng, num_samples);
    match filter {
        PinkFilter::Convolution => {
            let mut shaped = convolve_full(&convolve_full(&white, &PINK_B), &PINK_A);
            shaped.truncate(num_samples);
            shaped
        }
        PinkFilter::Recursive => lfilter(&PINK_B, &PINK_A, &white),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use crate::rng::create_rng;

    #[test]
    fn test_length_is_truncated() {
        let mut rng = create_rng(42);
        let samples = generate_pink_noise(1.0, 22050, &mut rng).unwrap();
        assert_eq!(samples.len(), 22050);
    }

    #[test]
    fn test_length_floors_fractional_count() {
        let mut rng = create_rng(42);
        // 0.0123 s at 44.1 kHz is 542.43 samples.
        let samples = generate_pink_noise(0.0123, 44100, &mut rng).unwrap();
        assert_eq!(samples.len(), 542);
    }

    #[test]
    fn test_recursive_length() {
        let mut rng = create_rng(42);
        let samples =
            generate_pink_noise_with_filter(0.5, 16000, PinkFilter::Recursive, &mut rng).unwrap();
        assert_eq!(samples.len(), 8000);
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_convolution_matches_combined_fir() {
        // Convolving with b then a equals one FIR pass with b*a.
        let combined = convolve_full(&PINK_B, &PINK_A);
        let mut rng = create_rng(9);
        let shaped = pink_noise_samples(64, PinkFilter::Convolution, &mut rng);
        let white = gaussian_samples(&mut create_rng(9), 64);
        let expected = lfilter(&combined, &[1.0], &white);

        for (a, b) in shaped.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let mut rng = create_rng(42);
        assert!(matches!(
            generate_pink_noise(0.0, 22050, &mut rng),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert!(matches!(
            generate_pink_noise(1.0, 0, &mut rng),
            Err(SynthError::InvalidSampleRate { .. })
        ));
        assert!(generate_pink_noise(-1.0, 22050, &mut rng).is_err());
    }

    #[test]
    fn test_determinism() {
        let a = generate_pink_noise(0.1, 22050, &mut create_rng(42)).unwrap();
        let b = generate_pink_noise(0.1, 22050, &mut create_rng(42)).unwrap();
        assert_eq!(a, b);
    }
}
