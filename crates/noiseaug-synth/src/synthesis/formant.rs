//! Formant-like noise.
//!
//! Each formant is Gaussian noise smoothed by a rectangular moving sum whose
//! length is `floor(bandwidth × sample_rate)` samples, scaled by
//! `1 / sample_rate`, and amplitude-modulated by a sinusoid at the formant's
//! center frequency. The formants are summed and the sum is normalized to a
//! peak absolute value of exactly 1.0.

use std::f64::consts::PI;

use noiseaug_spec::{FormantNoiseParams, DEFAULT_FORMANT_BANDWIDTHS, DEFAULT_FORMANT_FREQS};
use rand::Rng;

use super::convolve::moving_sum_same;
use super::{gaussian_samples, sample_count};
use crate::error::{SynthError, SynthResult};

/// Generates formant-like noise.
///
/// Unset `center_freqs` and `bandwidths` fall back to `[500, 1500, 2500]` Hz
/// and `[80, 80, 80]` Hz. `num_formants` is recorded for logging only; the
/// number of synthesized formants is the length of the paired lists.
///
/// # Errors
/// * `InvalidParameter` for a bad duration or sample rate, lists of
///   different lengths, a frequency that is not finite, or a bandwidth
///   that is not positive (or whose window rounds down to zero samples).
///   Zero and negative frequencies are accepted.
/// * `DegenerateSignal` when there are no formant pairs, or when the summed
///   signal is all zeros and cannot be normalized.
pub fn generate_formant_like_noise<R: Rng + ?Sized>(
    duration_seconds: f64,
    sample_rate: u32,
    num_formants: u32,
    center_freqs: Option<&[f64]>,
    bandwidths: Option<&[f64]>,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    let num_samples = sample_count(duration_seconds, sample_rate)?;
    formant_noise_samples(
        num_samples,
        sample_rate,
        duration_seconds,
        num_formants,
        center_freqs.unwrap_or(&DEFAULT_FORMANT_FREQS),
        bandwidths.unwrap_or(&DEFAULT_FORMANT_BANDWIDTHS),
        rng,
    )
}

/// Generates formant-like noise from [`FormantNoiseParams`].
pub fn generate_formant_noise_from_params<R: Rng + ?Sized>(
    duration_seconds: f64,
    sample_rate: u32,
    params: &FormantNoiseParams,
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    generate_formant_like_noise(
        duration_seconds,
        sample_rate,
        params.num_formants,
        params.center_freqs.as_deref(),
        params.bandwidths.as_deref(),
        rng,
    )
}

/// Generates exactly `num_samples` samples spanning `duration_seconds`.
pub(crate) fn formant_noise_samples<R: Rng + ?Sized>(
    num_samples: usize,
    sample_rate: u32,
    duration_seconds: f64,
    num_formants: u32,
    center_freqs: &[f64],
    bandwidths: &[f64],
    rng: &mut R,
) -> SynthResult<Vec<f64>> {
    if center_freqs.len() != bandwidths.len() {
        return Err(SynthError::invalid_param(
            "bandwidths",
            format!(
                "length {} does not match center_freqs length {}",
                bandwidths.len(),
                center_freqs.len()
            ),
        ));
    }
    if center_freqs.is_empty() {
        return Err(SynthError::degenerate("empty formant specification"));
    }

    let windows = center_freqs
        .iter()
        .zip(bandwidths)
        .map(|(&freq, &bw)| smoothing_window(freq, bw, sample_rate))
        .collect::<SynthResult<Vec<usize>>>()?;

    tracing::debug!(
        num_samples,
        num_formants,
        formant_pairs = center_freqs.len(),
        "generating formant-like noise"
    );

    let step = duration_seconds / num_samples as f64;
    let rate = sample_rate as f64;
    let mut signal = vec![0.0; num_samples];

    for (&freq, &window) in center_freqs.iter().zip(&windows) {
        if window >= num_samples {
            tracing::debug!(
                freq,
                window,
                num_samples,
                "smoothing window is not shorter than the signal"
            );
        }

        let noise = gaussian_samples(rng, num_samples);
        let smoothed = moving_sum_same(&noise, window);

        for (i, (out, s)) in signal.iter_mut().zip(&smoothed).enumerate() {
            let t = i as f64 * step;
            *out += (2.0 * PI * freq * t).sin() * (s / rate);
        }
    }

    normalize_peak(&mut signal)?;
    Ok(signal)
}

/// Converts a bandwidth in Hz into a moving-sum length in samples.
fn smoothing_window(freq: f64, bandwidth: f64, sample_rate: u32) -> SynthResult<usize> {
    if !freq.is_finite() {
        return Err(SynthError::invalid_param(
            "center_freqs",
            format!("must be finite, got {}", freq),
        ));
    }
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return Err(SynthError::invalid_param(
            "bandwidths",
            format!("must be positive, got {}", bandwidth),
        ));
    }

    let window = (bandwidth * sample_rate as f64).floor() as usize;
    if window == 0 {
        return Err(SynthError::invalid_param(
            "bandwidths",
            format!(
                "{} Hz is shorter than one sample at {} Hz",
                bandwidth, sample_rate
            ),
        ));
    }
    Ok(window)
}

/// Scales `samples` so the peak absolute value is exactly 1.0.
fn normalize_peak(samples: &mut [f64]) -> SynthResult<()> {
    let max = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    if max == 0.0 || !max.is_finite() {
        return Err(SynthError::degenerate(
            "formant signal has no energy to normalize",
        ));
    }

    for s in samples.iter_mut() {
        *s /= max;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    fn peak(samples: &[f64]) -> f64 {
        samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
    }

    #[test]
    fn test_defaults_length_and_peak() {
        let mut rng = create_rng(42);
        let samples = generate_formant_like_noise(1.0, 22050, 3, None, None, &mut rng).unwrap();
        assert_eq!(samples.len(), 22050);
        assert!((peak(&samples) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_narrow_bandwidths() {
        let mut rng = create_rng(42);
        let freqs = [700.0, 1200.0];
        let bws = [0.01, 0.02];
        let samples =
            generate_formant_like_noise(0.25, 16000, 2, Some(&freqs), Some(&bws), &mut rng)
                .unwrap();
        assert_eq!(samples.len(), 4000);
        assert!((peak(&samples) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_num_formants_not_enforced() {
        let freqs = [500.0, 1500.0];
        let bws = [0.01, 0.01];
        let a = generate_formant_like_noise(0.1, 8000, 7, Some(&freqs), Some(&bws), &mut create_rng(1))
            .unwrap();
        let b = generate_formant_like_noise(0.1, 8000, 1, Some(&freqs), Some(&bws), &mut create_rng(1))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_mismatched_lengths() {
        let mut rng = create_rng(42);
        let err = generate_formant_like_noise(
            1.0,
            22050,
            3,
            Some(&[500.0, 1500.0]),
            Some(&[80.0]),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, SynthError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_specification_is_degenerate() {
        let mut rng = create_rng(42);
        let err = generate_formant_like_noise(1.0, 22050, 3, Some(&[]), Some(&[]), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SynthError::DegenerateSignal { .. }));
    }

    #[test]
    fn test_sub_sample_bandwidth_rejected() {
        let mut rng = create_rng(42);
        let err =
            generate_formant_like_noise(1.0, 8000, 1, Some(&[500.0]), Some(&[0.0001]), &mut rng)
                .unwrap_err();
        assert!(err.to_string().contains("shorter than one sample"));
    }

    #[test]
    fn test_negative_frequency_mirrors_positive() {
        let bws = [0.01];
        let pos = generate_formant_like_noise(0.1, 8000, 1, Some(&[440.0]), Some(&bws), &mut create_rng(3))
            .unwrap();
        let neg = generate_formant_like_noise(0.1, 8000, 1, Some(&[-440.0]), Some(&bws), &mut create_rng(3))
            .unwrap();
        for (p, n) in pos.iter().zip(&neg) {
            assert!((p + n).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_frequency_alone_is_degenerate() {
        let mut rng = create_rng(42);
        let err = generate_formant_like_noise(1.0, 8000, 1, Some(&[0.0]), Some(&[0.01]), &mut rng)
            .unwrap_err();
        assert!(matches!(err, SynthError::DegenerateSignal { .. }));
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let mut rng = create_rng(42);
        let err =
            generate_formant_like_noise(1.0, 8000, 1, Some(&[f64::NAN]), Some(&[0.01]), &mut rng)
                .unwrap_err();
        assert!(matches!(err, SynthError::InvalidParameter { .. }));
    }

    #[test]
    fn test_all_zero_signal_is_degenerate() {
        let mut samples = vec![0.0; 16];
        assert!(matches!(
            normalize_peak(&mut samples),
            Err(SynthError::DegenerateSignal { .. })
        ));
    }

    #[test]
    fn test_params_entry_point_uses_defaults() {
        let params = FormantNoiseParams::default();
        let a = generate_formant_noise_from_params(0.2, 22050, &params, &mut create_rng(5)).unwrap();
        let b = generate_formant_like_noise(0.2, 22050, 3, None, None, &mut create_rng(5)).unwrap();
        assert_eq!(a, b);
    }
}
