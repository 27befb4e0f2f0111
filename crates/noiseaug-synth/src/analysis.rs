//! Signal statistics for checking generated noise.
//!
//! The spectral centroid is averaged over consecutive Hann-windowed frames
//! so that long noise signals give a stable estimate.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;

use crate::signal::AudioSignal;

/// Frame length for spectral estimates.
pub const FRAME_SIZE: usize = 4096;

/// Signals shorter than this report a centroid of zero.
const MIN_SPECTRAL_SAMPLES: usize = 64;

/// Summary statistics of a signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    /// Number of samples.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Largest absolute sample value.
    pub peak: f64,
    /// Root mean square.
    pub rms: f64,
    /// Mean (DC offset).
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Magnitude-weighted mean frequency in Hz.
    pub spectral_centroid_hz: f64,
}

/// Computes [`SignalStats`] for a signal.
pub fn analyze(signal: &AudioSignal) -> SignalStats {
    let samples = signal.samples();
    let mean = mean(samples);
    SignalStats {
        num_samples: samples.len(),
        sample_rate: signal.sample_rate(),
        peak: peak(samples),
        rms: rms(samples),
        mean,
        std_dev: std_dev(samples, mean),
        spectral_centroid_hz: spectral_centroid(samples, signal.sample_rate()),
    }
}

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0, f64::max)
}

/// Root mean square.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_of_squares: f64 = samples.iter().map(|s| s * s).sum();
    (sum_of_squares / samples.len() as f64).sqrt()
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    var.sqrt()
}

/// Spectral centroid in Hz, accumulated over frames of [`FRAME_SIZE`].
///
/// A signal shorter than one frame is zero-padded to the next power of two.
pub fn spectral_centroid(samples: &[f64], sample_rate: u32) -> f64 {
    if samples.len() < MIN_SPECTRAL_SAMPLES || sample_rate == 0 {
        return 0.0;
    }

    let fft_size = if samples.len() >= FRAME_SIZE {
        FRAME_SIZE
    } else {
        samples.len().next_power_of_two()
    };
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);

    let window: Vec<f64> = (0..fft_size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / fft_size as f64).cos()))
        .collect();

    let nyquist = fft_size / 2;
    let freq_resolution = sample_rate as f64 / fft_size as f64;

    let mut weighted_sum = 0.0;
    let mut magnitude_sum = 0.0;
    let mut buffer = vec![Complex::new(0.0, 0.0); fft_size];

    for frame in samples.chunks(fft_size) {
        if frame.len() < fft_size && samples.len() >= fft_size {
            // Trailing partial frame of a long signal.
            break;
        }

        for (i, slot) in buffer.iter_mut().enumerate() {
            let s = frame.get(i).copied().unwrap_or(0.0);
            *slot = Complex::new(s * window[i], 0.0);
        }

        fft.process(&mut buffer);

        for (i, c) in buffer.iter().take(nyquist).enumerate() {
            let magnitude = c.norm();
            weighted_sum += i as f64 * freq_resolution * magnitude;
            magnitude_sum += magnitude;
        }
    }

    if magnitude_sum > 0.0 {
        weighted_sum / magnitude_sum
    } else {
        0.0
    }
}
