//! Mono audio signal type.

use crate::error::{SynthError, SynthResult};

/// A mono waveform: samples at a fixed, positive sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Wraps samples recorded at `sample_rate` Hz.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> SynthResult<Self> {
        if sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Creates `num_samples` samples of silence.
    pub fn silence(num_samples: usize, sample_rate: u32) -> SynthResult<Self> {
        Self::new(vec![0.0; num_samples], sample_rate)
    }

    /// Borrows the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the signal, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Returns a new signal with `noise` added sample-wise.
    ///
    /// Fails if `noise` does not have exactly as many samples as the signal.
    pub fn mixed_with(&self, noise: &[f64]) -> SynthResult<Self> {
        if noise.len() != self.samples.len() {
            return Err(SynthError::invalid_param(
                "noise",
                format!(
                    "length {} does not match signal length {}",
                    noise.len(),
                    self.samples.len()
                ),
            ));
        }
        let mut samples = self.samples.clone();
        add_in_place(&mut samples, noise);
        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }
}

/// Adds `noise` into `target` sample-wise. Both slices must have the same length.
pub(crate) fn add_in_place(target: &mut [f64], noise: &[f64]) {
    debug_assert_eq!(target.len(), noise.len());
    for (t, n) in target.iter_mut().zip(noise) {
        *t += n;
    }
}
