//! Cutting long recordings into fixed-length segments.

use crate::error::{SynthError, SynthResult};
use crate::signal::AudioSignal;

/// Splits `signal` into consecutive segments of `segment_seconds`.
///
/// `trim_seconds` worth of samples is first dropped from both the start and
/// the end of the recording. The final segment keeps whatever is left and
/// may be shorter than the others.
///
/// # Errors
/// `InvalidParameter` when the segment length rounds down to zero samples,
/// when `trim_seconds` is negative or not finite, or when trimming leaves
/// nothing of the recording.
pub fn split_segments(
    signal: &AudioSignal,
    segment_seconds: f64,
    trim_seconds: f64,
) -> SynthResult<Vec<AudioSignal>> {
    let rate = signal.sample_rate() as f64;

    if !segment_seconds.is_finite() || segment_seconds <= 0.0 {
        return Err(SynthError::invalid_param(
            "segment_seconds",
            format!("must be positive, got {}", segment_seconds),
        ));
    }
    if !trim_seconds.is_finite() || trim_seconds < 0.0 {
        return Err(SynthError::invalid_param(
            "trim_seconds",
            format!("must be zero or positive, got {}", trim_seconds),
        ));
    }

    let segment_samples = (segment_seconds * rate).floor() as usize;
    if segment_samples == 0 {
        return Err(SynthError::invalid_param(
            "segment_seconds",
            "shorter than one sample",
        ));
    }

    let trim_samples = (trim_seconds * rate).floor() as usize;
    let len = signal.len();
    if trim_samples.saturating_mul(2) >= len {
        return Err(SynthError::invalid_param(
            "trim_seconds",
            format!(
                "trimming {} samples from each end leaves nothing of a {} sample recording",
                trim_samples, len
            ),
        ));
    }

    let kept = &signal.samples()[trim_samples..len - trim_samples];
    let segments = kept
        .chunks(segment_samples)
        .map(|chunk| AudioSignal::new(chunk.to_vec(), signal.sample_rate()))
        .collect::<SynthResult<Vec<_>>>()?;

    tracing::debug!(
        input_samples = len,
        trim_samples,
        segment_samples,
        segments = segments.len(),
        "split recording"
    );

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, rate: u32) -> AudioSignal {
        AudioSignal::new((0..len).map(|i| i as f64).collect(), rate).unwrap()
    }

    #[test]
    fn test_even_split_without_trim() {
        let segments = split_segments(&ramp(100, 10), 2.0, 0.0).unwrap();
        assert_eq!(segments.len(), 5);
        assert!(segments.iter().all(|s| s.len() == 20));
        assert_eq!(segments[1].samples()[0], 20.0);
    }

    #[test]
    fn test_last_segment_is_partial() {
        let segments = split_segments(&ramp(105, 10), 2.0, 0.0).unwrap();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[5].len(), 5);
    }

    #[test]
    fn test_trim_both_ends() {
        let segments = split_segments(&ramp(100, 10), 3.0, 1.0).unwrap();
        // 80 samples remain: 30 + 30 + 20.
        let lens: Vec<usize> = segments.iter().map(|s| s.len()).collect();
        assert_eq!(lens, vec![30, 30, 20]);
        assert_eq!(segments[0].samples()[0], 10.0);
        assert_eq!(*segments[2].samples().last().unwrap(), 89.0);
    }

    #[test]
    fn test_sample_rate_carried() {
        let segments = split_segments(&ramp(50, 25), 1.0, 0.0).unwrap();
        assert!(segments.iter().all(|s| s.sample_rate() == 25));
    }

    #[test]
    fn test_trim_consumes_recording() {
        let err = split_segments(&ramp(100, 10), 1.0, 5.0).unwrap_err();
        assert!(err.to_string().contains("leaves nothing"));
    }

    #[test]
    fn test_bad_lengths() {
        assert!(split_segments(&ramp(100, 10), 0.0, 0.0).is_err());
        assert!(split_segments(&ramp(100, 10), 0.05, 0.0).is_err());
        assert!(split_segments(&ramp(100, 10), 1.0, -1.0).is_err());
    }
}
