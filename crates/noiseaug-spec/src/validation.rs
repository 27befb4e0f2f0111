//! Noise spec validation.
//!
//! Checks that every enabled noise kind carries parameters the synthesizer
//! can use. An empty spec is valid and composes to an unchanged copy of the
//! input signal.

use crate::error::SpecError;
use crate::noise::{FormantNoiseParams, NoiseSpec, WhiteNoiseParams};

impl NoiseSpec {
    /// Validates all enabled noise kinds.
    pub fn validate(&self) -> Result<(), SpecError> {
        validate_noise_spec(self)
    }
}

/// Validates a noise spec.
pub fn validate_noise_spec(spec: &NoiseSpec) -> Result<(), SpecError> {
    if let Some(white) = &spec.white {
        validate_white(white)?;
    }
    if let Some(formant) = &spec.formant {
        validate_formant(formant)?;
    }
    Ok(())
}

/// Validates white noise parameters.
pub fn validate_white(params: &WhiteNoiseParams) -> Result<(), SpecError> {
    if !params.level.is_finite() {
        return Err(SpecError::validation(
            "white.level",
            format!("must be finite, got {}", params.level),
        ));
    }
    Ok(())
}

/// Validates formant noise parameters.
///
/// An explicitly empty pair of lists passes here; the synthesizer reports
/// it as a degenerate signal when asked to render it.
pub fn validate_formant(params: &FormantNoiseParams) -> Result<(), SpecError> {
    if params.num_formants == 0 {
        return Err(SpecError::validation("formant.num_formants", "must be >= 1"));
    }

    let freqs = params.resolved_center_freqs();
    let bandwidths = params.resolved_bandwidths();

    if freqs.len() != bandwidths.len() {
        return Err(SpecError::validation(
            "formant.bandwidths",
            format!(
                "length {} does not match center_freqs length {}",
                bandwidths.len(),
                freqs.len()
            ),
        ));
    }

    for (i, freq) in freqs.iter().enumerate() {
        if !freq.is_finite() {
            return Err(SpecError::validation(
                format!("formant.center_freqs[{}]", i),
                format!("must be a finite frequency, got {}", freq),
            ));
        }
    }

    for (i, bw) in bandwidths.iter().enumerate() {
        if !bw.is_finite() || *bw <= 0.0 {
            return Err(SpecError::validation(
                format!("formant.bandwidths[{}]", i),
                format!("must be a positive bandwidth, got {}", bw),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_is_valid() {
        assert!(NoiseSpec::new().validate().is_ok());
    }

    #[test]
    fn test_default_formant_is_valid() {
        let spec = NoiseSpec::new().with_formant(FormantNoiseParams::default());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_non_finite_white_level() {
        let spec = NoiseSpec::new().with_white(f64::NAN);
        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("white.level"));
    }

    #[test]
    fn test_mismatched_formant_lengths() {
        let params = FormantNoiseParams::new(vec![500.0, 1500.0], vec![80.0]);
        let err = validate_formant(&params).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn test_mismatch_against_defaults() {
        // Only frequencies given: bandwidths fall back to three defaults.
        let params = FormantNoiseParams {
            center_freqs: Some(vec![500.0]),
            ..FormantNoiseParams::default()
        };
        assert!(validate_formant(&params).is_err());
    }

    #[test]
    fn test_invalid_entries() {
        let params = FormantNoiseParams::new(vec![500.0, f64::INFINITY], vec![80.0, 80.0]);
        let err = validate_formant(&params).unwrap_err();
        assert!(err.to_string().contains("center_freqs[1]"));

        let params = FormantNoiseParams::new(vec![-500.0, 0.0], vec![80.0, 80.0]);
        assert!(validate_formant(&params).is_ok());

        let params = FormantNoiseParams::new(vec![500.0], vec![0.0]);
        let err = validate_formant(&params).unwrap_err();
        assert!(err.to_string().contains("bandwidths[0]"));
    }

    #[test]
    fn test_empty_lists_from_constructor_validate() {
        let params = FormantNoiseParams::new(vec![], vec![]);
        assert_eq!(params.num_formants, 1);
        assert!(validate_formant(&params).is_ok());
    }

    #[test]
    fn test_zero_num_formants() {
        let params = FormantNoiseParams {
            num_formants: 0,
            ..FormantNoiseParams::default()
        };
        assert!(validate_formant(&params).is_err());
    }

    #[test]
    fn test_empty_lists_pass_validation() {
        let params = FormantNoiseParams {
            num_formants: 1,
            center_freqs: Some(vec![]),
            bandwidths: Some(vec![]),
        };
        assert!(validate_formant(&params).is_ok());
    }
}
