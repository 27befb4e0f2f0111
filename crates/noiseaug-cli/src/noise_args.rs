//! Command-line flags that describe noise.
//!
//! [`NoiseParamArgs`] holds per-kind parameters shared by `add-noise` and
//! `generate`. [`NoiseArgs`] adds the kind toggles and the `--spec` file
//! alternative used by `add-noise`.

use anyhow::{Context, Result};
use clap::Args;
use noiseaug_spec::{
    FormantNoiseParams, NoiseKind, NoiseSpec, PinkFilter, PinkNoiseParams, WhiteNoiseParams,
    DEFAULT_FORMANT_BANDWIDTHS, DEFAULT_FORMANT_FREQS, DEFAULT_NUM_FORMANTS, DEFAULT_WHITE_LEVEL,
};
use std::fs;

/// Parses a pink filter name.
pub fn parse_pink_filter(s: &str) -> Result<PinkFilter, String> {
    PinkFilter::by_name(s).ok_or_else(|| {
        format!(
            "unknown pink filter '{}' (expected convolution or recursive)",
            s
        )
    })
}

/// Parses a noise kind name.
pub fn parse_noise_kind(s: &str) -> Result<NoiseKind, String> {
    NoiseKind::by_name(s)
        .ok_or_else(|| format!("unknown noise kind '{}' (expected white, pink or formant)", s))
}

/// Per-kind noise parameters.
#[derive(Debug, Clone, Args)]
pub struct NoiseParamArgs {
    /// Standard deviation of white noise
    #[arg(long, default_value_t = DEFAULT_WHITE_LEVEL)]
    pub noise_level: f64,

    /// Pink noise filter (convolution or recursive)
    #[arg(long, default_value = "convolution", value_parser = parse_pink_filter)]
    pub pink_filter: PinkFilter,

    /// Number of formants (defaults to the number of frequencies given)
    #[arg(long)]
    pub num_formants: Option<u32>,

    /// Formant center frequencies in Hz, comma-separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub formant_freqs: Option<Vec<f64>>,

    /// Formant bandwidths in Hz, comma-separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub formant_bw: Option<Vec<f64>>,
}

impl Default for NoiseParamArgs {
    fn default() -> Self {
        Self {
            noise_level: DEFAULT_WHITE_LEVEL,
            pink_filter: PinkFilter::default(),
            num_formants: None,
            formant_freqs: None,
            formant_bw: None,
        }
    }
}

impl NoiseParamArgs {
    /// Formant parameters from the flags, with unset lists left to defaults.
    pub fn formant_params(&self) -> FormantNoiseParams {
        let num_formants = self.num_formants.unwrap_or_else(|| match &self.formant_freqs {
            Some(freqs) => (freqs.len() as u32).max(1),
            None => DEFAULT_NUM_FORMANTS,
        });

        // A list given on its own is paired with the default for the other.
        let (center_freqs, bandwidths) = match (&self.formant_freqs, &self.formant_bw) {
            (None, None) => (None, None),
            (freqs, bws) => (
                Some(freqs.clone().unwrap_or_else(|| DEFAULT_FORMANT_FREQS.to_vec())),
                Some(bws.clone().unwrap_or_else(|| DEFAULT_FORMANT_BANDWIDTHS.to_vec())),
            ),
        };

        FormantNoiseParams {
            num_formants,
            center_freqs,
            bandwidths,
        }
    }

    /// A spec that enables exactly `kinds` with these parameters.
    pub fn spec_for(&self, kinds: &[NoiseKind]) -> NoiseSpec {
        let mut spec = NoiseSpec::new();
        for kind in kinds {
            match kind {
                NoiseKind::White => {
                    spec.white = Some(WhiteNoiseParams {
                        level: self.noise_level,
                    })
                }
                NoiseKind::Pink => {
                    spec.pink = Some(PinkNoiseParams {
                        filter: self.pink_filter,
                    })
                }
                NoiseKind::Formant => spec.formant = Some(self.formant_params()),
            }
        }
        spec
    }
}

/// Noise selection for `add-noise`.
#[derive(Debug, Clone, Default, Args)]
pub struct NoiseArgs {
    /// Load the noise spec from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["white", "pink", "formant"])]
    pub spec: Option<String>,

    /// Add white noise
    #[arg(long)]
    pub white: bool,

    /// Add pink noise
    #[arg(long)]
    pub pink: bool,

    /// Add formant-like noise
    #[arg(long)]
    pub formant: bool,

    #[command(flatten)]
    pub params: NoiseParamArgs,
}

impl NoiseArgs {
    /// Kinds switched on by flags, in composition order.
    pub fn selected_kinds(&self) -> Vec<NoiseKind> {
        NoiseKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                NoiseKind::White => self.white,
                NoiseKind::Pink => self.pink,
                NoiseKind::Formant => self.formant,
            })
            .collect()
    }

    /// Builds and validates the noise spec.
    pub fn to_noise_spec(&self) -> Result<NoiseSpec> {
        let spec = match &self.spec {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read spec file: {}", path))?;
                NoiseSpec::from_json(&json)
                    .with_context(|| format!("Failed to parse noise spec: {}", path))?
            }
            None => self.params.spec_for(&self.selected_kinds()),
        };
        spec.validate()?;
        Ok(spec)
    }
}
