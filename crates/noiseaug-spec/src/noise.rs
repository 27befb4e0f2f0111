//! Noise spec types.
//!
//! A [`NoiseSpec`] enables a kind of noise by the presence of its field:
//!
//! ```json
//! {
//!   "white": { "level": 0.3 },
//!   "pink": {},
//!   "formant": { "center_freqs": [700, 1200], "bandwidths": [90, 110] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Default amplitude multiplier for white noise.
pub const DEFAULT_WHITE_LEVEL: f64 = 0.4;

/// Default formant count (informational, see [`FormantNoiseParams::num_formants`]).
pub const DEFAULT_NUM_FORMANTS: u32 = 3;

/// Default formant center frequencies in Hz.
pub const DEFAULT_FORMANT_FREQS: [f64; 3] = [500.0, 1500.0, 2500.0];

/// Default formant bandwidths in Hz.
pub const DEFAULT_FORMANT_BANDWIDTHS: [f64; 3] = [80.0, 80.0, 80.0];

/// The kinds of noise the synthesizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Gaussian white noise.
    White,
    /// 1/f shaped noise.
    Pink,
    /// Sinusoid-modulated smoothed noise with speech-like spectral peaks.
    Formant,
}

impl NoiseKind {
    /// All kinds, in composition order.
    pub const ALL: [NoiseKind; 3] = [NoiseKind::White, NoiseKind::Pink, NoiseKind::Formant];

    /// Returns the kind's lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::White => "white",
            NoiseKind::Pink => "pink",
            NoiseKind::Formant => "formant",
        }
    }

    /// Looks a kind up by name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// White noise parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhiteNoiseParams {
    /// Amplitude multiplier applied to unit-variance Gaussian samples.
    #[serde(default = "default_white_level")]
    pub level: f64,
}

fn default_white_level() -> f64 {
    DEFAULT_WHITE_LEVEL
}

impl Default for WhiteNoiseParams {
    fn default() -> Self {
        Self {
            level: DEFAULT_WHITE_LEVEL,
        }
    }
}

/// How the fixed pink-noise coefficients are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinkFilter {
    /// Two successive full convolutions, first with `b` then with `a`,
    /// truncated to the requested length.
    #[default]
    Convolution,
    /// Recursive IIR filtering with `b` as feed-forward and `a` as feedback
    /// coefficients, which gives a true 1/f slope.
    Recursive,
}

impl PinkFilter {
    /// Returns the filter's lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinkFilter::Convolution => "convolution",
            PinkFilter::Recursive => "recursive",
        }
    }

    /// Looks a filter up by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "convolution" => Some(PinkFilter::Convolution),
            "recursive" => Some(PinkFilter::Recursive),
            _ => None,
        }
    }
}

/// Pink noise parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinkNoiseParams {
    /// Filter application mode.
    #[serde(default)]
    pub filter: PinkFilter,
}

/// Formant-like noise parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormantNoiseParams {
    /// Number of formants. Documentary only: the synthesizer iterates over
    /// the paired `center_freqs`/`bandwidths` entries regardless.
    #[serde(default = "default_num_formants")]
    pub num_formants: u32,
    /// Formant center frequencies in Hz. `None` means the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_freqs: Option<Vec<f64>>,
    /// Formant bandwidths in Hz. `None` means the defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidths: Option<Vec<f64>>,
}

fn default_num_formants() -> u32 {
    DEFAULT_NUM_FORMANTS
}

impl Default for FormantNoiseParams {
    fn default() -> Self {
        Self {
            num_formants: DEFAULT_NUM_FORMANTS,
            center_freqs: None,
            bandwidths: None,
        }
    }
}

impl FormantNoiseParams {
    /// Creates parameters with explicit frequency and bandwidth lists.
    ///
    /// `num_formants` follows the list length but never drops below 1, so
    /// an empty pair of lists still validates and is reported by the
    /// synthesizer as a degenerate signal.
    pub fn new(center_freqs: Vec<f64>, bandwidths: Vec<f64>) -> Self {
        Self {
            num_formants: (center_freqs.len() as u32).max(1),
            center_freqs: Some(center_freqs),
            bandwidths: Some(bandwidths),
        }
    }

    /// Center frequencies with defaults applied.
    pub fn resolved_center_freqs(&self) -> Vec<f64> {
        self.center_freqs
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMANT_FREQS.to_vec())
    }

    /// Bandwidths with defaults applied.
    pub fn resolved_bandwidths(&self) -> Vec<f64> {
        self.bandwidths
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMANT_BANDWIDTHS.to_vec())
    }
}

/// Which noise kinds to mix into a signal, and how.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseSpec {
    /// White noise, enabled when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<WhiteNoiseParams>,
    /// Pink noise, enabled when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pink: Option<PinkNoiseParams>,
    /// Formant-like noise, enabled when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formant: Option<FormantNoiseParams>,
}

impl NoiseSpec {
    /// Creates an empty spec with no noise enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables white noise at the given level.
    pub fn with_white(mut self, level: f64) -> Self {
        self.white = Some(WhiteNoiseParams { level });
        self
    }

    /// Enables pink noise with the default filter.
    pub fn with_pink(self) -> Self {
        self.with_pink_filter(PinkFilter::default())
    }

    /// Enables pink noise with an explicit filter mode.
    pub fn with_pink_filter(mut self, filter: PinkFilter) -> Self {
        self.pink = Some(PinkNoiseParams { filter });
        self
    }

    /// Enables formant-like noise.
    pub fn with_formant(mut self, params: FormantNoiseParams) -> Self {
        self.formant = Some(params);
        self
    }

    /// Returns the enabled kinds in composition order.
    pub fn enabled_kinds(&self) -> Vec<NoiseKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.white.is_some() {
            kinds.push(NoiseKind::White);
        }
        if self.pink.is_some() {
            kinds.push(NoiseKind::Pink);
        }
        if self.formant.is_some() {
            kinds.push(NoiseKind::Formant);
        }
        kinds
    }

    /// Returns true if no noise kind is enabled.
    pub fn is_empty(&self) -> bool {
        self.white.is_none() && self.pink.is_none() && self.formant.is_none()
    }

    /// Parses a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the spec as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }
}
