//! noiseaug Noise Spec Library
//!
//! This crate provides the types, validation, and hashing for noise
//! specifications. A noise spec is a small JSON document that says which
//! kinds of synthetic noise (white, pink, formant-like) to mix into a
//! recording, and with which parameters.
//!
//! # Example
//!
//! ```
//! use noiseaug_spec::{NoiseSpec, FormantNoiseParams};
//! use noiseaug_spec::hash::canonical_spec_hash;
//!
//! let spec = NoiseSpec::new()
//!     .with_white(0.3)
//!     .with_formant(FormantNoiseParams::default());
//!
//! assert!(spec.validate().is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type for parsing and validation
//! - [`noise`]: Noise spec types and builder helpers
//! - [`validation`]: Parameter validation
//! - [`hash`]: Canonical hashing

pub mod error;
pub mod hash;
pub mod noise;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::SpecError;
pub use hash::canonical_spec_hash;
pub use noise::{
    FormantNoiseParams, NoiseKind, NoiseSpec, PinkFilter, PinkNoiseParams, WhiteNoiseParams,
    DEFAULT_FORMANT_BANDWIDTHS, DEFAULT_FORMANT_FREQS, DEFAULT_NUM_FORMANTS, DEFAULT_WHITE_LEVEL,
};
