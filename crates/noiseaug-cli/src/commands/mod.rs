//! CLI command implementations

pub mod add_noise;
pub mod analyze;
pub mod generate;
pub mod json_output;
pub mod split;
