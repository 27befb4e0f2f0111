//! noiseaug CLI library.
//!
//! This crate provides the pieces behind the `noiseaug` binary: WAV loading
//! and writing, logging setup, noise spec construction from flags, and the
//! subcommand implementations.

pub mod audio_io;
pub mod commands;
pub mod logging;
pub mod noise_args;
