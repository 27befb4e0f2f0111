//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every generator in this crate takes its random source as an argument.
//! This module supplies the seeded sources: a plain PCG32 for a seed, and
//! independent per-component streams derived from one base seed so that
//! each noise kind draws the same values whether or not other kinds are
//! enabled alongside it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific component from the base seed using a string key.
///
/// Uses BLAKE3 to hash the base seed concatenated with the component key,
/// producing an independent seed for each component.
///
/// # Arguments
/// * `base_seed` - The caller's base seed
/// * `key` - A string identifier for the component (e.g., "white", "formant")
///
/// # Returns
/// A derived u32 seed for the component
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}
