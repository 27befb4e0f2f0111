//! Mixing noise into an existing signal.
//!
//! Enabled kinds are generated at the signal's length and sample rate and
//! summed into a copy of the signal in the fixed order white, pink, formant.

use noiseaug_spec::{NoiseKind, NoiseSpec};
use rand::Rng;

use crate::error::{SynthError, SynthResult};
use crate::rng::create_component_rng;
use crate::signal::{add_in_place, AudioSignal};
use crate::synthesis::generate_noise;

/// Adds every noise kind enabled in `spec` to `signal`, drawing all
/// randomness from `rng`.
///
/// Pink and formant noise are generated for a duration of
/// `signal.len() / sample_rate` seconds and always have exactly
/// `signal.len()` samples.
///
/// # Errors
/// * `Spec` if `spec` fails validation.
/// * `InvalidParameter` if `signal` is empty.
/// * Any error from the individual generators.
pub fn compose_noise<R: Rng + ?Sized>(
    signal: &AudioSignal,
    spec: &NoiseSpec,
    rng: &mut R,
) -> SynthResult<AudioSignal> {
    compose_with(signal, spec, |kind, num_samples, sample_rate| {
        generate_noise(kind, spec, num_samples, sample_rate, &mut *rng)
    })
}

/// Like [`compose_noise`], but each kind draws from its own RNG derived
/// from `seed` and the kind's name.
///
/// The noise added for one kind is the same whether or not other kinds are
/// enabled, so composing white and pink together equals composing each
/// separately and summing the contributions.
pub fn compose_noise_seeded(
    signal: &AudioSignal,
    spec: &NoiseSpec,
    seed: u32,
) -> SynthResult<AudioSignal> {
    compose_with(signal, spec, |kind, num_samples, sample_rate| {
        let mut rng = create_component_rng(seed, kind.as_str());
        generate_noise(kind, spec, num_samples, sample_rate, &mut rng)
    })
}

fn compose_with<F>(signal: &AudioSignal, spec: &NoiseSpec, mut render: F) -> SynthResult<AudioSignal>
where
    F: FnMut(NoiseKind, usize, u32) -> SynthResult<Vec<f64>>,
{
    spec.validate()?;
    if signal.is_empty() {
        return Err(SynthError::invalid_param(
            "signal",
            "cannot add noise to an empty signal",
        ));
    }

    let kinds = spec.enabled_kinds();
    let _span = tracing::debug_span!(
        "compose_noise",
        num_samples = signal.len(),
        sample_rate = signal.sample_rate(),
        kinds = ?kinds
    )
    .entered();

    let mut samples = signal.samples().to_vec();
    for kind in kinds {
        let noise = render(kind, samples.len(), signal.sample_rate())?;
        add_in_place(&mut samples, &noise);
    }

    AudioSignal::new(samples, signal.sample_rate())
}
