//! WAV loading and writing.
//!
//! Files are read with hound and folded to a mono [`AudioSignal`]. Integer
//! PCM is scaled into [-1, 1]; multi-channel files are averaged per frame.

use anyhow::{bail, Context, Result};
use noiseaug_synth::AudioSignal;
use std::path::Path;

/// Sample encoding for written WAV files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WavEncoding {
    /// 32-bit IEEE float, unclipped.
    #[default]
    Float32,
    /// 16-bit signed integer PCM, clipped to [-1, 1].
    Pcm16,
}

/// Loads a WAV file as a mono signal at its native sample rate.
pub fn load_wav(path: &Path) -> Result<AudioSignal> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file '{}'", path.display()))?;

    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            if !matches!(spec.bits_per_sample, 8 | 16 | 24 | 32) {
                bail!(
                    "Unsupported bit depth in '{}': {} bits",
                    path.display(),
                    spec.bits_per_sample
                );
            }
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<Result<_, _>>()
                .with_context(|| format!("Failed to read samples from '{}'", path.display()))?
        }
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<_, _>>()
            .with_context(|| format!("Failed to read samples from '{}'", path.display()))?,
    };

    let mono = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
            .collect()
    };

    tracing::info!(
        path = %path.display(),
        sample_rate = spec.sample_rate,
        channels,
        bits = spec.bits_per_sample,
        samples = mono.len(),
        "loaded WAV"
    );

    Ok(AudioSignal::new(mono, spec.sample_rate)?)
}

/// Loads a WAV file and checks it against an expected sample rate.
///
/// Resampling is not performed; a mismatch is an error.
pub fn load_wav_at_rate(path: &Path, expected_rate: Option<u32>) -> Result<AudioSignal> {
    let signal = load_wav(path)?;
    if let Some(rate) = expected_rate {
        if signal.sample_rate() != rate {
            bail!(
                "'{}' has sample rate {} Hz but {} Hz was requested (resampling is not supported)",
                path.display(),
                signal.sample_rate(),
                rate
            );
        }
    }
    Ok(signal)
}

/// Writes a mono signal to a WAV file.
pub fn write_wav(path: &Path, signal: &AudioSignal, encoding: WavEncoding) -> Result<()> {
    let spec = match encoding {
        WavEncoding::Float32 => hound::WavSpec {
            channels: 1,
            sample_rate: signal.sample_rate(),
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        },
        WavEncoding::Pcm16 => hound::WavSpec {
            channels: 1,
            sample_rate: signal.sample_rate(),
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        },
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file '{}'", path.display()))?;

    for &sample in signal.samples() {
        match encoding {
            WavEncoding::Float32 => writer.write_sample(sample as f32)?,
            WavEncoding::Pcm16 => {
                let clipped = sample.clamp(-1.0, 1.0);
                writer.write_sample((clipped * 32767.0).round() as i16)?
            }
        }
    }

    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file '{}'", path.display()))?;

    tracing::info!(
        path = %path.display(),
        samples = signal.len(),
        ?encoding,
        "wrote WAV"
    );
    Ok(())
}
