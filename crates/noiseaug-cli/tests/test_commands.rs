//! End-to-end tests for the CLI commands against temporary WAV files.

use noiseaug_cli::audio_io::{load_wav, write_wav, WavEncoding};
use noiseaug_cli::commands::{add_noise, analyze, generate, split};
use noiseaug_cli::noise_args::{NoiseArgs, NoiseParamArgs};
use noiseaug_spec::NoiseKind;
use noiseaug_synth::AudioSignal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

fn write_tone(dir: &Path, name: &str, num_samples: usize, sample_rate: u32) -> PathBuf {
    let samples = (0..num_samples)
        .map(|i| 0.25 * (i as f64 * 0.05).sin())
        .collect();
    let signal = AudioSignal::new(samples, sample_rate).unwrap();
    let path = dir.join(name);
    write_wav(&path, &signal, WavEncoding::Float32).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_add_noise_preserves_length_and_rate() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "speech.wav", 4000, 16000);
    let output = dir.path().join("noisy.wav");

    let noise = NoiseArgs {
        white: true,
        pink: true,
        formant: true,
        ..Default::default()
    };
    let code = add_noise::run(
        &add_noise::AddNoiseOptions {
            input: path_str(&input),
            output: path_str(&output),
            noise: &noise,
            seed: 42,
            sample_rate: Some(16000),
            encoding: WavEncoding::Float32,
        },
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let original = load_wav(&input).unwrap();
    let noisy = load_wav(&output).unwrap();
    assert_eq!(noisy.len(), original.len());
    assert_eq!(noisy.sample_rate(), 16000);
    assert_ne!(noisy.samples(), original.samples());
}

#[test]
fn test_add_noise_without_kinds_copies_input() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "speech.wav", 500, 8000);
    let output = dir.path().join("copy.wav");

    let noise = NoiseArgs::default();
    add_noise::run(
        &add_noise::AddNoiseOptions {
            input: path_str(&input),
            output: path_str(&output),
            noise: &noise,
            seed: 1,
            sample_rate: None,
            encoding: WavEncoding::Float32,
        },
        true,
    )
    .unwrap();

    assert_eq!(
        load_wav(&output).unwrap().samples(),
        load_wav(&input).unwrap().samples()
    );
}

#[test]
fn test_add_noise_rate_mismatch_fails() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "speech.wav", 500, 8000);
    let output = dir.path().join("noisy.wav");

    let noise = NoiseArgs {
        white: true,
        ..Default::default()
    };
    let options = add_noise::AddNoiseOptions {
        input: path_str(&input),
        output: path_str(&output),
        noise: &noise,
        seed: 1,
        sample_rate: Some(22050),
        encoding: WavEncoding::Float32,
    };

    assert!(add_noise::run(&options, false).is_err());
    assert_eq!(add_noise::run(&options, true).unwrap(), ExitCode::from(1));
    assert!(!output.exists());
}

#[test]
fn test_generate_matches_add_noise_on_silence() {
    let dir = TempDir::new().unwrap();
    let rate = 8000;

    let silent = dir.path().join("silent.wav");
    write_wav(
        &silent,
        &AudioSignal::silence(rate as usize, rate).unwrap(),
        WavEncoding::Float32,
    )
    .unwrap();

    let params = NoiseParamArgs {
        noise_level: 0.3,
        ..Default::default()
    };

    let generated = dir.path().join("white.wav");
    let code = generate::run(
        &generate::GenerateOptions {
            kind: NoiseKind::White,
            output: path_str(&generated),
            duration_seconds: 1.0,
            sample_rate: rate,
            seed: 5,
            params: &params,
            encoding: WavEncoding::Float32,
        },
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let added = dir.path().join("added.wav");
    let noise = NoiseArgs {
        white: true,
        params: params.clone(),
        ..Default::default()
    };
    add_noise::run(
        &add_noise::AddNoiseOptions {
            input: path_str(&silent),
            output: path_str(&added),
            noise: &noise,
            seed: 5,
            sample_rate: None,
            encoding: WavEncoding::Float32,
        },
        false,
    )
    .unwrap();

    assert_eq!(
        load_wav(&generated).unwrap().samples(),
        load_wav(&added).unwrap().samples()
    );
}

#[test]
fn test_generate_formant_is_peak_normalized() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("formant.wav");

    generate::run(
        &generate::GenerateOptions {
            kind: NoiseKind::Formant,
            output: path_str(&output),
            duration_seconds: 0.5,
            sample_rate: 16000,
            seed: 3,
            params: &NoiseParamArgs::default(),
            encoding: WavEncoding::Float32,
        },
        true,
    )
    .unwrap();

    let signal = load_wav(&output).unwrap();
    assert_eq!(signal.len(), 8000);
    let peak = signal.samples().iter().map(|s| s.abs()).fold(0.0, f64::max);
    assert!((peak - 1.0).abs() < 1e-6);
}

#[test]
fn test_generate_huge_duration_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("huge.wav");
    let options = generate::GenerateOptions {
        kind: NoiseKind::Pink,
        output: path_str(&output),
        duration_seconds: 1e300,
        sample_rate: 22050,
        seed: 0,
        params: &NoiseParamArgs::default(),
        encoding: WavEncoding::Float32,
    };

    let err = generate::run(&options, false).unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds the limit"));
    assert_eq!(generate::run(&options, true).unwrap(), ExitCode::from(1));
    assert!(!output.exists());
}

#[test]
fn test_split_writes_numbered_segments() {
    let dir = TempDir::new().unwrap();
    // 10 s at 100 Hz, 2 s trimmed from each end leaves 600 samples.
    let input = write_tone(dir.path(), "rain.wav", 1000, 100);
    let out_dir = dir.path().join("segments");

    let code = split::run(
        &split::SplitOptions {
            input: path_str(&input),
            output_dir: path_str(&out_dir),
            segment_seconds: 2.5,
            trim_seconds: 2.0,
            encoding: WavEncoding::Float32,
        },
        false,
    )
    .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let lens: Vec<usize> = (1..=3)
        .map(|i| {
            load_wav(&out_dir.join(format!("rain_segment_{}.wav", i)))
                .unwrap()
                .len()
        })
        .collect();
    assert_eq!(lens, vec![250, 250, 100]);
    assert!(!out_dir.join("rain_segment_4.wav").exists());
    assert!(!out_dir.join("rain_segment_0.wav").exists());
}

#[test]
fn test_analyze_existing_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "tone.wav", 2048, 8000);

    assert_eq!(analyze::run(path_str(&input), false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(analyze::run(path_str(&input), true).unwrap(), ExitCode::SUCCESS);

    let missing = dir.path().join("missing.wav");
    assert!(analyze::run(path_str(&missing), false).is_err());
    assert_eq!(
        analyze::run(path_str(&missing), true).unwrap(),
        ExitCode::from(1)
    );
}
