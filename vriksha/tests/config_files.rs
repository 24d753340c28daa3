//! Configuration and sample log files on disk.

mod common;

use std::fs;

use approx::assert_relative_eq;
use tempfile::TempDir;
use vriksha::{
    read_sample_log, write_sample_log, Error, MeasurementAxis, MeasurementMode,
    MeasurementSession, SampleLogReader, SessionConfig,
};

use common::steady;

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/vriksha.toml");
    let config = SessionConfig::load(path).unwrap();
    assert_eq!(config, SessionConfig::clinometer());
}

#[test]
fn test_load_partial_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("height.toml");
    fs::write(
        &path,
        "[measurement]\nmode = \"tree_height\"\naxis = \"lateral\"\ndistance_m = 35.0\n",
    )
    .unwrap();

    let config = SessionConfig::load(&path).unwrap();
    assert_eq!(config.measurement.mode, MeasurementMode::TreeHeight);
    assert_eq!(config.measurement.axis, MeasurementAxis::Lateral);
    assert_relative_eq!(config.measurement.distance_m, 35.0);
    assert_relative_eq!(config.filter.alpha, 0.2);
}

#[test]
fn test_saved_config_reloads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inclinometer.toml");

    let config = SessionConfig::inclinometer();
    fs::write(&path, config.to_toml().unwrap()).unwrap();
    assert_eq!(SessionConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_config_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = SessionConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");

    fs::write(&path, "[filter]\nalpha = 0.0\n").unwrap();
    assert!(matches!(SessionConfig::load(&path), Err(Error::InvalidAlpha(_))));

    fs::write(&path, "[measurement]\nmode = \"sideways\"\n").unwrap();
    assert!(matches!(SessionConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn test_sample_log_replay() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lean.jsonl");

    let samples = steady(87.5, 89.0, 120);
    assert_eq!(write_sample_log(&path, &samples).unwrap(), 120);

    let loaded = read_sample_log(&path).unwrap();
    assert_eq!(loaded.len(), samples.len());
    for (read, written) in loaded.iter().zip(&samples) {
        assert_relative_eq!(read.pitch_rad, written.pitch_rad, epsilon = 1e-12);
        assert_eq!(read.timestamp_us, written.timestamp_us);
    }

    let mut session = MeasurementSession::new(&SessionConfig::clinometer()).unwrap();
    for s in &loaded {
        session.process_sample(s);
    }
    assert_relative_eq!(session.reading().primary_deg, 2.5, epsilon = 1e-6);
}

#[test]
fn test_non_finite_sample_log_replays() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("glitch.jsonl");

    let mut samples = steady(30.0, 0.0, 3);
    samples[1].pitch_rad = f64::NAN;
    assert_eq!(write_sample_log(&path, &samples).unwrap(), 3);

    let loaded = read_sample_log(&path).unwrap();
    assert_eq!(loaded.len(), 3);
    assert!(loaded[1].pitch_rad.is_nan());

    let mut session = MeasurementSession::new(&SessionConfig::clinometer()).unwrap();
    for s in &loaded {
        session.process_sample(s);
    }
    assert!(session.reading().primary_deg.is_nan());
    assert_eq!(session.samples_processed(), 3);
}

#[test]
fn test_sample_log_error_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jsonl");
    fs::write(
        &path,
        "{\"pitch_rad\":1.0,\"roll_rad\":1.0,\"timestamp_us\":0}\n{\"pitch_rad\":\"x\"}\n",
    )
    .unwrap();

    match read_sample_log(&path) {
        Err(Error::SampleLog { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected sample log error, got {other:?}"),
    }

    let mut reader = SampleLogReader::open(&path).unwrap();
    assert!(reader.next_sample().unwrap().is_some());
    assert!(reader.next_sample().is_err());
    assert_eq!(reader.lines_read(), 2);
}
