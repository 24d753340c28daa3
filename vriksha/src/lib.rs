//! # Vriksha
//!
//! Orientation filtering and angle derivation for tree assessment.
//!
//! ## Overview
//!
//! A phone held against a trunk or sighted at a treetop reports pitch and
//! roll. Vriksha smooths that stream, applies a user-captured zero
//! reference, and turns it into forestry quantities:
//!
//! - **Tree lean** - deviation of the trunk from vertical
//! - **Slope grade** - terrain angle and percent grade
//! - **Tree height** - elevation angle times horizontal distance
//!
//! Repeated measurements of one tree are summarized (mean, spread, standard
//! deviation) and every quantity maps to a qualitative severity bucket.
//!
//! ## Layers
//!
//! | Layer | Module | Contents |
//! |-------|--------|----------|
//! | Sensors | [`sensors`] | Low-pass filter, calibration offset |
//! | Measurement | [`measurement`] | Angle derivation, metrics, statistics, severity |
//! | Session | [`session`] | Per-screen owner of filter and calibration state |
//! | I/O | [`io`] | JSON-lines sample logs for replay |
//!
//! ## Quick Start
//!
//! ```
//! use vriksha::{MeasurementSession, OrientationSample, Readout, SessionConfig};
//!
//! let mut session = MeasurementSession::new(&SessionConfig::clinometer()).unwrap();
//!
//! // Phone upright against a trunk leaning a few degrees
//! for i in 0..100 {
//!     session.process_sample(&OrientationSample::from_degrees(87.0, 89.0, i * 50_000));
//! }
//!
//! if let Readout::TreeLean { primary_deg, .. } = session.readout() {
//!     assert!((primary_deg - 3.0).abs() < 1e-3);
//! }
//! ```
//!
//! ## Angle Convention
//!
//! Samples arrive in radians and are filtered in degrees. Pitch is the
//! longitudinal axis, roll the lateral one. A device lying flat reads 0°
//! on both; held upright it reads 90° pitch.

// Core types and math helpers
pub mod core;

// Filtering and calibration
pub mod sensors;

// Derived angles, metrics and assessment
pub mod measurement;

// Session orchestration
pub mod session;

// TOML configuration
pub mod config;

// Sample log persistence
pub mod io;

pub mod error;

pub use self::core::{AngleReading, Attitude, OrientationSample};

pub use sensors::{low_pass, CalibrationOffset, CalibrationState, FilterState, CLINOMETER_ALPHA};

pub use measurement::{
    aggregate_stats, classify, classify_severity, derive_angle, estimate_height, percent_grade,
    AggregateStats, ClinometerRecord, InclinationClass, LeanSeverity, MeasurementAxis,
    MeasurementKind, MeasurementMode, Point3, RecordedMeasurement, SeverityDomain, SeverityLevel,
    SeverityTable, SlopeDifficulty, StabilityRating, StatusLevel, TreeMeasurements, TreeRef,
    TwoPointMeasurement,
};

pub use session::{step, MeasurementSession, Readout};

pub use config::SessionConfig;

pub use io::{read_sample_log, write_sample_log, SampleLogReader, SampleLogWriter};

pub use error::{Error, Result};
