//! Measurement layer: from calibrated attitude to field values.
//!
//! # Components
//!
//! - [`MeasurementMode`] / [`MeasurementAxis`]: What is being measured
//! - [`derive_angle`]: Mode-specific angle derivation
//! - [`percent_grade`], [`estimate_height`]: Tangent-based metrics
//! - [`aggregate_stats`]: Mean/min/max/range/stddev over a history
//! - [`classify_severity`]: Threshold tables per assessment domain
//! - [`ClinometerRecord`], [`TreeMeasurements`]: Captured results
//! - [`TwoPointMeasurement`]: Anchor-to-anchor distance

mod derivation;
mod distance;
mod history;
mod metrics;
mod mode;
mod record;
mod severity;
mod stats;

pub use derivation::{derive_angle, VERTICAL_DEG};
pub use distance::{Point3, TwoPointMeasurement};
pub use history::{MeasurementKind, RecordedMeasurement, TreeMeasurements, TreeRef};
pub use metrics::{estimate_height, percent_grade};
pub use mode::{MeasurementAxis, MeasurementMode};
pub use record::{ClinometerRecord, StatusLevel, UNNAMED_MEASUREMENT};
pub use severity::{
    classify, classify_severity, InclinationClass, LeanSeverity, SeverityDomain, SeverityLevel,
    SeverityTable, SlopeDifficulty, StabilityRating, INCLINATION_CLASS_TABLE, LEAN_TABLE,
    SLOPE_TABLE, STABILITY_TABLE,
};
pub use stats::{aggregate_stats, AggregateStats};
