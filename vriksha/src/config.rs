//! Session configuration.
//!
//! Loads filter and measurement settings from a TOML file. Every field has
//! a default, so an empty file yields the handheld clinometer preset.
//!
//! ## Example TOML
//!
//! ```toml
//! [filter]
//! alpha = 0.2               # 1.0 disables smoothing
//! sample_interval_s = 0.05  # 20 Hz
//!
//! [measurement]
//! mode = "tree_height"      # tree_lean | slope_grade | tree_height
//! axis = "longitudinal"     # longitudinal | lateral (tree_lean only)
//! distance_m = 20.0         # horizontal distance to the trunk
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurement::{MeasurementAxis, MeasurementMode};
use crate::sensors::CLINOMETER_ALPHA;

/// Shortest distance selectable in the field UI, meters.
pub const MIN_DISTANCE_M: f64 = 5.0;
/// Longest distance selectable in the field UI, meters.
pub const MAX_DISTANCE_M: f64 = 100.0;
/// Distance to the tree before the user adjusts it, meters.
pub const DEFAULT_DISTANCE_M: f64 = 20.0;

/// Top-level session configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub filter: FilterSection,
    #[serde(default)]
    pub measurement: MeasurementSection,
}

/// Attitude filter settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSection {
    /// Low-pass smoothing factor, `0 < alpha <= 1` (default: 0.2)
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Nominal interval between motion samples in seconds (default: 0.05)
    #[serde(default = "default_sample_interval")]
    pub sample_interval_s: f64,
}

/// Measurement selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSection {
    #[serde(default)]
    pub mode: MeasurementMode,

    #[serde(default)]
    pub axis: MeasurementAxis,

    /// Horizontal distance to the tree in meters (default: 20)
    #[serde(default = "default_distance")]
    pub distance_m: f64,
}

fn default_alpha() -> f64 {
    CLINOMETER_ALPHA
}

fn default_sample_interval() -> f64 {
    0.05
}

fn default_distance() -> f64 {
    DEFAULT_DISTANCE_M
}

impl Default for FilterSection {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            sample_interval_s: default_sample_interval(),
        }
    }
}

impl Default for MeasurementSection {
    fn default() -> Self {
        Self {
            mode: MeasurementMode::default(),
            axis: MeasurementAxis::default(),
            distance_m: default_distance(),
        }
    }
}

impl SessionConfig {
    /// Handheld clinometer: smoothed at 20 Hz.
    pub fn clinometer() -> Self {
        Self::default()
    }

    /// AR inclinometer overlay: raw pitch at 10 Hz, no smoothing.
    pub fn inclinometer() -> Self {
        Self {
            filter: FilterSection {
                alpha: 1.0,
                sample_interval_s: 0.1,
            },
            measurement: MeasurementSection {
                mode: MeasurementMode::SlopeGrade,
                ..MeasurementSection::default()
            },
        }
    }

    /// Load and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: SessionConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let alpha = self.filter.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::InvalidAlpha(alpha));
        }
        if !(self.filter.sample_interval_s > 0.0 && self.filter.sample_interval_s.is_finite()) {
            return Err(Error::Config(format!(
                "sample_interval_s must be positive, got {}",
                self.filter.sample_interval_s
            )));
        }
        let distance = self.measurement.distance_m;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(Error::InvalidDistance(distance));
        }
        Ok(())
    }

    /// Nominal sample rate in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        1.0 / self.filter.sample_interval_s
    }
}
