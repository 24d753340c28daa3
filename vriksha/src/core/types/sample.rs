//! Inbound sensor sample and smoothed attitude.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw device attitude as delivered by the motion collaborator.
///
/// JSON has no NaN or infinity; serde_json writes them as `null`, which
/// reads back as NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrientationSample {
    /// Rotation about the device's lateral axis, radians
    #[serde(deserialize_with = "f64_or_nan")]
    pub pitch_rad: f64,
    /// Rotation about the device's longitudinal axis, radians
    #[serde(deserialize_with = "f64_or_nan")]
    pub roll_rad: f64,
    /// Capture time in microseconds (monotonic source)
    #[serde(default)]
    pub timestamp_us: u64,
}

impl OrientationSample {
    /// Create a sample from radians.
    pub fn new(pitch_rad: f64, roll_rad: f64, timestamp_us: u64) -> Self {
        Self {
            pitch_rad,
            roll_rad,
            timestamp_us,
        }
    }

    /// Create a sample from degrees. Handy for synthetic streams.
    pub fn from_degrees(pitch_deg: f64, roll_deg: f64, timestamp_us: u64) -> Self {
        Self::new(pitch_deg.to_radians(), roll_deg.to_radians(), timestamp_us)
    }

    /// Pitch in degrees.
    #[inline]
    pub fn pitch_deg(&self) -> f64 {
        self.pitch_rad.to_degrees()
    }

    /// Roll in degrees.
    #[inline]
    pub fn roll_deg(&self) -> f64 {
        self.roll_rad.to_degrees()
    }
}

fn f64_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Pitch/roll pair in degrees.
///
/// Used both for filtered attitude and for calibration-adjusted values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

impl Attitude {
    pub fn new(pitch_deg: f64, roll_deg: f64) -> Self {
        Self {
            pitch_deg,
            roll_deg,
        }
    }

    /// Level device (0°, 0°).
    pub fn zero() -> Self {
        Self::default()
    }
}
