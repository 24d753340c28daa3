//! Zero referencing of the attitude feed.
//!
//! Holding the device against a trunk or the ground introduces a fixed
//! bias. Calibration captures the current filtered attitude as an offset
//! that every later derivation subtracts.

use serde::{Deserialize, Serialize};

use crate::core::types::Attitude;

/// Reference attitude subtracted from filtered readings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationOffset {
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

impl CalibrationOffset {
    /// No correction.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Subtract this offset from a filtered attitude.
    #[inline]
    pub fn apply(&self, filtered: Attitude) -> Attitude {
        Attitude::new(
            filtered.pitch_deg - self.pitch_deg,
            filtered.roll_deg - self.roll_deg,
        )
    }
}

impl From<Attitude> for CalibrationOffset {
    fn from(attitude: Attitude) -> Self {
        Self {
            pitch_deg: attitude.pitch_deg,
            roll_deg: attitude.roll_deg,
        }
    }
}

/// Calibration flag plus the captured offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CalibrationState {
    offset: CalibrationOffset,
    calibrated: bool,
}

impl CalibrationState {
    /// Uncalibrated state with the identity offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture `current` as the new offset, replacing any previous one.
    pub fn calibrate(&mut self, current: Attitude) -> CalibrationOffset {
        self.offset = CalibrationOffset::from(current);
        self.calibrated = true;
        log::debug!(
            "Calibrated: pitch offset {:.2}°, roll offset {:.2}°",
            self.offset.pitch_deg,
            self.offset.roll_deg
        );
        self.offset
    }

    /// Drop the offset and return to the uncalibrated state.
    pub fn reset(&mut self) {
        self.offset = CalibrationOffset::identity();
        self.calibrated = false;
        log::debug!("Calibration cleared");
    }

    /// Calibrate when uncalibrated, reset when calibrated.
    ///
    /// Returns the new offset when this call calibrated.
    pub fn toggle(&mut self, current: Attitude) -> Option<CalibrationOffset> {
        if self.calibrated {
            self.reset();
            None
        } else {
            Some(self.calibrate(current))
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Active offset (identity when uncalibrated).
    pub fn offset(&self) -> CalibrationOffset {
        self.offset
    }
}
