//! Per-mode angle derivation.
//!
//! | Mode       | Primary              | Secondary            |
//! |------------|----------------------|----------------------|
//! | TreeLean   | 90 - selected axis   | 90 - other axis      |
//! | SlopeGrade | pitch                | 0                    |
//! | TreeHeight | pitch (elevation)    | 0                    |
//!
//! For tree lean the device points up the trunk, so a raw reading near 90°
//! means upright. Subtracting from 90 turns it into a signed deviation
//! from vertical.

use crate::core::types::{AngleReading, Attitude};
use crate::sensors::CalibrationOffset;

use super::mode::{MeasurementAxis, MeasurementMode};

/// Raw reading that corresponds to a perfectly vertical trunk.
pub const VERTICAL_DEG: f64 = 90.0;

/// Derive the mode-specific angles from a filtered attitude.
///
/// The calibration offset is subtracted before any per-mode transform.
/// `axis` only affects [`MeasurementMode::TreeLean`].
pub fn derive_angle(
    mode: MeasurementMode,
    axis: MeasurementAxis,
    filtered: Attitude,
    offset: CalibrationOffset,
) -> AngleReading {
    let adjusted = offset.apply(filtered);
    let (p, r) = (adjusted.pitch_deg, adjusted.roll_deg);

    match mode {
        MeasurementMode::TreeLean => {
            let (primary, secondary) = match axis {
                MeasurementAxis::Longitudinal => (p, r),
                MeasurementAxis::Lateral => (r, p),
            };
            AngleReading::new(VERTICAL_DEG - primary, VERTICAL_DEG - secondary)
        }
        MeasurementMode::SlopeGrade | MeasurementMode::TreeHeight => AngleReading::primary_only(p),
    }
}
