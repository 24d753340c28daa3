//! Sensor processing: attitude smoothing and zero referencing.
//!
//! # Components
//!
//! - [`FilterState`]: One-pole low-pass filter over pitch and roll
//! - [`CalibrationState`]: Captured reference offset subtracted from readings

mod calibration;
mod low_pass;

pub use calibration::{CalibrationOffset, CalibrationState};
pub use low_pass::{CLINOMETER_ALPHA, FilterState, low_pass};
