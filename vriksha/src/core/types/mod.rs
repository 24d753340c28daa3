//! Core data types for orientation processing.
//!
//! - [`OrientationSample`]: Raw device attitude in radians
//! - [`Attitude`]: Smoothed pitch/roll in degrees
//! - [`AngleReading`]: Mode-specific output of one derivation pass

mod reading;
mod sample;

pub use reading::AngleReading;
pub use sample::{Attitude, OrientationSample};
