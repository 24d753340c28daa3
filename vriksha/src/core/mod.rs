//! Core foundation: sample and reading types plus angle math.

pub mod math;
pub mod types;

pub use types::{AngleReading, Attitude, OrientationSample};
