//! Exponential smoothing of device attitude.
//!
//! A one-pole IIR low-pass filter suppresses hand tremor in the attitude
//! feed without any buffering:
//!
//! ```text
//! filtered' = filtered × (1 - α) + raw × α
//! ```
//!
//! | α    | Behaviour                                  |
//! |------|--------------------------------------------|
//! | 0.2  | Clinometer default at 20 Hz (~0.2 s lag)   |
//! | 1.0  | Pass-through, raw values unfiltered        |

use crate::core::types::{Attitude, OrientationSample};
use crate::error::{Error, Result};

/// Smoothing factor used by the handheld clinometer.
pub const CLINOMETER_ALPHA: f64 = 0.2;

/// One low-pass step: `previous × (1 - alpha) + raw × alpha`.
///
/// Pure and total. Non-finite inputs propagate unchanged.
///
/// # Example
/// ```
/// use vriksha::sensors::low_pass;
///
/// assert_eq!(low_pass(10.0, 0.0, 1.0), 10.0);
/// assert!((low_pass(10.0, 0.0, 0.2) - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn low_pass(raw: f64, previous: f64, alpha: f64) -> f64 {
    previous * (1.0 - alpha) + raw * alpha
}

/// Filtered pitch/roll for one measurement session.
///
/// Starts at (0°, 0°). The first few samples therefore ramp toward the
/// device attitude at a rate set by `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    alpha: f64,
    attitude: Attitude,
}

impl FilterState {
    /// Create a filter at the origin.
    ///
    /// Returns [`Error::InvalidAlpha`] unless `0 < alpha <= 1`.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::InvalidAlpha(alpha));
        }
        Ok(Self {
            alpha,
            attitude: Attitude::zero(),
        })
    }

    /// Smoothing factor.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current filtered attitude in degrees.
    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    /// Apply one raw sample (radians) and return the new filtered attitude.
    pub fn update(&mut self, sample: &OrientationSample) -> Attitude {
        self.attitude = Attitude::new(
            low_pass(sample.pitch_deg(), self.attitude.pitch_deg, self.alpha),
            low_pass(sample.roll_deg(), self.attitude.roll_deg, self.alpha),
        );
        self.attitude
    }

    /// Return to the origin, keeping `alpha`.
    pub fn reset(&mut self) {
        self.attitude = Attitude::zero();
    }
}
