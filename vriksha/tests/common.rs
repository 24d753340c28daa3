//! Synthetic orientation streams for integration tests.

#![allow(dead_code)]

use vriksha::OrientationSample;

/// Clinometer sample period.
pub const PERIOD_US: u64 = 50_000;

/// `n` identical samples at fixed pitch and roll (degrees).
pub fn steady(pitch_deg: f64, roll_deg: f64, n: usize) -> Vec<OrientationSample> {
    (0..n)
        .map(|i| OrientationSample::from_degrees(pitch_deg, roll_deg, i as u64 * PERIOD_US))
        .collect()
}

/// Steady attitude with a deterministic alternating wobble on both axes.
pub fn wobbling(
    pitch_deg: f64,
    roll_deg: f64,
    amplitude_deg: f64,
    n: usize,
) -> Vec<OrientationSample> {
    (0..n)
        .map(|i| {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            OrientationSample::from_degrees(
                pitch_deg + sign * amplitude_deg,
                roll_deg - sign * amplitude_deg,
                i as u64 * PERIOD_US,
            )
        })
        .collect()
}

/// Pitch sweeping linearly from `from_deg` to `to_deg`.
pub fn ramp(from_deg: f64, to_deg: f64, n: usize) -> Vec<OrientationSample> {
    let step = if n > 1 {
        (to_deg - from_deg) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n)
        .map(|i| {
            OrientationSample::from_degrees(from_deg + step * i as f64, 0.0, i as u64 * PERIOD_US)
        })
        .collect()
}

/// Shift timestamps so the stream continues after `start_us`.
pub fn offset_timestamps(samples: &mut [OrientationSample], start_us: u64) {
    for s in samples {
        s.timestamp_us += start_us;
    }
}
