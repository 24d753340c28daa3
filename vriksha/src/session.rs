//! Measurement session: the single owner of filter and calibration state.
//!
//! A session is created when a measuring screen appears and dropped when
//! it is dismissed. Samples must be applied in arrival order; either call
//! [`MeasurementSession::process_sample`] from the one thread that receives
//! motion callbacks, or push samples into a channel and let the owner
//! [`drain`](MeasurementSession::drain) it.
//!
//! # Example
//!
//! ```
//! use vriksha::{MeasurementMode, MeasurementSession, OrientationSample, SessionConfig};
//!
//! let mut config = SessionConfig::clinometer();
//! config.filter.alpha = 1.0;
//! config.measurement.mode = MeasurementMode::TreeHeight;
//!
//! let mut session = MeasurementSession::new(&config).unwrap();
//! session.process_sample(&OrientationSample::from_degrees(30.0, 0.0, 0));
//!
//! let record = session.capture("Beech 4", "", 0);
//! let height = record.estimated_height_m.unwrap();
//! assert!((height - 11.547).abs() < 1e-3);
//! ```
//!
//! The pure form of one update is [`step`].

use crossbeam_channel::Receiver;

use crate::config::{SessionConfig, MAX_DISTANCE_M, MIN_DISTANCE_M};
use crate::core::types::{AngleReading, Attitude, OrientationSample};
use crate::error::{Error, Result};
use crate::measurement::{
    classify, derive_angle, estimate_height, percent_grade, ClinometerRecord, LeanSeverity,
    MeasurementAxis, MeasurementMode, SeverityLevel, SlopeDifficulty, LEAN_TABLE, SLOPE_TABLE,
    UNNAMED_MEASUREMENT,
};
use crate::sensors::{CalibrationOffset, CalibrationState, FilterState};

/// Apply one sample to `state` and derive the reading.
///
/// Pure counterpart of [`MeasurementSession::process_sample`] followed by
/// [`MeasurementSession::reading`].
pub fn step(
    mut state: FilterState,
    offset: CalibrationOffset,
    mode: MeasurementMode,
    axis: MeasurementAxis,
    sample: &OrientationSample,
) -> (FilterState, AngleReading) {
    let filtered = state.update(sample);
    (state, derive_angle(mode, axis, filtered, offset))
}

/// Mode-specific display values.
///
/// `None` in an optional metric means the input was out of range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Readout {
    TreeLean {
        primary_deg: f64,
        secondary_deg: f64,
        severity: LeanSeverity,
    },
    SlopeGrade {
        angle_deg: f64,
        grade_percent: Option<f64>,
        difficulty: SlopeDifficulty,
    },
    TreeHeight {
        elevation_deg: f64,
        distance_m: f64,
        height_m: Option<f64>,
    },
}

impl Readout {
    /// Assessment bucket, if the mode has one.
    pub fn severity(&self) -> Option<SeverityLevel> {
        match self {
            Readout::TreeLean { severity, .. } => Some(SeverityLevel::Lean(*severity)),
            Readout::SlopeGrade { difficulty, .. } => Some(SeverityLevel::Slope(*difficulty)),
            Readout::TreeHeight { .. } => None,
        }
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Readout::TreeLean {
                primary_deg,
                secondary_deg,
                severity,
            } => write!(
                f,
                "lean {:.1}° (secondary {:.1}°) - {}",
                primary_deg,
                secondary_deg,
                severity.assessment()
            ),
            Readout::SlopeGrade {
                angle_deg,
                grade_percent,
                difficulty,
            } => match grade_percent {
                Some(grade) => write!(
                    f,
                    "slope {:.1}° ({:.1}%) - {}",
                    angle_deg,
                    grade,
                    difficulty.assessment()
                ),
                None => write!(
                    f,
                    "slope {:.1}° (grade out of range) - {}",
                    angle_deg,
                    difficulty.assessment()
                ),
            },
            Readout::TreeHeight {
                elevation_deg,
                distance_m,
                height_m,
            } => match height_m {
                Some(h) => write!(
                    f,
                    "elevation {:.1}° at {:.0} m - height {:.1} m",
                    elevation_deg, distance_m, h
                ),
                None => write!(
                    f,
                    "elevation {:.1}° at {:.0} m - height out of range",
                    elevation_deg, distance_m
                ),
            },
        }
    }
}

/// Live state of one measuring screen.
#[derive(Debug, Clone)]
pub struct MeasurementSession {
    filter: FilterState,
    calibration: CalibrationState,
    mode: MeasurementMode,
    axis: MeasurementAxis,
    distance_m: f64,
    last_timestamp_us: Option<u64>,
    samples_processed: u64,
    out_of_order_samples: u64,
}

impl MeasurementSession {
    /// Create a session from configuration.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            filter: FilterState::new(config.filter.alpha)?,
            calibration: CalibrationState::new(),
            mode: config.measurement.mode,
            axis: config.measurement.axis,
            distance_m: config
                .measurement
                .distance_m
                .clamp(MIN_DISTANCE_M, MAX_DISTANCE_M),
            last_timestamp_us: None,
            samples_processed: 0,
            out_of_order_samples: 0,
        })
    }

    /// Apply one raw sample and return the filtered attitude in degrees.
    ///
    /// Samples are applied in call order. A timestamp that does not advance
    /// is logged and counted but the sample is still applied.
    pub fn process_sample(&mut self, sample: &OrientationSample) -> Attitude {
        if let Some(last) = self.last_timestamp_us {
            if sample.timestamp_us <= last {
                self.out_of_order_samples += 1;
                log::warn!(
                    "Sample timestamp {} does not advance past {}",
                    sample.timestamp_us,
                    last
                );
            }
        }
        self.last_timestamp_us = Some(sample.timestamp_us);
        self.samples_processed += 1;

        let attitude = self.filter.update(sample);
        log::trace!(
            "Filtered pitch {:.3}°, roll {:.3}°",
            attitude.pitch_deg,
            attitude.roll_deg
        );
        attitude
    }

    /// Apply every sample currently queued on `rx`, in order, without
    /// blocking. Returns the number applied.
    pub fn drain(&mut self, rx: &Receiver<OrientationSample>) -> usize {
        let mut applied = 0;
        while let Ok(sample) = rx.try_recv() {
            self.process_sample(&sample);
            applied += 1;
        }
        applied
    }

    /// Filtered attitude before calibration.
    pub fn attitude(&self) -> Attitude {
        self.filter.attitude()
    }

    /// Filter state snapshot.
    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Capture the current filtered attitude as the zero reference.
    pub fn calibrate(&mut self) -> CalibrationOffset {
        self.calibration.calibrate(self.filter.attitude())
    }

    /// Calibrate when uncalibrated, otherwise clear the calibration.
    pub fn toggle_calibration(&mut self) -> Option<CalibrationOffset> {
        self.calibration.toggle(self.filter.attitude())
    }

    pub fn reset_calibration(&mut self) {
        self.calibration.reset();
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    pub fn offset(&self) -> CalibrationOffset {
        self.calibration.offset()
    }

    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MeasurementMode) {
        self.mode = mode;
    }

    pub fn axis(&self) -> MeasurementAxis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: MeasurementAxis) {
        self.axis = axis;
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Set the horizontal distance, clamped to the 5-100 m field range.
    ///
    /// Returns the distance in effect. Zero, negative and non-finite
    /// distances are rejected and leave the current distance unchanged.
    pub fn set_distance(&mut self, distance_m: f64) -> Result<f64> {
        if !distance_m.is_finite() || distance_m <= 0.0 {
            return Err(Error::InvalidDistance(distance_m));
        }
        self.distance_m = distance_m.clamp(MIN_DISTANCE_M, MAX_DISTANCE_M);
        Ok(self.distance_m)
    }

    /// Angles for the current mode, axis and calibration.
    pub fn reading(&self) -> AngleReading {
        derive_angle(
            self.mode,
            self.axis,
            self.filter.attitude(),
            self.calibration.offset(),
        )
    }

    /// Mode-specific values and assessment for display.
    pub fn readout(&self) -> Readout {
        let reading = self.reading();
        match self.mode {
            MeasurementMode::TreeLean => Readout::TreeLean {
                primary_deg: reading.primary_deg,
                secondary_deg: reading.secondary_deg,
                severity: classify(reading.primary_deg, &LEAN_TABLE),
            },
            MeasurementMode::SlopeGrade => {
                let grade_percent = percent_grade(reading.primary_deg).ok();
                // Unbounded grade is as steep as it gets
                let difficulty = classify(grade_percent.unwrap_or(f64::INFINITY), &SLOPE_TABLE);
                Readout::SlopeGrade {
                    angle_deg: reading.primary_deg,
                    grade_percent,
                    difficulty,
                }
            }
            MeasurementMode::TreeHeight => {
                let elevation_deg = reading.primary_deg.abs();
                Readout::TreeHeight {
                    elevation_deg,
                    distance_m: self.distance_m,
                    height_m: estimate_height(elevation_deg, self.distance_m).ok(),
                }
            }
        }
    }

    /// Snapshot the current reading as a saved record.
    pub fn capture(&self, tree_name: &str, notes: &str, timestamp_us: u64) -> ClinometerRecord {
        let reading = self.reading();
        let tree_name = if tree_name.trim().is_empty() {
            UNNAMED_MEASUREMENT.to_string()
        } else {
            tree_name.to_string()
        };

        let (distance_m, estimated_height_m) = match self.mode {
            MeasurementMode::TreeHeight => {
                let height = match estimate_height(reading.primary_deg.abs(), self.distance_m) {
                    Ok(h) => Some(h),
                    Err(e) => {
                        log::warn!("Height not recorded: {}", e);
                        None
                    }
                };
                (Some(self.distance_m), height)
            }
            _ => (None, None),
        };

        ClinometerRecord {
            tree_name,
            mode: self.mode,
            primary_angle_deg: reading.primary_deg,
            secondary_angle_deg: reading.secondary_deg,
            distance_m,
            estimated_height_m,
            timestamp_us,
            notes: notes.to_string(),
        }
    }

    /// Start over: filter at the origin, calibration cleared, counters zeroed.
    pub fn restart(&mut self) {
        self.filter.reset();
        self.calibration.reset();
        self.last_timestamp_us = None;
        self.samples_processed = 0;
        self.out_of_order_samples = 0;
    }

    pub fn samples_processed(&self) -> u64 {
        self.samples_processed
    }

    pub fn out_of_order_samples(&self) -> u64 {
        self.out_of_order_samples
    }
}
