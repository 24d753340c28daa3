//! Two-point distance from world-space anchors.
//!
//! The AR collaborator raycasts each tap into a world position. The first
//! placed point is the start anchor, the second the end anchor. Once both
//! exist the measurement is complete and further points are ignored until
//! [`TwoPointMeasurement::reset`].

use serde::{Deserialize, Serialize};

/// World-space position in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point3) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Point halfway to `other`.
    #[inline]
    pub fn midpoint(&self, other: &Point3) -> Point3 {
        Point3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

/// Start/end anchor pair for a trunk length or crown diameter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TwoPointMeasurement {
    start: Option<Point3>,
    end: Option<Point3>,
}

impl TwoPointMeasurement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the next anchor.
    ///
    /// Returns the measured distance once the second anchor is placed.
    /// Placing a third point has no effect and returns the existing distance.
    pub fn place(&mut self, point: Point3) -> Option<f64> {
        match (self.start, self.end) {
            (None, _) => {
                self.start = Some(point);
                None
            }
            (Some(_), None) => {
                self.end = Some(point);
                self.distance()
            }
            (Some(_), Some(_)) => {
                log::trace!("Measurement complete, ignoring extra anchor");
                self.distance()
            }
        }
    }

    pub fn start(&self) -> Option<Point3> {
        self.start
    }

    pub fn end(&self) -> Option<Point3> {
        self.end
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Distance between anchors in meters, when both are placed.
    pub fn distance(&self) -> Option<f64> {
        Some(self.start?.distance(&self.end?))
    }

    /// Midpoint between anchors, when both are placed.
    pub fn midpoint(&self) -> Option<Point3> {
        Some(self.start?.midpoint(&self.end?))
    }

    /// Clear both anchors.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
    }
}
