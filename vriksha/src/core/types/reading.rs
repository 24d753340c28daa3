use serde::{Deserialize, Serialize};

/// Output of one angle derivation pass.
///
/// `secondary_deg` is only meaningful for tree lean; other modes leave it at 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleReading {
    pub primary_deg: f64,
    pub secondary_deg: f64,
}

impl AngleReading {
    pub fn new(primary_deg: f64, secondary_deg: f64) -> Self {
        Self {
            primary_deg,
            secondary_deg,
        }
    }

    /// Reading with only a primary channel.
    pub fn primary_only(primary_deg: f64) -> Self {
        Self::new(primary_deg, 0.0)
    }

    /// Larger of the two channel magnitudes.
    pub fn max_magnitude(&self) -> f64 {
        self.primary_deg.abs().max(self.secondary_deg.abs())
    }
}
