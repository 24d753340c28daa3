//! Snapshot of a clinometer reading taken when the user saves.

use serde::{Deserialize, Serialize};

use super::metrics::percent_grade;
use super::mode::MeasurementMode;
use super::severity::{classify, LeanSeverity, SlopeDifficulty, LEAN_TABLE, SLOPE_TABLE};

/// Name used when the user saves without naming the tree.
pub const UNNAMED_MEASUREMENT: &str = "Unnamed measurement";

/// Overall status of a saved reading, shared across modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Optimal,
    Good,
    Warning,
    Concern,
    Critical,
    /// No assessment applies (tree height).
    Neutral,
}

impl From<LeanSeverity> for StatusLevel {
    fn from(severity: LeanSeverity) -> Self {
        match severity {
            LeanSeverity::Optimal => StatusLevel::Optimal,
            LeanSeverity::Good => StatusLevel::Good,
            LeanSeverity::Warning => StatusLevel::Warning,
            LeanSeverity::Concern => StatusLevel::Concern,
            LeanSeverity::Critical => StatusLevel::Critical,
        }
    }
}

impl From<SlopeDifficulty> for StatusLevel {
    fn from(difficulty: SlopeDifficulty) -> Self {
        match difficulty {
            SlopeDifficulty::Flat => StatusLevel::Optimal,
            SlopeDifficulty::Gentle => StatusLevel::Good,
            SlopeDifficulty::Moderate => StatusLevel::Warning,
            SlopeDifficulty::Steep => StatusLevel::Concern,
            SlopeDifficulty::VerySteep => StatusLevel::Critical,
        }
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusLevel::Optimal => write!(f, "Optimal"),
            StatusLevel::Good => write!(f, "Good"),
            StatusLevel::Warning => write!(f, "Warning"),
            StatusLevel::Concern => write!(f, "Concern"),
            StatusLevel::Critical => write!(f, "Critical"),
            StatusLevel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// A saved clinometer reading.
///
/// `distance_m` and `estimated_height_m` are only set for
/// [`MeasurementMode::TreeHeight`]. The height is `None` as well when the
/// elevation was out of range at capture time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClinometerRecord {
    pub tree_name: String,
    pub mode: MeasurementMode,
    pub primary_angle_deg: f64,
    pub secondary_angle_deg: f64,
    pub distance_m: Option<f64>,
    pub estimated_height_m: Option<f64>,
    pub timestamp_us: u64,
    #[serde(default)]
    pub notes: String,
}

impl ClinometerRecord {
    /// Overall status for list display.
    ///
    /// Tree lean takes the worse of both axes; slope is assessed on percent
    /// grade (an out-of-range grade is critical); tree height is neutral.
    pub fn status(&self) -> StatusLevel {
        match self.mode {
            MeasurementMode::TreeLean => {
                let worst = self.primary_angle_deg.abs().max(self.secondary_angle_deg.abs());
                classify(worst, &LEAN_TABLE).into()
            }
            MeasurementMode::SlopeGrade => match percent_grade(self.primary_angle_deg) {
                Ok(grade) => classify(grade, &SLOPE_TABLE).into(),
                Err(_) => StatusLevel::Critical,
            },
            MeasurementMode::TreeHeight => StatusLevel::Neutral,
        }
    }

    /// Main value as shown in the saved-measurements list.
    pub fn formatted_primary(&self) -> String {
        match self.mode {
            MeasurementMode::TreeLean => format!("{:.1}°", self.primary_angle_deg),
            MeasurementMode::SlopeGrade => match percent_grade(self.primary_angle_deg) {
                Ok(grade) => format!("{:.1}° ({:.1}%)", self.primary_angle_deg, grade),
                Err(_) => format!("{:.1}° (out of range)", self.primary_angle_deg),
            },
            MeasurementMode::TreeHeight => match self.estimated_height_m {
                Some(height) => format!("{:.1} m", height),
                None => "out of range".to_string(),
            },
        }
    }

    /// Secondary value, empty when the mode has none.
    pub fn formatted_secondary(&self) -> String {
        match self.mode {
            MeasurementMode::TreeLean => format!("{:.1}°", self.secondary_angle_deg),
            MeasurementMode::SlopeGrade => String::new(),
            MeasurementMode::TreeHeight => self
                .distance_m
                .map(|d| format!("{:.0} m", d))
                .unwrap_or_default(),
        }
    }

    /// Label for [`formatted_secondary`](Self::formatted_secondary).
    pub fn secondary_label(&self) -> &'static str {
        match self.mode {
            MeasurementMode::TreeLean => "Secondary:",
            MeasurementMode::SlopeGrade => "",
            MeasurementMode::TreeHeight => "Distance:",
        }
    }
}
