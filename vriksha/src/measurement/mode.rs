//! Measurement modes and lean axes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the session is measuring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    /// Deviation of the trunk from vertical.
    ///
    /// The device is aimed along the trunk; 0° means perfectly upright.
    #[default]
    TreeLean,

    /// Ground slope, reported as angle and percent grade.
    SlopeGrade,

    /// Elevation angle to the crown top, combined with horizontal
    /// distance to estimate height.
    TreeHeight,
}

impl MeasurementMode {
    /// Short description for display.
    pub fn description(&self) -> &'static str {
        match self {
            MeasurementMode::TreeLean => "Measures the tree's deviation from vertical",
            MeasurementMode::SlopeGrade => "Measures the slope of the ground",
            MeasurementMode::TreeHeight => "Estimates height from distance and angle",
        }
    }

    /// Label of the primary angle channel for this mode.
    pub fn axis_label(&self, axis: MeasurementAxis) -> &'static str {
        match self {
            MeasurementMode::TreeLean => match axis {
                MeasurementAxis::Longitudinal => "Longitudinal",
                MeasurementAxis::Lateral => "Lateral",
            },
            MeasurementMode::SlopeGrade => "Slope",
            MeasurementMode::TreeHeight => "Elevation",
        }
    }
}

impl std::fmt::Display for MeasurementMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementMode::TreeLean => write!(f, "Tree lean"),
            MeasurementMode::SlopeGrade => write!(f, "Slope grade"),
            MeasurementMode::TreeHeight => write!(f, "Tree height"),
        }
    }
}

/// Which raw channel is primary for tree lean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementAxis {
    /// Forward/backward lean: pitch is primary.
    #[default]
    Longitudinal,
    /// Side-to-side lean: roll is primary.
    Lateral,
}

impl MeasurementAxis {
    /// The other axis.
    pub fn swapped(self) -> Self {
        match self {
            MeasurementAxis::Longitudinal => MeasurementAxis::Lateral,
            MeasurementAxis::Lateral => MeasurementAxis::Longitudinal,
        }
    }
}

impl std::fmt::Display for MeasurementAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasurementAxis::Longitudinal => write!(f, "Longitudinal"),
            MeasurementAxis::Lateral => write!(f, "Lateral"),
        }
    }
}
