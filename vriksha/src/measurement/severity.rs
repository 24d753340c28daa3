//! Severity classification against fixed threshold tables.
//!
//! Every domain uses the same rule: compare `|magnitude|` against ascending
//! breakpoints with strict `<` and take the first bucket whose bound is
//! larger. Anything else, NaN included, lands in the most severe bucket.
//!
//! | Domain                | Breakpoints        | Buckets                                  |
//! |-----------------------|--------------------|------------------------------------------|
//! | Tree lean (°)         | 1.5, 5, 10, 15     | optimal, good, warning, concern, critical|
//! | Slope grade (%)       | 5, 10, 20, 30      | flat, gentle, moderate, steep, very-steep|
//! | Stability (stddev °)  | 2, 5, 10           | excellent, good, fair, variable          |
//! | Inclination class (°) | 5, 15, 30, 80      | A, B, C, C-D, D                          |

use serde::{Deserialize, Serialize};

/// Ascending breakpoints plus the fallback bucket.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTable<L: 'static> {
    /// `(upper bound, bucket)` pairs sorted by bound.
    pub breakpoints: &'static [(f64, L)],
    /// Bucket used when no bound exceeds the magnitude.
    pub most_severe: L,
}

/// Classify `magnitude` against `table`.
///
/// # Example
/// ```
/// use vriksha::measurement::{classify, LeanSeverity, LEAN_TABLE};
///
/// assert_eq!(classify(1.5, &LEAN_TABLE), LeanSeverity::Good);
/// assert_eq!(classify(-0.4, &LEAN_TABLE), LeanSeverity::Optimal);
/// assert_eq!(classify(f64::NAN, &LEAN_TABLE), LeanSeverity::Critical);
/// ```
pub fn classify<L: Copy + 'static>(magnitude: f64, table: &SeverityTable<L>) -> L {
    let magnitude = magnitude.abs();
    table
        .breakpoints
        .iter()
        .find(|(bound, _)| magnitude < *bound)
        .map(|&(_, bucket)| bucket)
        .unwrap_or(table.most_severe)
}

/// Trunk lean from vertical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeanSeverity {
    Optimal,
    Good,
    Warning,
    Concern,
    Critical,
}

impl LeanSeverity {
    /// Field assessment text.
    pub fn assessment(&self) -> &'static str {
        match self {
            LeanSeverity::Optimal => "Perfectly vertical",
            LeanSeverity::Good => "Minimal lean",
            LeanSeverity::Warning => "Moderate lean",
            LeanSeverity::Concern => "Significant lean",
            LeanSeverity::Critical => "Severe lean",
        }
    }
}

/// Ground slope difficulty, classified on percent grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlopeDifficulty {
    Flat,
    Gentle,
    Moderate,
    Steep,
    VerySteep,
}

impl SlopeDifficulty {
    pub fn assessment(&self) -> &'static str {
        match self {
            SlopeDifficulty::Flat => "Flat ground",
            SlopeDifficulty::Gentle => "Gentle slope",
            SlopeDifficulty::Moderate => "Moderate slope",
            SlopeDifficulty::Steep => "Steep slope",
            SlopeDifficulty::VerySteep => "Very steep slope",
        }
    }
}

/// Consistency of repeated inclination readings (population stddev).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StabilityRating {
    Excellent,
    Good,
    Fair,
    Variable,
}

/// Category of a single inclination reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InclinationClass {
    A,
    B,
    C,
    #[serde(rename = "C-D")]
    CD,
    D,
}

pub const LEAN_TABLE: SeverityTable<LeanSeverity> = SeverityTable {
    breakpoints: &[
        (1.5, LeanSeverity::Optimal),
        (5.0, LeanSeverity::Good),
        (10.0, LeanSeverity::Warning),
        (15.0, LeanSeverity::Concern),
    ],
    most_severe: LeanSeverity::Critical,
};

pub const SLOPE_TABLE: SeverityTable<SlopeDifficulty> = SeverityTable {
    breakpoints: &[
        (5.0, SlopeDifficulty::Flat),
        (10.0, SlopeDifficulty::Gentle),
        (20.0, SlopeDifficulty::Moderate),
        (30.0, SlopeDifficulty::Steep),
    ],
    most_severe: SlopeDifficulty::VerySteep,
};

pub const STABILITY_TABLE: SeverityTable<StabilityRating> = SeverityTable {
    breakpoints: &[
        (2.0, StabilityRating::Excellent),
        (5.0, StabilityRating::Good),
        (10.0, StabilityRating::Fair),
    ],
    most_severe: StabilityRating::Variable,
};

pub const INCLINATION_CLASS_TABLE: SeverityTable<InclinationClass> = SeverityTable {
    breakpoints: &[
        (5.0, InclinationClass::A),
        (15.0, InclinationClass::B),
        (30.0, InclinationClass::C),
        (80.0, InclinationClass::CD),
    ],
    most_severe: InclinationClass::D,
};

/// Assessment domain selecting a threshold table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityDomain {
    /// Lean angle in degrees.
    TreeLean,
    /// Percent grade.
    SlopeGrade,
    /// Standard deviation of an inclination history in degrees.
    InclinationStability,
    /// Single inclination reading in degrees.
    InclinationClass,
}

/// Bucket from any domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Lean(LeanSeverity),
    Slope(SlopeDifficulty),
    Stability(StabilityRating),
    Class(InclinationClass),
}

impl SeverityLevel {
    /// Position within its domain, 0 = least severe.
    pub fn rank(&self) -> u8 {
        match self {
            SeverityLevel::Lean(l) => *l as u8,
            SeverityLevel::Slope(s) => *s as u8,
            SeverityLevel::Stability(s) => *s as u8,
            SeverityLevel::Class(c) => *c as u8,
        }
    }

    /// Short lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Lean(l) => match l {
                LeanSeverity::Optimal => "optimal",
                LeanSeverity::Good => "good",
                LeanSeverity::Warning => "warning",
                LeanSeverity::Concern => "concern",
                LeanSeverity::Critical => "critical",
            },
            SeverityLevel::Slope(s) => match s {
                SlopeDifficulty::Flat => "flat",
                SlopeDifficulty::Gentle => "gentle",
                SlopeDifficulty::Moderate => "moderate",
                SlopeDifficulty::Steep => "steep",
                SlopeDifficulty::VerySteep => "very-steep",
            },
            SeverityLevel::Stability(s) => match s {
                StabilityRating::Excellent => "excellent",
                StabilityRating::Good => "good",
                StabilityRating::Fair => "fair",
                StabilityRating::Variable => "variable",
            },
            SeverityLevel::Class(c) => match c {
                InclinationClass::A => "A",
                InclinationClass::B => "B",
                InclinationClass::C => "C",
                InclinationClass::CD => "C-D",
                InclinationClass::D => "D",
            },
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `magnitude` in the given domain.
pub fn classify_severity(domain: SeverityDomain, magnitude: f64) -> SeverityLevel {
    match domain {
        SeverityDomain::TreeLean => SeverityLevel::Lean(classify(magnitude, &LEAN_TABLE)),
        SeverityDomain::SlopeGrade => SeverityLevel::Slope(classify(magnitude, &SLOPE_TABLE)),
        SeverityDomain::InclinationStability => {
            SeverityLevel::Stability(classify(magnitude, &STABILITY_TABLE))
        }
        SeverityDomain::InclinationClass => {
            SeverityLevel::Class(classify(magnitude, &INCLINATION_CLASS_TABLE))
        }
    }
}
