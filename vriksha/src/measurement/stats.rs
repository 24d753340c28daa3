//! Aggregate statistics over a measurement history.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Summary of one quantity's history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// `max - min`
    pub range: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub count: usize,
}

impl AggregateStats {
    /// Compute statistics, or [`Error::EmptyHistory`] for an empty slice.
    pub fn compute(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyHistory);
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            mean,
            max,
            min,
            range: max - min,
            std_dev: variance.sqrt(),
            count: values.len(),
        })
    }
}

/// Mean, extrema, range and population standard deviation of `history`.
///
/// # Example
/// ```
/// use vriksha::measurement::aggregate_stats;
///
/// let stats = aggregate_stats(&[10.0, 12.0, 14.0]).unwrap();
/// assert_eq!(stats.mean, 12.0);
/// assert!(aggregate_stats(&[]).is_err());
/// ```
pub fn aggregate_stats(history: &[f64]) -> Result<AggregateStats> {
    AggregateStats::compute(history)
}
