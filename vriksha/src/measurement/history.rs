//! Per-tree measurement history.
//!
//! Holds committed measurements for one tree, one list per physical
//! quantity. Identity, timestamps and the owning tree are assigned here
//! so a persistence layer only has to serialize the whole value.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::severity::{classify, StabilityRating, STABILITY_TABLE};
use super::stats::{aggregate_stats, AggregateStats};

/// Opaque reference to the owning tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeRef(pub u64);

/// Physical quantity of a recorded measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementKind {
    /// Tree height, meters.
    Height,
    /// Trunk length/width from a two-point AR measurement, meters.
    TrunkLength,
    /// Crown projection diameter, meters.
    CrownDiameter,
    /// Trunk inclination, degrees.
    Inclination,
}

impl MeasurementKind {
    /// Unit suffix used when formatting values.
    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementKind::Inclination => "°",
            _ => " m",
        }
    }

    /// Format `value` with two decimals and the kind's unit.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.2}{}", value, self.unit())
    }
}

/// One committed measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedMeasurement {
    pub id: u64,
    pub kind: MeasurementKind,
    pub value: f64,
    pub recorded_at_us: u64,
    #[serde(default)]
    pub notes: String,
    pub tree: TreeRef,
}

impl RecordedMeasurement {
    pub fn formatted(&self) -> String {
        self.kind.format_value(self.value)
    }
}

/// All measurements recorded for one tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeMeasurements {
    tree: TreeRef,
    next_id: u64,
    records: Vec<RecordedMeasurement>,
}

impl TreeMeasurements {
    pub fn new(tree: TreeRef) -> Self {
        Self {
            tree,
            next_id: 1,
            records: Vec::new(),
        }
    }

    pub fn tree(&self) -> TreeRef {
        self.tree
    }

    /// Commit a measurement and return it.
    ///
    /// Non-finite values are rejected with [`Error::InvalidValue`].
    pub fn record(
        &mut self,
        kind: MeasurementKind,
        value: f64,
        notes: impl Into<String>,
        recorded_at_us: u64,
    ) -> Result<&RecordedMeasurement> {
        if !value.is_finite() {
            return Err(Error::InvalidValue(value));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.records.push(RecordedMeasurement {
            id,
            kind,
            value,
            recorded_at_us,
            notes: notes.into(),
            tree: self.tree,
        });
        log::debug!(
            "Tree {}: recorded {:?} #{} = {}",
            self.tree.0,
            kind,
            id,
            kind.format_value(value)
        );

        // Just pushed
        Ok(&self.records[self.records.len() - 1])
    }

    /// Records of `kind`, newest first. Ties keep insertion order reversed.
    pub fn history(&self, kind: MeasurementKind) -> Vec<&RecordedMeasurement> {
        let mut records: Vec<_> = self.records.iter().filter(|r| r.kind == kind).collect();
        records.reverse();
        records.sort_by(|a, b| b.recorded_at_us.cmp(&a.recorded_at_us));
        records
    }

    /// Most recent record of `kind`.
    pub fn latest(&self, kind: MeasurementKind) -> Option<&RecordedMeasurement> {
        self.history(kind).into_iter().next()
    }

    /// Values of `kind` in insertion order.
    pub fn values(&self, kind: MeasurementKind) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.value)
            .collect()
    }

    /// Number of records of `kind`.
    pub fn count(&self, kind: MeasurementKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    /// Aggregate statistics for `kind`.
    pub fn stats(&self, kind: MeasurementKind) -> Result<AggregateStats> {
        aggregate_stats(&self.values(kind))
    }

    /// Stability of the inclination history, rated on its standard deviation.
    pub fn stability(&self) -> Result<StabilityRating> {
        let stats = self.stats(MeasurementKind::Inclination)?;
        Ok(classify(stats.std_dev, &STABILITY_TABLE))
    }

    /// Remove a record by id. Returns the removed record.
    pub fn remove(&mut self, id: u64) -> Option<RecordedMeasurement> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tree() -> TreeMeasurements {
        TreeMeasurements::new(TreeRef(7))
    }

    #[test]
    fn test_record_assigns_ids_and_owner() {
        let mut log = tree();
        let first = log.record(MeasurementKind::Height, 12.0, "", 100).unwrap().id;
        let second = log.record(MeasurementKind::CrownDiameter, 4.5, "north side", 200).unwrap();
        assert_eq!(first, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.tree, TreeRef(7));
        assert_eq!(second.notes, "north side");
    }

    #[test]
    fn test_record_rejects_non_finite() {
        let mut log = tree();
        assert!(matches!(
            log.record(MeasurementKind::Height, f64::INFINITY, "", 0),
            Err(Error::InvalidValue(_))
        ));
        assert_eq!(log.count(MeasurementKind::Height), 0);
    }

    #[test]
    fn test_history_newest_first() {
        let mut log = tree();
        log.record(MeasurementKind::Height, 10.0, "", 300).unwrap();
        log.record(MeasurementKind::Height, 11.0, "", 100).unwrap();
        log.record(MeasurementKind::TrunkLength, 0.8, "", 400).unwrap();
        log.record(MeasurementKind::Height, 12.0, "", 200).unwrap();

        let values: Vec<f64> = log
            .history(MeasurementKind::Height)
            .iter()
            .map(|r| r.value)
            .collect();
        assert_eq!(values, vec![10.0, 12.0, 11.0]);
        assert_eq!(
            log.latest(MeasurementKind::Height).map(|r| r.value),
            Some(10.0)
        );
        assert!(log.latest(MeasurementKind::Inclination).is_none());
    }

    #[test]
    fn test_stats_per_kind() {
        let mut log = tree();
        for (i, v) in [10.0, 12.0, 14.0].into_iter().enumerate() {
            log.record(MeasurementKind::Height, v, "", i as u64).unwrap();
        }
        log.record(MeasurementKind::CrownDiameter, 99.0, "", 10).unwrap();

        let stats = log.stats(MeasurementKind::Height).unwrap();
        assert_relative_eq!(stats.mean, 12.0);
        assert_relative_eq!(stats.std_dev, 1.633, epsilon = 1e-3);
        assert!(matches!(
            log.stats(MeasurementKind::TrunkLength),
            Err(Error::EmptyHistory)
        ));
    }

    #[test]
    fn test_stability_rating() {
        let mut log = tree();
        assert!(matches!(log.stability(), Err(Error::EmptyHistory)));

        for (i, v) in [3.0, 3.5, 2.5].into_iter().enumerate() {
            log.record(MeasurementKind::Inclination, v, "", i as u64).unwrap();
        }
        assert_eq!(log.stability().unwrap(), StabilityRating::Excellent);

        log.record(MeasurementKind::Inclination, 30.0, "", 10).unwrap();
        assert_eq!(log.stability().unwrap(), StabilityRating::Variable);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(MeasurementKind::Height.format_value(12.345), "12.35 m");
        assert_eq!(MeasurementKind::Inclination.format_value(3.0), "3.00°");
        assert_eq!(MeasurementKind::CrownDiameter.format_value(12.0), "12.00 m");
        assert!(!MeasurementKind::TrunkLength.format_value(1.0).contains("  "));
    }

    #[test]
    fn test_remove() {
        let mut log = tree();
        let id = log.record(MeasurementKind::Height, 10.0, "", 0).unwrap().id;
        assert!(log.remove(id).is_some());
        assert!(log.remove(id).is_none());
        assert_eq!(log.count(MeasurementKind::Height), 0);
    }

    #[test]
    fn test_json_roundtrip_keeps_id_sequence() {
        let mut log = tree();
        log.record(MeasurementKind::Height, 10.0, "", 0).unwrap();
        let json = serde_json::to_string(&log).unwrap();
        let mut restored: TreeMeasurements = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, log);
        let id = restored.record(MeasurementKind::Height, 11.0, "", 1).unwrap().id;
        assert_eq!(id, 2);
    }
}
