//! Per-tree measurement history and stability assessment.

use approx::assert_relative_eq;
use vriksha::{
    aggregate_stats, Error, MeasurementKind, Point3, StabilityRating, TreeMeasurements, TreeRef,
    TwoPointMeasurement,
};

#[test]
fn test_repeated_lean_readings() {
    let mut tree = TreeMeasurements::new(TreeRef(7));
    for (i, value) in [4.0, 4.5, 3.5, 4.0].into_iter().enumerate() {
        tree.record(MeasurementKind::Inclination, value, "", i as u64 * 1_000)
            .unwrap();
    }

    let stats = tree.stats(MeasurementKind::Inclination).unwrap();
    assert_eq!(stats.count, 4);
    assert_relative_eq!(stats.mean, 4.0);
    assert_relative_eq!(stats.range, 1.0);
    assert_relative_eq!(stats.std_dev, 0.125_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(tree.stability().unwrap(), StabilityRating::Excellent);
}

#[test]
fn test_scattered_readings_rated_variable() {
    let mut tree = TreeMeasurements::new(TreeRef(1));
    for (i, value) in [0.0, 25.0, 2.0, 30.0].into_iter().enumerate() {
        tree.record(MeasurementKind::Inclination, value, "", i as u64)
            .unwrap();
    }
    assert_eq!(tree.stability().unwrap(), StabilityRating::Variable);
}

#[test]
fn test_no_inclination_history() {
    let mut tree = TreeMeasurements::new(TreeRef(2));
    tree.record(MeasurementKind::Height, 18.2, "laser", 0).unwrap();

    assert!(matches!(tree.stability(), Err(Error::EmptyHistory)));
    assert!(matches!(aggregate_stats(&[]), Err(Error::EmptyHistory)));
}

#[test]
fn test_latest_and_remove() {
    let mut tree = TreeMeasurements::new(TreeRef(3));
    let first = tree
        .record(MeasurementKind::CrownDiameter, 6.0, "", 100)
        .unwrap()
        .id;
    tree.record(MeasurementKind::CrownDiameter, 6.4, "", 200)
        .unwrap();

    assert_relative_eq!(
        tree.latest(MeasurementKind::CrownDiameter).unwrap().value,
        6.4
    );
    assert!(tree.remove(first).is_some());
    assert_eq!(tree.count(MeasurementKind::CrownDiameter), 1);
}

#[test]
fn test_crown_diameter_from_two_points() {
    let mut span = TwoPointMeasurement::default();
    assert!(span.place(Point3::new(0.0, 0.0, 0.0)).is_none());
    let distance = span.place(Point3::new(3.0, 0.0, 4.0)).unwrap();
    assert_relative_eq!(distance, 5.0);

    let mut tree = TreeMeasurements::new(TreeRef(4));
    let record = tree
        .record(MeasurementKind::CrownDiameter, distance, "", 0)
        .unwrap();
    assert_eq!(record.formatted(), "5.00 m");
}
