//! Tangent-based field metrics.
//!
//! Both metrics diverge as the angle approaches ±90°. Inputs within
//! [`SINGULAR_MARGIN_DEG`](crate::core::math::SINGULAR_MARGIN_DEG) of
//! vertical are reported as [`Error::OutOfRange`] so callers can show a
//! saturated display instead of `inf`.

use crate::core::math::{is_near_vertical, tan_deg};
use crate::error::{Error, Result};

/// Slope as percent grade: `tan(angle) × 100`.
///
/// # Example
/// ```
/// use vriksha::measurement::percent_grade;
///
/// let grade = percent_grade(45.0).unwrap();
/// assert!((grade - 100.0).abs() < 1e-9);
/// assert!(percent_grade(90.0).is_err());
/// ```
pub fn percent_grade(angle_deg: f64) -> Result<f64> {
    if is_near_vertical(angle_deg) {
        return Err(Error::OutOfRange {
            quantity: "percent grade",
            value: angle_deg,
        });
    }
    Ok(tan_deg(angle_deg) * 100.0)
}

/// Tree height from horizontal distance and elevation angle to the top:
/// `distance × tan(|elevation|)`.
///
/// The sign of the elevation is ignored. Fails with
/// [`Error::InvalidDistance`] for non-positive or non-finite distance and
/// [`Error::OutOfRange`] for an elevation at or near ±90°.
pub fn estimate_height(elevation_deg: f64, distance_m: f64) -> Result<f64> {
    if !distance_m.is_finite() || distance_m <= 0.0 {
        return Err(Error::InvalidDistance(distance_m));
    }
    if is_near_vertical(elevation_deg) {
        return Err(Error::OutOfRange {
            quantity: "tree height",
            value: elevation_deg,
        });
    }
    Ok(distance_m * tan_deg(elevation_deg.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grade_known_values() {
        assert_relative_eq!(percent_grade(0.0).unwrap(), 0.0);
        assert_relative_eq!(percent_grade(45.0).unwrap(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(percent_grade(-45.0).unwrap(), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_grade_inverts_through_atan() {
        for &angle in &[-89.0, -60.0, -12.5, -0.3, 0.0, 1.0, 5.71, 33.3, 75.0, 89.4] {
            let grade = percent_grade(angle).unwrap();
            assert_relative_eq!((grade / 100.0).atan().to_degrees(), angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_grade_out_of_range() {
        for &angle in &[89.5, 90.0, -90.0, 135.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(percent_grade(angle), Err(Error::OutOfRange { .. })));
        }
    }

    #[test]
    fn test_height_reference_case() {
        let height = estimate_height(30.0, 20.0).unwrap();
        assert_relative_eq!(height, 11.547, epsilon = 1e-3);
    }

    #[test]
    fn test_height_ignores_elevation_sign() {
        assert_relative_eq!(
            estimate_height(-30.0, 20.0).unwrap(),
            estimate_height(30.0, 20.0).unwrap()
        );
    }

    #[test]
    fn test_height_at_45_degrees_equals_distance() {
        assert_relative_eq!(estimate_height(45.0, 37.0).unwrap(), 37.0, epsilon = 1e-9);
    }

    #[test]
    fn test_height_invalid_distance() {
        for &d in &[0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(estimate_height(30.0, d), Err(Error::InvalidDistance(_))));
        }
    }

    #[test]
    fn test_height_near_vertical() {
        assert!(matches!(estimate_height(89.9, 20.0), Err(Error::OutOfRange { .. })));
        assert!(matches!(estimate_height(-90.0, 20.0), Err(Error::OutOfRange { .. })));
    }
}
