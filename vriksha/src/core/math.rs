//! Angle helpers shared by the derivation and metric layers.
//!
//! All public angles in this crate are in degrees. Radians only appear on
//! the inbound edge ([`OrientationSample`](super::types::OrientationSample)).

/// Margin below ±90° at which a tangent is treated as singular.
///
/// `tan(89.5°) ≈ 114.6`, so grades above ~11 459 % and heights above
/// ~115× the distance are reported as out of range instead of being shown.
pub const SINGULAR_MARGIN_DEG: f64 = 0.5;

/// Largest elevation/slope angle magnitude accepted by tangent-based metrics.
pub const MAX_TANGENT_ANGLE_DEG: f64 = 90.0 - SINGULAR_MARGIN_DEG;

/// Tangent of an angle given in degrees.
///
/// # Example
/// ```
/// use vriksha::core::math::tan_deg;
///
/// assert!((tan_deg(45.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn tan_deg(angle_deg: f64) -> f64 {
    angle_deg.to_radians().tan()
}

/// True when `angle_deg` is non-finite or within the singular margin of ±90°.
#[inline]
pub fn is_near_vertical(angle_deg: f64) -> bool {
    !angle_deg.is_finite() || angle_deg.abs() >= MAX_TANGENT_ANGLE_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tan_deg_known_values() {
        assert_relative_eq!(tan_deg(0.0), 0.0);
        assert_relative_eq!(tan_deg(45.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tan_deg(-45.0), -1.0, epsilon = 1e-12);
        assert_relative_eq!(tan_deg(30.0), 3.0_f64.sqrt() / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_near_vertical() {
        assert!(!is_near_vertical(0.0));
        assert!(!is_near_vertical(89.0));
        assert!(is_near_vertical(89.5));
        assert!(is_near_vertical(-90.0));
        assert!(is_near_vertical(f64::NAN));
        assert!(is_near_vertical(f64::INFINITY));
    }
}
