//! Saturation-line estimator tests against the public API.
//!
//! Expected values come from the fixed anchors; rounding to four decimals
//! sets the tolerance.

use proptest::prelude::*;
use rb_phase::{CRITICAL_POINT, PhaseChangeEstimator, PhaseError, REFERENCE_POINT, estimate};

const ROUNDING_TOL: f64 = 1e-4;

#[test]
fn critical_point_phases_coincide() {
    let v = estimate(CRITICAL_POINT.pressure).unwrap();
    assert_eq!(v.liquid, v.vapor);
    assert_eq!(v.liquid, 0.0035);
}

#[test]
fn reference_point_matches_anchor() {
    let v = estimate(REFERENCE_POINT.pressure).unwrap();
    assert!((v.liquid - 0.00105).abs() <= ROUNDING_TOL, "liquid = {}", v.liquid);
    assert!((v.vapor - 30.0).abs() <= ROUNDING_TOL, "vapor = {}", v.vapor);
}

#[test]
fn known_midpoints() {
    // Values follow from the log-space formula at 1 MPa and 0.1 MPa.
    let v = estimate(1.0).unwrap();
    assert!((v.liquid - 0.0021).abs() <= ROUNDING_TOL, "liquid = {}", v.liquid);
    assert!((v.vapor - 0.1792).abs() <= ROUNDING_TOL, "vapor = {}", v.vapor);

    let v = estimate(0.1).unwrap();
    assert!((v.liquid - 0.0012).abs() <= ROUNDING_TOL, "liquid = {}", v.liquid);
    assert!((v.vapor - 9.1745).abs() <= ROUNDING_TOL, "vapor = {}", v.vapor);
}

#[test]
fn serializes_with_wire_names() {
    let v = estimate(10.0).unwrap();
    let json = serde_json::to_value(v).unwrap();
    assert_eq!(json["specific_volume_liquid"], 0.0035);
    assert_eq!(json["specific_volume_vapor"], 0.0035);
    assert_eq!(json.as_object().unwrap().len(), 2);
}

#[test]
fn bounds_are_inclusive() {
    let est = PhaseChangeEstimator::default();
    assert_eq!(est.pressure_bounds(), (0.05, 10.0));
    assert!(est.estimate(0.05).is_ok());
    assert!(est.estimate(10.0).is_ok());
}

#[test]
fn below_reference_is_range_error() {
    let err = estimate(0.01).unwrap_err();
    assert!(matches!(err, PhaseError::Range { .. }));
    let msg = err.to_string();
    assert!(msg.contains("0.05") && msg.contains("10.0"), "{msg}");
}

#[test]
fn above_critical_is_range_error() {
    assert!(matches!(estimate(11.0), Err(PhaseError::Range { .. })));
}

#[test]
fn unparsable_or_missing_is_invalid_input() {
    let est = PhaseChangeEstimator::default();
    assert!(matches!(
        est.estimate_str(Some("abc")),
        Err(PhaseError::InvalidInput { .. })
    ));
    assert!(matches!(
        est.estimate_str(None),
        Err(PhaseError::InvalidInput { .. })
    ));
}

#[test]
fn rounded_volumes_follow_pressure() {
    let mut prev = estimate(0.05).unwrap();
    for i in 1..=200 {
        let p = 0.05 + (10.0 - 0.05) * f64::from(i) / 200.0;
        let p = p.min(10.0);
        let v = estimate(p).unwrap();
        assert!(v.liquid >= prev.liquid, "liquid dropped at p = {p}");
        assert!(v.vapor <= prev.vapor, "vapor rose at p = {p}");
        prev = v;
    }
}

proptest! {
    #[test]
    fn liquid_never_exceeds_vapor(p in 0.05_f64..=10.0) {
        let v = estimate(p).unwrap();
        prop_assert!(v.liquid <= v.vapor);
    }

    #[test]
    fn liquid_strictly_below_vapor_away_from_critical(p in 0.05_f64..9.0) {
        let v = estimate(p).unwrap();
        prop_assert!(v.liquid < v.vapor);
    }

    #[test]
    fn repeated_calls_are_identical(p in 0.05_f64..=10.0) {
        let est = PhaseChangeEstimator::default();
        prop_assert_eq!(est.estimate(p).unwrap(), est.estimate(p).unwrap());
    }

    #[test]
    fn outside_domain_always_rejected(p in prop_oneof![-100.0_f64..0.049_999, 10.000_001_f64..1e6]) {
        let is_range = matches!(estimate(p), Err(PhaseError::Range { .. }));
        prop_assert!(is_range);
    }
}
