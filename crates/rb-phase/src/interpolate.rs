//! Logarithmic interpolation between the reference and critical points.
//!
//! ```text
//! f       = (ln p - ln p_ref) / (ln p_c - ln p_ref)
//! ln v_l  = ln v_l,ref + f * (ln v_c - ln v_l,ref)
//! ln v_v  = ln v_v,ref + f * (ln v_c - ln v_v,ref)
//! ```
//!
//! Results are rounded to four decimal places.

use crate::error::{PhaseError, PhaseResult};
use crate::points::{CRITICAL_POINT, CriticalPoint, REFERENCE_POINT, ReferencePoint};
use rb_core::{Pressure, SpecVolume, Tolerances, ensure_finite, in_mpa, nearly_equal, round_to};
use serde::Serialize;

/// Decimal places kept in reported specific volumes.
pub const OUTPUT_DECIMALS: u32 = 4;

/// Estimated saturated specific volumes [m³/kg].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseVolumes {
    #[serde(rename = "specific_volume_liquid")]
    pub liquid: SpecVolume,
    #[serde(rename = "specific_volume_vapor")]
    pub vapor: SpecVolume,
}

/// Stateless estimator over a fixed pair of anchors.
#[derive(Debug, Clone, Copy)]
pub struct PhaseChangeEstimator {
    critical: CriticalPoint,
    reference: ReferencePoint,
    tol: Tolerances,
}

impl Default for PhaseChangeEstimator {
    fn default() -> Self {
        Self::new(CRITICAL_POINT, REFERENCE_POINT)
    }
}

impl PhaseChangeEstimator {
    pub const fn new(critical: CriticalPoint, reference: ReferencePoint) -> Self {
        Self {
            critical,
            reference,
            tol: Tolerances::DEFAULT,
        }
    }

    /// Inclusive pressure domain [MPa].
    pub fn pressure_bounds(&self) -> (f64, f64) {
        (self.reference.pressure, self.critical.pressure)
    }

    /// Estimate both phase volumes at `pressure_mpa`.
    ///
    /// Rounded phases can coincide just below the critical pressure (e.g. 9.99 MPa).
    pub fn estimate(&self, pressure_mpa: f64) -> PhaseResult<PhaseVolumes> {
        let p = self.validate(pressure_mpa)?;
        let raw = self.interpolate(p);
        let volumes = PhaseVolumes {
            liquid: round_to(raw.liquid, OUTPUT_DECIMALS),
            vapor: round_to(raw.vapor, OUTPUT_DECIMALS),
        };
        tracing::trace!(pressure_mpa = p, ?volumes, "phase-change estimate");
        Ok(volumes)
    }

    /// Same as [`estimate`](Self::estimate) for a unit-carrying pressure.
    pub fn estimate_pressure(&self, pressure: Pressure) -> PhaseResult<PhaseVolumes> {
        self.estimate(in_mpa(pressure))
    }

    /// Parse raw text (e.g. a query parameter) and estimate.
    pub fn estimate_str(&self, raw: Option<&str>) -> PhaseResult<PhaseVolumes> {
        let text = match raw.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(PhaseError::InvalidInput {
                    message: "missing required parameter: pressure".to_string(),
                });
            }
        };
        let value: f64 = text.parse().map_err(|_| PhaseError::InvalidInput {
            message: format!("pressure must be a number, got {text:?}"),
        })?;
        self.estimate(value)
    }

    fn validate(&self, pressure_mpa: f64) -> PhaseResult<f64> {
        let p = ensure_finite(pressure_mpa, "pressure")?;
        let (min, max) = self.pressure_bounds();
        if p < min || p > max {
            return Err(PhaseError::Range {
                pressure: p,
                min,
                max,
            });
        }
        Ok(p)
    }

    /// Unrounded log-space interpolation; `p` must already be validated.
    pub(crate) fn interpolate(&self, p: f64) -> PhaseVolumes {
        let crit = &self.critical;
        let refp = &self.reference;

        if nearly_equal(p, crit.pressure, self.tol) {
            return PhaseVolumes {
                liquid: crit.specific_volume,
                vapor: crit.specific_volume,
            };
        }

        let factor = (p.ln() - refp.pressure.ln()) / (crit.pressure.ln() - refp.pressure.ln());
        let ln_vc = crit.specific_volume.ln();
        let ln_liquid = refp.specific_volume_liquid.ln()
            + factor * (ln_vc - refp.specific_volume_liquid.ln());
        let ln_vapor =
            refp.specific_volume_vapor.ln() + factor * (ln_vc - refp.specific_volume_vapor.ln());

        PhaseVolumes {
            liquid: ln_liquid.exp(),
            vapor: ln_vapor.exp(),
        }
    }
}

/// Estimate with the built-in anchors.
pub fn estimate(pressure_mpa: f64) -> PhaseResult<PhaseVolumes> {
    PhaseChangeEstimator::default().estimate(pressure_mpa)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn liquid_below_vapor_inside_domain(p in 0.050_000_1_f64..9.999_999_f64) {
            let v = PhaseChangeEstimator::default().interpolate(p);
            prop_assert!(v.liquid < v.vapor);
        }

        #[test]
        fn unrounded_volumes_are_strictly_monotone(a in 0.05_f64..10.0, b in 0.05_f64..10.0) {
            prop_assume!((a - b).abs() > 1e-6);
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            let est = PhaseChangeEstimator::default();
            let v_lo = est.interpolate(lo);
            let v_hi = est.interpolate(hi);
            prop_assert!(v_lo.liquid < v_hi.liquid);
            prop_assert!(v_lo.vapor > v_hi.vapor);
        }
    }
}
