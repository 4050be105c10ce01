//! rb-phase: liquid/vapor specific-volume estimates along the saturation line.
//!
//! The estimator interpolates in log-space between two fixed anchors: a
//! low-pressure reference state and the critical point, where both phases
//! share one specific volume.
//!
//! # Example
//!
//! ```
//! use rb_phase::{estimate, PhaseError};
//!
//! let v = estimate(10.0).unwrap();
//! assert_eq!(v.liquid, v.vapor);
//!
//! assert!(matches!(estimate(11.0), Err(PhaseError::Range { .. })));
//! ```

pub mod error;
pub mod interpolate;
pub mod points;

pub use error::{PhaseError, PhaseResult};
pub use interpolate::{PhaseChangeEstimator, PhaseVolumes, estimate};
pub use points::{CRITICAL_POINT, CriticalPoint, REFERENCE_POINT, ReferencePoint};
