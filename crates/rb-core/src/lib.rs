//! rb-core: shared foundation for repairbay.
//!
//! Contains:
//! - units (uom SI pressure + specific volume conventions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
