//! rb-ship: the damaged-system game mechanic.
//!
//! Provides:
//! - Ship system catalog with repair codes
//! - Damage control state, shared by handlers instead of a process global
//! - Repair bay page rendering

pub mod damage;
pub mod error;
pub mod repair_bay;
pub mod systems;

pub use damage::DamageControl;
pub use error::{ShipError, ShipResult};
pub use repair_bay::render_repair_bay;
pub use systems::ShipSystem;
