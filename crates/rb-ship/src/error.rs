//! Ship mechanic errors.

use thiserror::Error;

pub type ShipResult<T> = Result<T, ShipError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShipError {
    #[error("Unknown ship system: {name}")]
    UnknownSystem { name: String },

    #[error("Damage control state poisoned")]
    StatePoisoned,
}
