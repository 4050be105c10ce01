//! Ship systems that can be damaged, with the codes used to repair them.

use crate::error::{ShipError, ShipResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipSystem {
    Navigation,
    Communications,
    LifeSupport,
    Engines,
    DeflectorShield,
}

impl ShipSystem {
    pub const ALL: [ShipSystem; 5] = [
        Self::Navigation,
        Self::Communications,
        Self::LifeSupport,
        Self::Engines,
        Self::DeflectorShield,
    ];

    /// Wire name, as reported by the status endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Communications => "communications",
            Self::LifeSupport => "life_support",
            Self::Engines => "engines",
            Self::DeflectorShield => "deflector_shield",
        }
    }

    pub fn repair_code(&self) -> &'static str {
        match self {
            Self::Navigation => "NAV-01",
            Self::Communications => "COM-02",
            Self::LifeSupport => "LIFE-03",
            Self::Engines => "ENG-04",
            Self::DeflectorShield => "SHLD-05",
        }
    }
}

impl fmt::Display for ShipSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipSystem {
    type Err = ShipError;

    fn from_str(s: &str) -> ShipResult<Self> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|sys| sys.name() == key)
            .ok_or_else(|| ShipError::UnknownSystem {
                name: key.to_string(),
            })
    }
}
