//! Damage control: which ship system is currently broken.
//!
//! One `DamageControl` is built at startup and handed to every request
//! handler. If no system is seeded, the first query picks one uniformly at
//! random and keeps it.

use crate::error::{ShipError, ShipResult};
use crate::systems::ShipSystem;
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::RwLock;

#[derive(Debug)]
pub struct DamageControl {
    current: RwLock<Option<ShipSystem>>,
}

impl Default for DamageControl {
    fn default() -> Self {
        Self::new(Some(ShipSystem::Navigation))
    }
}

impl DamageControl {
    pub fn new(initial: Option<ShipSystem>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Damaged system without selecting one.
    pub fn peek(&self) -> ShipResult<Option<ShipSystem>> {
        let guard = self.current.read().map_err(|_| ShipError::StatePoisoned)?;
        Ok(*guard)
    }

    /// Damaged system, drawn from the thread RNG on first use.
    pub fn current(&self) -> ShipResult<ShipSystem> {
        self.current_with(&mut rand::thread_rng())
    }

    /// Damaged system, drawn from `rng` on first use.
    pub fn current_with<R: Rng + ?Sized>(&self, rng: &mut R) -> ShipResult<ShipSystem> {
        if let Some(sys) = self.peek()? {
            return Ok(sys);
        }

        let mut guard = self.current.write().map_err(|_| ShipError::StatePoisoned)?;
        // Another request may have selected while we waited for the write lock.
        if let Some(sys) = *guard {
            return Ok(sys);
        }
        let picked = *ShipSystem::ALL
            .choose(rng)
            .unwrap_or(&ShipSystem::Navigation);
        tracing::info!(system = %picked, "damaged system selected");
        *guard = Some(picked);
        Ok(picked)
    }

    /// Replace the damaged system; `None` re-arms random selection.
    pub fn set(&self, system: Option<ShipSystem>) -> ShipResult<()> {
        let mut guard = self.current.write().map_err(|_| ShipError::StatePoisoned)?;
        *guard = system;
        Ok(())
    }
}
