use anchor_lang::prelude::*;

use crate::error::{PlantError, PlantResult};

/// Append-only watering history of one plant.
/// Seeds: [b"watering_log", plant_id.to_le_bytes()]
#[account]
pub struct WateringLog {
    /// Plant this log belongs to (1:1, created with the plant).
    pub plant_id: u64,
    /// Watering instants (Unix seconds), in append order; never decreasing.
    pub timestamps: Vec<i64>,
    /// Bump seed for PDA derivation.
    pub bump: u8,
}

impl WateringLog {
    /// Account space (with discriminator) for a log holding `entries` timestamps.
    pub const fn space(entries: usize) -> usize {
        8 +               // discriminator
        8 +               // plant_id
        4 + 8 * entries + // timestamps
        1                 // bump
    }

    pub fn new(plant_id: u64, bump: u8) -> Self {
        Self {
            plant_id,
            timestamps: Vec::new(),
            bump,
        }
    }

    /// Append a watering instant. Caller has already authorized the actor.
    pub fn record(&mut self, plant_id: u64, timestamp: i64) -> PlantResult<()> {
        self.ensure_plant(plant_id)?;
        if let Some(&tail) = self.timestamps.last() {
            if timestamp < tail {
                return Err(PlantError::InvalidTimestamp);
            }
        }
        self.timestamps.push(timestamp);
        Ok(())
    }

    /// Up to `n` most recent timestamps, newest first.
    pub fn latest_entries(&self, plant_id: u64, n: usize) -> PlantResult<Vec<i64>> {
        self.ensure_plant(plant_id)?;
        Ok(self.timestamps.iter().rev().take(n).copied().collect())
    }

    pub fn length(&self, plant_id: u64) -> PlantResult<u64> {
        self.ensure_plant(plant_id)?;
        Ok(self.timestamps.len() as u64)
    }

    pub fn last_watered_at(&self) -> Option<i64> {
        self.timestamps.last().copied()
    }

    fn ensure_plant(&self, plant_id: u64) -> PlantResult<()> {
        if self.plant_id != plant_id {
            return Err(PlantError::NotFound);
        }
        Ok(())
    }
}
