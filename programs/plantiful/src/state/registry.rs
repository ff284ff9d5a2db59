use anchor_lang::prelude::*;

use crate::error::{PlantError, PlantResult};

/// Singleton registry PDA: id allocation for minted plants.
/// Seeds: [b"registry"]
#[account]
pub struct Registry {
    /// Key that initialized the registry.
    pub authority: Pubkey,
    /// Id the next minted plant receives.
    pub next_plant_id: u64,
    /// Bump seed for PDA derivation.
    pub bump: u8,
}

impl Registry {
    pub const SIZE: usize =
        32 + // authority
        8 +  // next_plant_id
        1;   // bump

    /// Hand out the next id. Ids are monotonic and never reused.
    pub fn allocate_plant_id(&mut self) -> PlantResult<u64> {
        let id = self.next_plant_id;
        self.next_plant_id = id.checked_add(1).ok_or(PlantError::MathOverflow)?;
        Ok(id)
    }
}
