use anchor_lang::prelude::*;

use crate::constants::WATERED_STATE_WINDOW;
use crate::error::{PlantError, PlantResult};
use crate::state::{LifecycleState, WateredState, WateringLog};
use crate::utils::{growth, time};

/// A plant PDA. Only facts live here; growth and hydration are derived on read.
/// Seeds: [b"plant", id.to_le_bytes()]
#[account]
pub struct Plant {
    /// Registry-assigned id, never reused.
    pub id: u64,
    /// Current holder; the only key allowed to water or transfer.
    pub owner: Pubkey,
    /// Mint timestamp (Unix seconds, UTC).
    pub generated_at: i64,
    /// Cadence chosen at mint (>= 1).
    pub watering_frequency_in_days: u16,
    /// Bump seed for PDA derivation.
    pub bump: u8,
}

impl Plant {
    pub const SIZE: usize =
        8 +  // id
        32 + // owner
        8 +  // generated_at
        2 +  // watering_frequency_in_days
        1;   // bump

    pub fn new(
        id: u64,
        owner: Pubkey,
        generated_at: i64,
        watering_frequency_in_days: u16,
        bump: u8,
    ) -> PlantResult<Self> {
        if watering_frequency_in_days == 0 {
            return Err(PlantError::InvalidCadence);
        }
        if owner == Pubkey::default() {
            return Err(PlantError::InvalidPubkey);
        }
        Ok(Self {
            id,
            owner,
            generated_at,
            watering_frequency_in_days,
            bump,
        })
    }

    pub fn ensure_owner(&self, actor: &Pubkey) -> PlantResult<()> {
        if self.owner != *actor {
            return Err(PlantError::NotOwner);
        }
        Ok(())
    }

    /// Reassign ownership. Leaves `owner` untouched on failure.
    pub fn transfer(&mut self, from: &Pubkey, to: Pubkey) -> PlantResult<()> {
        self.ensure_owner(from)?;
        if to == Pubkey::default() {
            return Err(PlantError::InvalidPubkey);
        }
        self.owner = to;
        Ok(())
    }

    /// Owner-gated append of `now_ts` to this plant's log.
    pub fn water(&self, log: &mut WateringLog, actor: &Pubkey, now_ts: i64) -> PlantResult<()> {
        self.ensure_owner(actor)?;
        log.record(self.id, now_ts)
    }

    pub fn lifecycle_state(&self, now_ts: i64) -> PlantResult<LifecycleState> {
        growth::lifecycle_state(self.generated_at, now_ts)
    }

    pub fn watered_state(&self, log: &WateringLog, now_ts: i64) -> PlantResult<WateredState> {
        let latest = log.latest_entries(self.id, WATERED_STATE_WINDOW)?;
        growth::watered_state(
            self.generated_at,
            self.watering_frequency_in_days,
            &latest,
            now_ts,
        )
    }

    pub fn describe(&self, log: &WateringLog, now_ts: i64) -> PlantResult<PlantDescription> {
        Ok(PlantDescription {
            id: self.id,
            owner: self.owner,
            generated_at: self.generated_at,
            watering_frequency_in_days: self.watering_frequency_in_days,
            age_in_days: time::age_in_days(now_ts, self.generated_at)?,
            watering_count: log.length(self.id)?,
            last_watered_at: log.last_watered_at(),
            lifecycle_state: self.lifecycle_state(now_ts)?,
            watered_state: self.watered_state(log, now_ts)?,
        })
    }
}

/// Facts plus derived state of one plant at a query time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantDescription {
    pub id: u64,
    pub owner: Pubkey,
    pub generated_at: i64,
    pub watering_frequency_in_days: u16,
    pub age_in_days: i64,
    pub watering_count: u64,
    pub last_watered_at: Option<i64>,
    pub lifecycle_state: LifecycleState,
    pub watered_state: WateredState,
}
