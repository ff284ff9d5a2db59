use anchor_lang::prelude::*;

use crate::constants::{PLANT_SEED, WATERING_LOG_SEED};
use crate::state::{Plant, PlantDescription, WateringLog};

/// Read-only: emits the plant's facts and derived state at the current clock.
pub fn describe_plant(ctx: Context<DescribePlant>, _plant_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let description = ctx.accounts.plant.describe(&ctx.accounts.watering_log, now)?;
    emit!(PlantDescribed::at(&description, now));
    Ok(())
}

#[derive(Accounts)]
#[instruction(plant_id: u64)]
pub struct DescribePlant<'info> {
    #[account(
        seeds = [PLANT_SEED, plant_id.to_le_bytes().as_ref()],
        bump = plant.bump
    )]
    pub plant: Account<'info, Plant>,

    #[account(
        seeds = [WATERING_LOG_SEED, plant_id.to_le_bytes().as_ref()],
        bump = watering_log.bump
    )]
    pub watering_log: Account<'info, WateringLog>,
}

/// States are encoded through `LifecycleState::code` / `WateredState::code`.
#[event]
pub struct PlantDescribed {
    pub plant_id: u64,
    pub owner: Pubkey,
    pub generated_at: i64,
    pub watering_frequency_in_days: u16,
    pub age_in_days: i64,
    pub watering_count: u64,
    pub last_watered_at: Option<i64>,
    pub lifecycle_state: u8,
    pub watered_state: u8,
    pub queried_at: i64,
}

impl PlantDescribed {
    pub fn at(description: &PlantDescription, now: i64) -> Self {
        Self {
            plant_id: description.id,
            owner: description.owner,
            generated_at: description.generated_at,
            watering_frequency_in_days: description.watering_frequency_in_days,
            age_in_days: description.age_in_days,
            watering_count: description.watering_count,
            last_watered_at: description.last_watered_at,
            lifecycle_state: description.lifecycle_state.code(),
            watered_state: description.watered_state.code(),
            queried_at: now,
        }
    }
}
