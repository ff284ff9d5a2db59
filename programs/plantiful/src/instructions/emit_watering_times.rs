use anchor_lang::prelude::*;

use crate::constants::{MAX_QUOTE_ENTRIES, WATERING_LOG_SEED};
use crate::state::WateringLog;

/// Read-only: emits up to `n` newest watering timestamps (capped) and the log length.
pub fn emit_watering_times(ctx: Context<EmitWateringTimes>, plant_id: u64, n: u16) -> Result<()> {
    let log = &ctx.accounts.watering_log;
    let n = n.min(MAX_QUOTE_ENTRIES) as usize;

    emit!(WateringTimes {
        plant_id,
        length: log.length(plant_id)?,
        latest: log.latest_entries(plant_id, n)?,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(plant_id: u64)]
pub struct EmitWateringTimes<'info> {
    #[account(
        seeds = [WATERING_LOG_SEED, plant_id.to_le_bytes().as_ref()],
        bump = watering_log.bump
    )]
    pub watering_log: Account<'info, WateringLog>,
}

#[event]
pub struct WateringTimes {
    pub plant_id: u64,
    pub length: u64,
    /// Newest first.
    pub latest: Vec<i64>,
}
