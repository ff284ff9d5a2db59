use anchor_lang::prelude::*;

use crate::constants::{PLANT_SEED, WATERING_LOG_SEED};
use crate::state::{Plant, WateringLog};

pub fn water_plant(ctx: Context<WaterPlant>, plant_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let actor = ctx.accounts.actor.key();

    let plant = &ctx.accounts.plant;
    let log = &mut ctx.accounts.watering_log;
    plant.water(log, &actor, now)?;

    let watering_count = log.timestamps.len() as u64;
    msg!("Plant {} watered at {} ({} total)", plant_id, now, watering_count);
    emit!(PlantWatered {
        plant_id,
        owner: actor,
        watered_at: now,
        watering_count,
    });
    Ok(())
}

// The log grows by one slot per watering; the owner pays the extra rent.
// Writing the log while reading the plant keeps the ownership check and the
// append in one account-locked instruction.
#[derive(Accounts)]
#[instruction(plant_id: u64)]
pub struct WaterPlant<'info> {
    #[account(
        seeds = [PLANT_SEED, plant_id.to_le_bytes().as_ref()],
        bump = plant.bump
    )]
    pub plant: Account<'info, Plant>,

    #[account(
        mut,
        seeds = [WATERING_LOG_SEED, plant_id.to_le_bytes().as_ref()],
        bump = watering_log.bump,
        realloc = WateringLog::space(watering_log.timestamps.len() + 1),
        realloc::payer = actor,
        realloc::zero = false
    )]
    pub watering_log: Account<'info, WateringLog>,

    #[account(mut)]
    pub actor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PlantWatered {
    pub plant_id: u64,
    pub owner: Pubkey,
    pub watered_at: i64,
    pub watering_count: u64,
}
