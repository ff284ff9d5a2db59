use anchor_lang::prelude::*;

use crate::constants::{PLANT_SEED, REGISTRY_SEED, WATERING_LOG_SEED};
use crate::error::PlantError;
use crate::state::{Plant, Registry, WateringLog};

pub fn mint_plant(ctx: Context<MintPlant>, watering_frequency_in_days: u16) -> Result<()> {
    // Reject before the id is consumed.
    require!(watering_frequency_in_days > 0, PlantError::InvalidCadence);

    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let plant_id = ctx.accounts.registry.allocate_plant_id()?;

    let plant = Plant::new(
        plant_id,
        owner,
        now,
        watering_frequency_in_days,
        ctx.bumps.plant,
    )?;
    ctx.accounts.plant.set_inner(plant);
    ctx.accounts
        .watering_log
        .set_inner(WateringLog::new(plant_id, ctx.bumps.watering_log));

    msg!("Minted plant {} for {}", plant_id, owner);
    emit!(PlantMinted {
        plant_id,
        owner,
        generated_at: now,
        watering_frequency_in_days,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct MintPlant<'info> {
    #[account(mut, seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = owner,
        space = 8 + Plant::SIZE,
        seeds = [PLANT_SEED, registry.next_plant_id.to_le_bytes().as_ref()],
        bump
    )]
    pub plant: Account<'info, Plant>,

    #[account(
        init,
        payer = owner,
        space = WateringLog::space(0),
        seeds = [WATERING_LOG_SEED, registry.next_plant_id.to_le_bytes().as_ref()],
        bump
    )]
    pub watering_log: Account<'info, WateringLog>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PlantMinted {
    pub plant_id: u64,
    pub owner: Pubkey,
    pub generated_at: i64,
    pub watering_frequency_in_days: u16,
}
