use anchor_lang::prelude::*;

use crate::constants::PLANT_SEED;
use crate::state::Plant;

pub fn transfer_plant(ctx: Context<TransferPlant>, plant_id: u64, to: Pubkey) -> Result<()> {
    let from = ctx.accounts.from.key();
    let plant = &mut ctx.accounts.plant;
    plant.transfer(&from, to)?;

    msg!("Plant {} transferred from {} to {}", plant_id, from, to);
    emit!(PlantTransferred { plant_id, from, to });
    Ok(())
}

#[derive(Accounts)]
#[instruction(plant_id: u64)]
pub struct TransferPlant<'info> {
    #[account(
        mut,
        seeds = [PLANT_SEED, plant_id.to_le_bytes().as_ref()],
        bump = plant.bump
    )]
    pub plant: Account<'info, Plant>,

    pub from: Signer<'info>,
}

#[event]
pub struct PlantTransferred {
    pub plant_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}
