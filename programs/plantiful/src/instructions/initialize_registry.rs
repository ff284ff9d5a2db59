use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::state::Registry;

pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.next_plant_id = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Registry initialized by {}", registry.authority);
    emit!(RegistryInitialized {
        authority: registry.authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Registry::SIZE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
}
