use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("3idJFbS8B4ufVAgBn7iL75oWmKUfnLZzFRhZ5PkVwu3h");

#[program]
pub mod plantiful {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry(ctx)
    }

    pub fn mint_plant(ctx: Context<MintPlant>, watering_frequency_in_days: u16) -> Result<()> {
        instructions::mint_plant(ctx, watering_frequency_in_days)
    }

    pub fn transfer_plant(ctx: Context<TransferPlant>, plant_id: u64, to: Pubkey) -> Result<()> {
        instructions::transfer_plant(ctx, plant_id, to)
    }

    pub fn water_plant(ctx: Context<WaterPlant>, plant_id: u64) -> Result<()> {
        instructions::water_plant(ctx, plant_id)
    }

    pub fn describe_plant(ctx: Context<DescribePlant>, plant_id: u64) -> Result<()> {
        instructions::describe_plant(ctx, plant_id)
    }

    pub fn emit_watering_times(
        ctx: Context<EmitWateringTimes>,
        plant_id: u64,
        n: u16,
    ) -> Result<()> {
        instructions::emit_watering_times(ctx, plant_id, n)
    }

    pub fn describe_owner_plants(ctx: Context<DescribeOwnerPlants>, owner: Pubkey) -> Result<()> {
        instructions::describe_owner_plants(ctx, owner)
    }
}
