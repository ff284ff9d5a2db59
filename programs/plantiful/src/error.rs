use anchor_lang::prelude::*;

/// Custom error codes for the plant registry program.
#[error_code]
pub enum PlantError {
    #[msg("Plant not found")]
    NotFound,

    #[msg("You can't water or transfer someone else's plant")]
    NotOwner,

    #[msg("Watering frequency must be at least one day")]
    InvalidCadence,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Remaining accounts must be (plant, watering log) pairs")]
    UnpairedAccounts,
}

/// Result of the pure registry, ledger and engine helpers.
pub type PlantResult<T> = std::result::Result<T, PlantError>;
