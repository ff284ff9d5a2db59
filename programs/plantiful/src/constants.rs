//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Age (whole days) at which a plant leaves each lifecycle stage.
pub const SEEDLING_AFTER_DAYS: i64 = 3;
pub const YOUNG_AFTER_DAYS: i64 = 7;
pub const MATURE_AFTER_DAYS: i64 = 14;
pub const THRIVING_AFTER_DAYS: i64 = 21;

/// Max timestamps returned by a single `emit_watering_times` call.
pub const MAX_QUOTE_ENTRIES: u16 = 64;

/// Watering entries the engine needs to classify hydration.
pub const WATERED_STATE_WINDOW: usize = 2;

pub const REGISTRY_SEED: &[u8] = b"registry";
pub const PLANT_SEED: &[u8] = b"plant";
pub const WATERING_LOG_SEED: &[u8] = b"watering_log";
