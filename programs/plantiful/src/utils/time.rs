//! Day arithmetic over Unix timestamps (UTC seconds).
//! - age_days = floor((now - start) / 86_400), saturating at 0 before start
//! - cadence windows are half-open: [anchor, anchor + days * 86_400)

use crate::constants::SECONDS_PER_DAY;
use crate::error::PlantError;

/// Whole days elapsed between `start_ts` and `now_ts`. A query before `start_ts` is day 0.
pub fn age_in_days(now_ts: i64, start_ts: i64) -> Result<i64, PlantError> {
    let elapsed = now_ts
        .checked_sub(start_ts)
        .ok_or(PlantError::MathOverflow)?;
    Ok(elapsed.div_euclid(SECONDS_PER_DAY).max(0))
}

/// Length in seconds of a cadence window of `days` days.
pub fn window_seconds(days: u16) -> Result<i64, PlantError> {
    if days == 0 {
        return Err(PlantError::InvalidCadence);
    }
    (days as i64)
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(PlantError::MathOverflow)
}

/// True once `now_ts` has reached the (exclusive) end of the window opened at `anchor_ts`.
pub fn window_elapsed(now_ts: i64, anchor_ts: i64, window: i64) -> Result<bool, PlantError> {
    let elapsed = now_ts
        .checked_sub(anchor_ts)
        .ok_or(PlantError::MathOverflow)?;
    Ok(elapsed >= window)
}

/// True while a watering at `event_ts` still falls in the window ending at `now_ts`.
/// The watering instant itself counts; an event exactly one window back has dropped out.
pub fn in_window(now_ts: i64, event_ts: i64, window: i64) -> Result<bool, PlantError> {
    Ok(!window_elapsed(now_ts, event_ts, window)?)
}
