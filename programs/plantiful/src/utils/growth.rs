//! Plant state derivation. Nothing here is stored; every caller recomputes
//! from `generated_at`, the cadence and the newest watering timestamps.
//! - lifecycle: age in whole days, [0,3) Seed, [3,7) Seedling, [7,14) Young,
//!   [14,21) Mature, [21,inf) Thriving
//! - hydration: count waterings in the `frequency_days` window ending at
//!   `now`: none is Underwatered, one is Healthy, two or more Overwatered.
//!   A never-watered plant stays Healthy for one window after
//!   `generated_at`. A watering counts from its own instant until exactly
//!   one window later, exclusive.

use crate::constants::{
    MATURE_AFTER_DAYS, SEEDLING_AFTER_DAYS, THRIVING_AFTER_DAYS, YOUNG_AFTER_DAYS,
};
use crate::error::PlantError;
use crate::state::{LifecycleState, WateredState};
use crate::utils::time;

pub fn lifecycle_state(generated_at: i64, now_ts: i64) -> Result<LifecycleState, PlantError> {
    let age = time::age_in_days(now_ts, generated_at)?;
    Ok(if age < SEEDLING_AFTER_DAYS {
        LifecycleState::Seed
    } else if age < YOUNG_AFTER_DAYS {
        LifecycleState::Seedling
    } else if age < MATURE_AFTER_DAYS {
        LifecycleState::Young
    } else if age < THRIVING_AFTER_DAYS {
        LifecycleState::Mature
    } else {
        LifecycleState::Thriving
    })
}

/// `latest` is the log tail newest-first, as returned by `WateringLog::latest_entries`.
/// Entries past the second are ignored.
pub fn watered_state(
    generated_at: i64,
    frequency_days: u16,
    latest: &[i64],
    now_ts: i64,
) -> Result<WateredState, PlantError> {
    let window = time::window_seconds(frequency_days)?;

    let Some(&last) = latest.first() else {
        return Ok(if time::window_elapsed(now_ts, generated_at, window)? {
            WateredState::Underwatered
        } else {
            WateredState::Healthy
        });
    };

    if !time::in_window(now_ts, last, window)? {
        return Ok(WateredState::Underwatered);
    }

    // The log never decreases, so `previous` leaves the window no later than `last`.
    match latest.get(1) {
        Some(&previous) if time::in_window(now_ts, previous, window)? => {
            Ok(WateredState::Overwatered)
        }
        _ => Ok(WateredState::Healthy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const GEN: i64 = 1_700_000_000;
    const DAY: i64 = SECONDS_PER_DAY;

    fn lifecycle_at(offset: i64) -> LifecycleState {
        lifecycle_state(GEN, GEN + offset).unwrap()
    }

    #[test]
    fn lifecycle_boundaries_are_exact() {
        assert_eq!(lifecycle_at(0), LifecycleState::Seed);
        assert_eq!(lifecycle_at(3 * DAY - 1), LifecycleState::Seed);
        assert_eq!(lifecycle_at(3 * DAY), LifecycleState::Seedling);
        assert_eq!(lifecycle_at(7 * DAY), LifecycleState::Young);
        assert_eq!(lifecycle_at(14 * DAY), LifecycleState::Mature);
        assert_eq!(lifecycle_at(21 * DAY - 1), LifecycleState::Mature);
        assert_eq!(lifecycle_at(21 * DAY), LifecycleState::Thriving);
        assert_eq!(lifecycle_at(365 * DAY), LifecycleState::Thriving);
    }

    #[test]
    fn lifecycle_never_regresses() {
        let mut prev = lifecycle_at(0);
        for hour in 0..(30 * 24) {
            let next = lifecycle_at(hour * 3_600);
            assert!(next >= prev, "regressed at hour {hour}");
            prev = next;
        }
    }

    #[test]
    fn lifecycle_depends_only_on_age() {
        for offset in [0, 5 * DAY, 13 * DAY + 7, 40 * DAY] {
            assert_eq!(
                lifecycle_state(GEN, GEN + offset).unwrap(),
                lifecycle_state(0, offset).unwrap()
            );
        }
    }

    #[test]
    fn lifecycle_before_generation_is_seed() {
        assert_eq!(lifecycle_at(-DAY), LifecycleState::Seed);
    }

    #[test]
    fn never_watered_turns_underwatered_at_window_end() {
        for freq in [1u16, 3, 7] {
            let w = freq as i64 * DAY;
            let state = |t| watered_state(GEN, freq, &[], t).unwrap();
            assert_eq!(state(GEN), WateredState::Healthy);
            assert_eq!(state(GEN + w - 1), WateredState::Healthy);
            assert_eq!(state(GEN + w), WateredState::Underwatered);
            assert_eq!(state(GEN + 4 * w), WateredState::Underwatered);
        }
    }

    #[test]
    fn single_watering_resets_window() {
        let watered = GEN + 5 * DAY;
        assert_eq!(
            watered_state(GEN, 1, &[watered], watered).unwrap(),
            WateredState::Healthy
        );
        assert_eq!(
            watered_state(GEN, 1, &[watered], watered + DAY - 1).unwrap(),
            WateredState::Healthy
        );
        assert_eq!(
            watered_state(GEN, 1, &[watered], watered + DAY).unwrap(),
            WateredState::Underwatered
        );
    }

    #[test]
    fn two_waterings_in_window_overwater() {
        let first = GEN + 10;
        let second = GEN + 20;
        assert_eq!(
            watered_state(GEN, 1, &[second, first], second).unwrap(),
            WateredState::Overwatered
        );
    }

    #[test]
    fn same_instant_waterings_are_two_events() {
        assert_eq!(
            watered_state(GEN, 2, &[GEN, GEN], GEN).unwrap(),
            WateredState::Overwatered
        );
    }

    #[test]
    fn waterings_a_full_window_apart_are_healthy() {
        let first = GEN;
        let second = GEN + DAY;
        assert_eq!(
            watered_state(GEN, 1, &[second, first], second).unwrap(),
            WateredState::Healthy
        );
        assert_eq!(
            watered_state(GEN, 1, &[second - 1, first], second - 1).unwrap(),
            WateredState::Overwatered
        );
    }

    #[test]
    fn overwatered_recovers_then_dries_out() {
        let first = GEN + 10;
        let second = GEN + 20;
        let tail = [second, first];
        let state = |t| watered_state(GEN, 1, &tail, t).unwrap();

        assert_eq!(state(second), WateredState::Overwatered);
        // `first` sits exactly one window behind `now`: it has dropped out.
        assert_eq!(state(first + DAY - 1), WateredState::Overwatered);
        assert_eq!(state(first + DAY), WateredState::Healthy);
        assert_eq!(state(second + DAY - 1), WateredState::Healthy);
        assert_eq!(state(second + DAY), WateredState::Underwatered);
    }

    #[test]
    fn state_sequence_over_time_never_skips_healthy() {
        let tail = [GEN + 3_600, GEN];
        let mut seen = Vec::new();
        for minute in 0..(2 * 24 * 60) {
            let state = watered_state(GEN, 1, &tail, GEN + 3_600 + minute * 60).unwrap();
            if seen.last() != Some(&state) {
                seen.push(state);
            }
        }
        assert_eq!(
            seen,
            vec![
                WateredState::Overwatered,
                WateredState::Healthy,
                WateredState::Underwatered
            ]
        );
    }

    #[test]
    fn only_two_newest_entries_matter() {
        let tail = [GEN + 10 * DAY, GEN + 5 * DAY, GEN + 5 * DAY - 1];
        assert_eq!(
            watered_state(GEN, 1, &tail, GEN + 10 * DAY).unwrap(),
            WateredState::Healthy
        );
    }

    #[test]
    fn zero_cadence_is_invalid() {
        assert!(matches!(
            watered_state(GEN, 0, &[], GEN),
            Err(PlantError::InvalidCadence)
        ));
    }
}
