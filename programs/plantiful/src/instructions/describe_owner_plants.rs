use anchor_lang::prelude::*;

use crate::error::{PlantError, PlantResult};
use crate::instructions::describe_plant::PlantDescribed;
use crate::state::{Plant, PlantDescription, WateringLog};

/// Read-only: emits a `PlantDescribed` for every plant held by `owner`.
/// Candidates arrive in `remaining_accounts` as (plant, watering log) pairs,
/// typically gathered off-chain with a memcmp filter on `Plant::owner`.
pub fn describe_owner_plants(ctx: Context<DescribeOwnerPlants>, owner: Pubkey) -> Result<()> {
    let pairs = account_pairs(ctx.remaining_accounts)?;
    let now = Clock::get()?.unix_timestamp;

    let mut loaded = Vec::with_capacity(pairs.len());
    for pair in pairs {
        loaded.push((load::<Plant>(&pair[0])?, load::<WateringLog>(&pair[1])?));
    }

    let descriptions = describe_owned(&owner, loaded, now)?;
    for description in &descriptions {
        emit!(PlantDescribed::at(description, now));
    }

    msg!("Described {} plants for {}", descriptions.len(), owner);
    Ok(())
}

/// Split a flat account list into (plant, watering log) pairs.
pub fn account_pairs<T>(accounts: &[T]) -> PlantResult<std::slice::ChunksExact<'_, T>> {
    let pairs = accounts.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        return Err(PlantError::UnpairedAccounts);
    }
    Ok(pairs)
}

/// Describe the plants held by `owner`, in input order. Plants held by anyone
/// else are skipped; an owned plant paired with a foreign log is `NotFound`.
pub fn describe_owned<I>(
    owner: &Pubkey,
    pairs: I,
    now_ts: i64,
) -> PlantResult<Vec<PlantDescription>>
where
    I: IntoIterator<Item = (Plant, WateringLog)>,
{
    pairs
        .into_iter()
        .filter(|(plant, _)| plant.owner == *owner)
        .map(|(plant, log)| plant.describe(&log, now_ts))
        .collect()
}

/// Deserialize a program-owned account; anything else is unknown to the registry.
fn load<T: AccountDeserialize>(info: &AccountInfo) -> Result<T> {
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        PlantError::NotFound
    );
    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data[..];
    T::try_deserialize(&mut bytes)
}

#[derive(Accounts)]
pub struct DescribeOwnerPlants {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::state::{LifecycleState, WateredState};

    const GEN: i64 = 1_700_000_000;

    fn minted(id: u64, owner: Pubkey) -> (Plant, WateringLog) {
        (
            Plant::new(id, owner, GEN, 2, 255).unwrap(),
            WateringLog::new(id, 255),
        )
    }

    #[test]
    fn odd_account_count_is_unpaired() {
        assert!(matches!(
            account_pairs(&[1, 2, 3]),
            Err(PlantError::UnpairedAccounts)
        ));
        assert_eq!(account_pairs(&[1, 2, 3, 4]).unwrap().count(), 2);
        assert_eq!(account_pairs::<u8>(&[]).unwrap().count(), 0);
    }

    #[test]
    fn only_owned_plants_are_described() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let pairs = vec![minted(0, alice), minted(1, bob), minted(2, alice)];

        let described = describe_owned(&alice, pairs, GEN + 4 * SECONDS_PER_DAY).unwrap();
        let ids: Vec<u64> = described.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(described.iter().all(|d| d.owner == alice));
        assert!(described
            .iter()
            .all(|d| d.lifecycle_state == LifecycleState::Seedling));
        assert!(described
            .iter()
            .all(|d| d.watered_state == WateredState::Underwatered));
    }

    #[test]
    fn owner_without_plants_gets_nothing() {
        let pairs = vec![minted(0, Pubkey::new_unique())];
        assert!(describe_owned(&Pubkey::new_unique(), pairs, GEN)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn owned_plant_with_foreign_log_is_not_found() {
        let owner = Pubkey::new_unique();
        let (plant, _) = minted(0, owner);
        let pairs = vec![(plant, WateringLog::new(9, 255))];
        assert!(matches!(
            describe_owned(&owner, pairs, GEN),
            Err(PlantError::NotFound)
        ));
    }

    #[test]
    fn unowned_plant_with_foreign_log_is_skipped() {
        let owner = Pubkey::new_unique();
        let (plant, _) = minted(0, Pubkey::new_unique());
        let pairs = vec![(plant, WateringLog::new(9, 255))];
        assert!(describe_owned(&owner, pairs, GEN).unwrap().is_empty());
    }
}
