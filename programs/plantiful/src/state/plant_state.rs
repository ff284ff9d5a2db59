/// Growth stage derived from plant age. Ordered: a later variant never precedes an earlier one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LifecycleState {
    Seed,
    Seedling,
    Young,
    Mature,
    Thriving,
}

/// Hydration classification derived from the watering cadence and the log tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WateredState {
    Underwatered,
    Healthy,
    Overwatered,
}

/// Decoding tables for the numeric encoding used in events and by off-chain
/// clients. Must agree with `code()`.
const LIFECYCLE_CODES: [(LifecycleState, u8); 5] = [
    (LifecycleState::Seed, 0),
    (LifecycleState::Seedling, 1),
    (LifecycleState::Young, 2),
    (LifecycleState::Mature, 3),
    (LifecycleState::Thriving, 4),
];

const WATERED_CODES: [(WateredState, u8); 3] = [
    (WateredState::Underwatered, 0),
    (WateredState::Healthy, 1),
    (WateredState::Overwatered, 2),
];

impl LifecycleState {
    pub fn code(self) -> u8 {
        match self {
            LifecycleState::Seed => 0,
            LifecycleState::Seedling => 1,
            LifecycleState::Young => 2,
            LifecycleState::Mature => 3,
            LifecycleState::Thriving => 4,
        }
    }
}

impl TryFrom<u8> for LifecycleState {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        LIFECYCLE_CODES
            .iter()
            .find(|(_, code)| *code == value)
            .map(|(state, _)| *state)
            .ok_or(value)
    }
}

impl WateredState {
    pub fn code(self) -> u8 {
        match self {
            WateredState::Underwatered => 0,
            WateredState::Healthy => 1,
            WateredState::Overwatered => 2,
        }
    }
}

impl TryFrom<u8> for WateredState {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        WATERED_CODES
            .iter()
            .find(|(_, code)| *code == value)
            .map(|(state, _)| *state)
            .ok_or(value)
    }
}
