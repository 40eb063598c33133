use crate::state::State;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    InFlight {
        attempt: u32,
    },
    Loaded {
        attempt: u32,
        items: Vec<String>,
    },
    Failed {
        attempt: u32,
        message: String,
    },
}

impl UiState for FetchState {}

impl FetchState {
    /// Number of the latest attempt, 0 before the first one.
    pub fn attempt(&self) -> u32 {
        match self {
            FetchState::Idle => 0,
            FetchState::InFlight { attempt }
            | FetchState::Loaded { attempt, .. }
            | FetchState::Failed { attempt, .. } => *attempt,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, FetchState::InFlight { .. })
    }

    /// Layout state this fetch state should be shown as.
    pub fn layout_state(&self) -> Option<State> {
        match self {
            FetchState::Idle => None,
            FetchState::InFlight { .. } => Some(State::Loading),
            FetchState::Loaded { .. } => Some(State::Success),
            FetchState::Failed { .. } => Some(State::Error),
        }
    }
}
