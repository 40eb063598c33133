use crate::ui::fetch::intent::FetchIntent;
use crate::ui::fetch::state::FetchState;
use crate::ui::mvi::Reducer;

pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Start => FetchState::InFlight {
                attempt: state.attempt() + 1,
            },
            FetchIntent::Succeeded { attempt, items } => match state {
                FetchState::InFlight { attempt: current } if current == attempt => {
                    FetchState::Loaded { attempt, items }
                }
                // Stale response
                other => other,
            },
            FetchIntent::Failed { attempt, message } => match state {
                FetchState::InFlight { attempt: current } if current == attempt => {
                    FetchState::Failed { attempt, message }
                }
                other => other,
            },
        }
    }
}
