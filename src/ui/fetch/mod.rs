//! Simulated remote fetch driving the demo layout (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;
