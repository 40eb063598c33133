//! Intent/reducer/state traits for the demo's application state.
//!
//! ```text
//! key press / fetch result ──→ Intent ──→ Reducer ──→ UiState ──→ LazyLayout
//! ```
//!
//! Reducers are pure. Side effects (spawning a fetch, requesting a layout
//! state) stay in [`crate::ui::app::App`], which reads the reduced state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
