//! A container that switches between loading, error and success panes.
//!
//! State changes are debounced (with a minimum display time for the loading
//! pane) and committed on a later [`LazyLayout::tick`], optionally as a
//! chained cross-fade between the outgoing and incoming pane.

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod layout;
pub mod listener;
pub mod logging;
pub mod pane;
pub mod rx;
pub mod scheduler;
pub mod state;
pub mod transition;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::LayoutConfig;
pub use error::{LayoutError, SubscribeError};
pub use layout::{LayoutBuilder, LazyLayout};
pub use listener::{RetryListener, StateUpdateListener};
pub use state::State;
pub use transition::{Role, Visibility};
