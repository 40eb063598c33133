//! Visibility, opacity and stacking of the three managed panes, plus the
//! chained cross-fade that moves between them.

mod animator;
mod views;

pub use animator::{Animator, CrossFade, Fade};
pub use views::{ManagedView, ManagedViews};

use crate::state::State;

/// The slot a managed pane occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Loading,
    Error,
    Success,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Loading, Role::Error, Role::Success];

    /// The pane that represents `state`.
    pub fn for_state(state: State) -> Self {
        match state {
            State::Error => Role::Error,
            State::Loading => Role::Loading,
            State::Success => Role::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}
