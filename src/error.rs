//! Error types for building a layout and subscribing to its events.

use std::thread::ThreadId;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while constructing or reconfiguring a [`crate::LazyLayout`].
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The container did not end up with exactly three children.
    #[error("LazyLayout requires exactly {expected} children (loading, error, content), found {found}")]
    ChildCount { expected: usize, found: usize },

    /// A template name was not registered with the inflater.
    #[error("Unknown layout template '{name}'")]
    UnknownTemplate { name: String },

    /// An integer tag outside {-1, 0, 1}.
    #[error("Invalid state tag {tag}: expected -1 (error), 0 (loading) or 1 (success)")]
    InvalidStateTag { tag: i32 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors handed to a subscriber that could not be registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error("Expected to be called on the UI thread {expected:?} but was called on {actual:?}")]
    OffUiThread { expected: ThreadId, actual: ThreadId },
}
