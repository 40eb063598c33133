//! Panes are the views a [`crate::LazyLayout`] switches between.
//!
//! A pane draws itself into a ratatui buffer and may expose optional named
//! sub-elements (an error text slot, a retry control) or the pull-to-refresh
//! capability. The layout only ever talks to panes through these accessors.

mod builtin;
mod inflater;

pub use builtin::{ErrorPanel, RefreshContainer, Spinner, TextPane};
pub use inflater::{
    Inflater, PaneFactory, DEFAULT_ERROR_LAYOUT, DEFAULT_LOADING_LAYOUT, DOTS_LAYOUT,
    ERROR_MESSAGE_LAYOUT,
};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Per-frame information handed to panes while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub now_ms: u64,
}

pub trait Pane {
    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &RenderContext);

    /// Error message slot, if this pane has one.
    fn text_slot(&self) -> Option<&TextSlot> {
        None
    }

    fn text_slot_mut(&mut self) -> Option<&mut TextSlot> {
        None
    }

    /// Retry control, if this pane has one.
    fn retry_control(&self) -> Option<&RetryControl> {
        None
    }

    fn retry_control_mut(&mut self) -> Option<&mut RetryControl> {
        None
    }

    /// Pull-to-refresh capability. A pane returning `Some` here is treated
    /// as an overlay container when placed in the loading slot.
    fn refresh_indicator(&self) -> Option<&dyn RefreshIndicator> {
        None
    }

    fn refresh_indicator_mut(&mut self) -> Option<&mut dyn RefreshIndicator> {
        None
    }
}

/// Containers that draw their own "refreshing" indicator.
pub trait RefreshIndicator {
    fn is_refreshing(&self) -> bool;
    fn set_refreshing(&mut self, refreshing: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot {
    text: Option<String>,
}

impl TextSlot {
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryControl {
    label: String,
    visible: bool,
}

impl RetryControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            visible: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
