use std::sync::Arc;

use super::LazyLayout;
use crate::clock::{Clock, SystemClock};
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::pane::{Inflater, Pane};
use crate::transition::ManagedViews;

const CHILD_COUNT: usize = 3;

/// Assembles a [`LazyLayout`] from its three children.
///
/// Children are positional: loading, error, then the success content. In
/// templated mode the loading and error panes are inflated from the
/// configured templates first, so the caller only adds the content.
pub struct LayoutBuilder {
    config: LayoutConfig,
    templated: bool,
    inflater: Option<Inflater>,
    children: Vec<Box<dyn Pane>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LayoutBuilder {
    /// Caller supplies loading, error and content panes, in that order.
    pub fn positional(config: LayoutConfig) -> Self {
        Self::with_mode(config, false)
    }

    /// Loading and error panes come from `config.loading_layout` and
    /// `config.error_layout`; the caller supplies the content pane.
    pub fn templated(config: LayoutConfig) -> Self {
        Self::with_mode(config, true)
    }

    fn with_mode(config: LayoutConfig, templated: bool) -> Self {
        Self {
            config,
            templated,
            inflater: None,
            children: Vec::with_capacity(CHILD_COUNT),
            clock: None,
        }
    }

    pub fn inflater(mut self, inflater: Inflater) -> Self {
        self.inflater = Some(inflater);
        self
    }

    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn child<P: Pane + 'static>(self, pane: P) -> Self {
        self.boxed_child(Box::new(pane))
    }

    pub fn boxed_child(mut self, pane: Box<dyn Pane>) -> Self {
        self.children.push(pane);
        self
    }

    pub fn build(self) -> Result<LazyLayout, LayoutError> {
        self.config.validate()?;

        let mut children: Vec<Box<dyn Pane>> = Vec::with_capacity(CHILD_COUNT);
        if self.templated {
            let inflater = self.inflater.unwrap_or_default();
            children.push(inflater.inflate(&self.config.loading_layout)?);
            children.push(inflater.inflate(&self.config.error_layout)?);
        }
        children.extend(self.children);

        let [loading, error, success]: [Box<dyn Pane>; CHILD_COUNT] =
            children
                .try_into()
                .map_err(|children: Vec<Box<dyn Pane>>| LayoutError::ChildCount {
                    expected: CHILD_COUNT,
                    found: children.len(),
                })?;

        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::new()));
        let mut layout = LazyLayout::assemble(
            ManagedViews::new(loading, error, success),
            self.config.state,
            self.config.timing,
            clock,
        );
        layout.set_display_retry_button(self.config.display_retry);
        tracing::debug!(
            state = %self.config.state,
            templated = self.templated,
            "layout built"
        );
        Ok(layout)
    }
}
