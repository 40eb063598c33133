use std::collections::HashMap;
use std::fmt;

use super::builtin::{ErrorPanel, Spinner};
use super::Pane;
use crate::error::LayoutError;

pub const DEFAULT_LOADING_LAYOUT: &str = "spinner";
pub const DOTS_LAYOUT: &str = "dots";
pub const DEFAULT_ERROR_LAYOUT: &str = "error";
pub const ERROR_MESSAGE_LAYOUT: &str = "error_message";

pub type PaneFactory = Box<dyn Fn() -> Box<dyn Pane> + Send + Sync>;

/// Registry turning template names into fresh panes.
pub struct Inflater {
    templates: HashMap<String, PaneFactory>,
}

impl Inflater {
    /// An inflater with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Pane> + Send + Sync + 'static,
    {
        self.templates.insert(name.into(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn inflate(&self, name: &str) -> Result<Box<dyn Pane>, LayoutError> {
        let factory = self
            .templates
            .get(name)
            .ok_or_else(|| LayoutError::UnknownTemplate {
                name: name.to_string(),
            })?;
        tracing::trace!(template = name, "inflating pane");
        Ok(factory())
    }
}

impl Default for Inflater {
    fn default() -> Self {
        let mut inflater = Self::empty();
        inflater.register(DEFAULT_LOADING_LAYOUT, || Box::new(Spinner::braille()));
        inflater.register(DOTS_LAYOUT, || Box::new(Spinner::dots()));
        inflater.register(DEFAULT_ERROR_LAYOUT, || Box::new(ErrorPanel::new()));
        inflater.register(ERROR_MESSAGE_LAYOUT, || {
            Box::new(ErrorPanel::without_retry())
        });
        inflater
    }
}

impl fmt::Debug for Inflater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Inflater").field("templates", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_templates_are_registered() {
        let inflater = Inflater::default();
        for name in [
            DEFAULT_LOADING_LAYOUT,
            DOTS_LAYOUT,
            DEFAULT_ERROR_LAYOUT,
            ERROR_MESSAGE_LAYOUT,
        ] {
            assert!(inflater.contains(name), "missing template {name}");
        }
    }

    #[test]
    fn error_templates_differ_in_retry_control() {
        let inflater = Inflater::default();
        let with_retry = inflater.inflate(DEFAULT_ERROR_LAYOUT).unwrap();
        let plain = inflater.inflate(ERROR_MESSAGE_LAYOUT).unwrap();
        assert!(with_retry.retry_control().is_some());
        assert!(with_retry.text_slot().is_some());
        assert!(plain.retry_control().is_none());
    }

    #[test]
    fn unknown_template_is_an_error() {
        let inflater = Inflater::empty();
        match inflater.inflate("spinner") {
            Err(LayoutError::UnknownTemplate { name }) => assert_eq!(name, "spinner"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("empty inflater produced a pane"),
        }
    }
}
