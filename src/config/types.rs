use serde::{Deserialize, Serialize};

use crate::pane::{DEFAULT_ERROR_LAYOUT, DEFAULT_LOADING_LAYOUT};
use crate::state::State;

/// Construction-time options for a [`crate::LazyLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Template inflated for the loading slot (default: `"spinner"`).
    #[serde(default = "default_loading_layout")]
    pub loading_layout: String,
    /// Template inflated for the error slot (default: `"error"`).
    #[serde(default = "default_error_layout")]
    pub error_layout: String,
    /// Whether the retry control inside the error pane is displayed.
    #[serde(default)]
    pub display_retry: bool,
    /// Initial state, by name or integer tag.
    #[serde(default)]
    pub state: State,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            loading_layout: default_loading_layout(),
            error_layout: default_error_layout(),
            display_retry: false,
            state: State::Loading,
            timing: TimingConfig::default(),
        }
    }
}

/// Debounce and animation timings, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Minimum time the loading pane stays up once shown (default: 500).
    #[serde(default = "default_min_dwell_ms")]
    pub min_dwell_ms: u64,
    /// Fade leg duration, also the debounce delay of every commit (default: 250).
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default)]
    pub policy: SchedulePolicy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_dwell_ms: default_min_dwell_ms(),
            animation_ms: default_animation_ms(),
            policy: SchedulePolicy::default(),
        }
    }
}

/// How commit delays are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePolicy {
    /// Debounce every commit and keep the loading pane up for at least
    /// `min_dwell_ms` once it has been shown.
    #[default]
    MinimumDwell,
    /// Delay every commit by `animation_ms`, nothing else.
    FlatDelay,
}

pub const MIN_DELAY_MS: u64 = 500;
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 250;

fn default_loading_layout() -> String {
    DEFAULT_LOADING_LAYOUT.to_string()
}

fn default_error_layout() -> String {
    DEFAULT_ERROR_LAYOUT.to_string()
}

fn default_min_dwell_ms() -> u64 {
    MIN_DELAY_MS
}

fn default_animation_ms() -> u64 {
    DEFAULT_ANIMATION_DURATION_MS
}
