mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    LayoutConfig, SchedulePolicy, TimingConfig, DEFAULT_ANIMATION_DURATION_MS, MIN_DELAY_MS,
};
