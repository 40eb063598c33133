use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crate::error::SubscribeError;
use crate::layout::LazyLayout;
use crate::rx::Subscription;
use crate::state::State;
use crate::ui::events::{AppEvent, FetchOutcome};
use crate::ui::feed::Feed;
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState};
use crate::ui::mvi::Reducer;

/// Dispatch an intent to an MVI reducer, replacing the state field in-place.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Demo knobs coming from the command line.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    pub animate: bool,
    pub latency: Duration,
    pub fail_every: u32,
}

pub struct App {
    should_quit: bool,
    layout: LazyLayout,
    /// Simulated fetch (MVI pattern).
    fetch: FetchState,
    feed: Feed,
    options: DemoOptions,
    events: Sender<AppEvent>,
    state_changes: Subscription<State>,
    retries: Subscription<()>,
    last_notified: Option<State>,
    notice: Option<String>,
}

impl App {
    /// Must run on the thread that built `layout`.
    pub fn new(
        mut layout: LazyLayout,
        feed: Feed,
        options: DemoOptions,
        events: Sender<AppEvent>,
    ) -> Result<Self, SubscribeError> {
        let state_changes = layout.state_changes()?;
        let retries = layout.retries()?;
        layout.on_attached();
        Ok(Self {
            should_quit: false,
            layout,
            fetch: FetchState::default(),
            feed,
            options,
            events,
            state_changes,
            retries,
            last_notified: None,
            notice: None,
        })
    }

    pub fn layout(&self) -> &LazyLayout {
        &self.layout
    }

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn last_notified(&self) -> Option<State> {
        self.last_notified
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn request_state(&mut self, state: State) {
        self.notice = None;
        self.layout
            .set_state_with_animation(state, self.options.animate);
    }

    pub fn activate_retry(&mut self) {
        if !self.layout.activate_retry() {
            self.notice = Some("Retry is only available on the error pane".to_string());
        }
    }

    pub fn pull_to_refresh(&mut self) {
        if self.layout.on_refresh_gesture() {
            self.start_fetch();
        } else {
            self.notice = Some("Start with --refresh to pull to refresh".to_string());
        }
    }

    pub fn start_fetch(&mut self) {
        self.notice = None;
        dispatch_mvi!(self, fetch, FetchReducer, FetchIntent::Start);
        self.sync_layout();
        self.spawn_fetch(self.fetch.attempt());
    }

    pub fn on_fetched(&mut self, attempt: u32, outcome: FetchOutcome) {
        let intent = match outcome {
            Ok(items) => FetchIntent::Succeeded { attempt, items },
            Err(message) => FetchIntent::Failed { attempt, message },
        };
        dispatch_mvi!(self, fetch, FetchReducer, intent);
        self.sync_layout();
    }

    /// Commits due state changes and reacts to listener events. Returns
    /// true when something visible changed.
    pub fn on_tick(&mut self) -> bool {
        let mut changed = self.layout.tick();

        let notified = self.state_changes.drain();
        if let Some(state) = notified.last() {
            self.last_notified = Some(*state);
            changed = true;
        }

        if !self.retries.drain().is_empty() {
            tracing::info!("retry requested");
            self.start_fetch();
            changed = true;
        }
        changed
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.layout.next_deadline_ms()
    }

    pub fn now_ms(&self) -> u64 {
        self.layout.now_ms()
    }

    pub fn shutdown(&mut self) {
        self.state_changes.dispose();
        self.retries.dispose();
        self.layout.on_detached();
    }

    fn sync_layout(&mut self) {
        match &self.fetch {
            FetchState::Loaded { items, .. } => self.feed.replace(items.clone()),
            FetchState::Failed { message, .. } => self.layout.set_error_text(message.clone()),
            FetchState::Idle | FetchState::InFlight { .. } => {}
        }
        if let Some(state) = self.fetch.layout_state() {
            self.layout
                .set_state_with_animation(state, self.options.animate);
        }
    }

    fn spawn_fetch(&self, attempt: u32) {
        let tx = self.events.clone();
        let latency = self.options.latency;
        let fail = self.options.fail_every > 0 && attempt % self.options.fail_every == 0;
        tracing::debug!(attempt, fail, "fetch started");

        thread::spawn(move || {
            thread::sleep(latency);
            let outcome = if fail {
                Err(format!("Attempt {attempt} failed: upstream timed out"))
            } else {
                Ok((1..=5)
                    .map(|n| format!("Item {n} (attempt {attempt})"))
                    .collect())
            };
            let _ = tx.send(AppEvent::Fetched { attempt, outcome });
        });
    }
}
