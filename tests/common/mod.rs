//! Shared test panes and clock helpers.

#![allow(dead_code, unused_imports)]

use lazylayout::config::LayoutConfig;
use lazylayout::pane::{ErrorPanel, Pane, RenderContext};
use lazylayout::{LayoutBuilder, LazyLayout, ManualClock, State};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use std::sync::Arc;

/// Pane that prints its label on the first row.
pub struct StubPane {
    label: &'static str,
}

impl StubPane {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Pane for StubPane {
    fn render(&self, area: Rect, buf: &mut Buffer, _ctx: &RenderContext) {
        Line::raw(self.label).render(area, buf);
    }
}

/// Layout with stub loading/success panes and a real error panel, driven
/// by a manual clock starting at 0.
pub fn manual_layout(config: LayoutConfig) -> (LazyLayout, ManualClock) {
    let clock = ManualClock::new();
    let layout = LayoutBuilder::positional(config)
        .clock(clock.clone())
        .child(StubPane::new("loading"))
        .child(ErrorPanel::new())
        .child(StubPane::new("success"))
        .build()
        .expect("three children build");
    (layout, clock)
}

pub fn default_layout() -> (LazyLayout, ManualClock) {
    manual_layout(LayoutConfig::default())
}

/// Layout whose initial state is `state`.
pub fn layout_starting_in(state: State) -> (LazyLayout, ManualClock) {
    manual_layout(LayoutConfig {
        state,
        ..LayoutConfig::default()
    })
}

pub type Recorded = Arc<Mutex<Vec<State>>>;

/// Installs a state listener collecting every notification.
pub fn record_states(layout: &mut LazyLayout) -> Recorded {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&recorded);
    layout.set_state_update_listener(move |state: State| sink.lock().push(state));
    recorded
}

/// Moves the clock to `now_ms` and ticks once.
pub fn tick_at(layout: &mut LazyLayout, clock: &ManualClock, now_ms: u64) -> bool {
    clock.set(now_ms);
    layout.tick()
}

pub fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

pub fn render(layout: &LazyLayout, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    layout.render(area, &mut buf);
    buf
}

pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 1e-4
}
