use lazylayout::config::LayoutConfig;
use lazylayout::ui::app::{App, DemoOptions};
use lazylayout::ui::events::AppEvent;
use lazylayout::ui::feed::Feed;
use lazylayout::ui::fetch::FetchState;
use lazylayout::{LayoutBuilder, ManualClock, State};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

fn make_app(fail_every: u32) -> (App, ManualClock, Receiver<AppEvent>) {
    let clock = ManualClock::new();
    let feed = Feed::default();
    let layout = LayoutBuilder::templated(LayoutConfig {
        display_retry: true,
        ..LayoutConfig::default()
    })
    .clock(clock.clone())
    .child(feed.pane())
    .build()
    .expect("demo layout builds");
    let (tx, rx) = mpsc::channel();
    let options = DemoOptions {
        animate: false,
        latency: Duration::ZERO,
        fail_every,
    };
    let app = App::new(layout, feed, options, tx).expect("ui thread");
    (app, clock, rx)
}

fn deliver_fetch(app: &mut App, rx: &Receiver<AppEvent>) {
    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::Fetched { attempt, outcome }) => app.on_fetched(attempt, outcome),
        other => panic!("expected fetch result, got {other:?}"),
    }
}

#[test]
fn successful_fetch_fills_feed_and_shows_success() {
    let (mut app, clock, rx) = make_app(0);
    app.start_fetch();
    assert_eq!(app.fetch(), &FetchState::InFlight { attempt: 1 });

    deliver_fetch(&mut app, &rx);
    assert_eq!(app.feed().len(), 5);
    assert_eq!(app.layout().state(), State::Success);

    clock.set(250);
    assert!(app.on_tick());
    assert_eq!(app.layout().committed_state(), State::Success);
    assert_eq!(app.last_notified(), Some(State::Success));
}

#[test]
fn failed_fetch_retries_through_retry_control() {
    let (mut app, clock, rx) = make_app(1);
    app.start_fetch();
    deliver_fetch(&mut app, &rx);

    assert_eq!(app.layout().state(), State::Error);
    assert!(app
        .layout()
        .error_text()
        .is_some_and(|text| text.contains("Attempt 1")));
    clock.set(250);
    app.on_tick();
    assert_eq!(app.last_notified(), Some(State::Error));

    app.activate_retry();
    assert!(app.notice().is_none());
    assert!(app.on_tick());
    assert_eq!(app.fetch(), &FetchState::InFlight { attempt: 2 });
    assert_eq!(app.layout().state(), State::Loading);
}

#[test]
fn pull_without_refresh_container_sets_notice() {
    let (mut app, _clock, _rx) = make_app(0);
    app.pull_to_refresh();
    assert!(app.notice().is_some());
    assert_eq!(app.fetch(), &FetchState::Idle);
}

#[test]
fn manual_state_requests_follow_layout() {
    let (mut app, clock, _rx) = make_app(0);
    app.request_state(State::Error);
    clock.set(250);
    app.on_tick();
    assert_eq!(app.layout().committed_state(), State::Error);

    app.shutdown();
    assert!(!app.layout().listeners().state_updates().is_set());
    assert!(!app.layout().listeners().retries().is_set());
}
