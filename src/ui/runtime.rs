use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::LayoutConfig;
use crate::layout::LayoutBuilder;
use crate::pane::RefreshContainer;
use crate::ui::app::{App, DemoOptions};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::feed::Feed;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => LayoutConfig::load_from(path)?,
        None => LayoutConfig::load()?,
    };
    tracing::info!(?config, "starting demo");

    let feed = Feed::default();
    let mut layout = LayoutBuilder::templated(config)
        .child(feed.pane())
        .build()?;
    if cli.refresh {
        layout.setup_with_refresh_container(Box::new(RefreshContainer::new()));
    }

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let options = DemoOptions {
        animate: !cli.no_animate,
        latency: Duration::from_millis(cli.latency_ms),
        fail_every: cli.fail_every,
    };
    let mut app = App::new(layout, feed, options, events.sender())?;
    app.start_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(wait_time(&app)) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Fetched { attempt, outcome }) => app.on_fetched(attempt, outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
        app.on_tick();
    }

    app.shutdown();
    drop(guard);
    tracing::info!("demo finished");
    Ok(())
}

/// Sleep until the layout's next deadline, at most one tick.
fn wait_time(app: &App) -> Duration {
    match app.next_deadline_ms() {
        Some(deadline) => {
            let remaining = deadline.saturating_sub(app.now_ms()).max(1);
            Duration::from_millis(remaining).min(TICK_RATE)
        }
        None => TICK_RATE,
    }
}
