use crate::state::State;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('l') => app.request_state(State::Loading),
        KeyCode::Char('e') => app.request_state(State::Error),
        KeyCode::Char('s') => app.request_state(State::Success),
        KeyCode::Char('r') => app.activate_retry(),
        KeyCode::Char('p') => app.pull_to_refresh(),
        KeyCode::Char('f') => app.start_fetch(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
