mod common;

use common::*;
use lazylayout::config::LayoutConfig;
use lazylayout::pane::{ErrorPanel, Inflater, Spinner, DEFAULT_ERROR_LAYOUT};
use lazylayout::{Role, State, Visibility};

#[test]
fn initial_state_is_shown_without_animation() {
    let (layout, _clock) = layout_starting_in(State::Error);
    assert_eq!(layout.shown_roles(), vec![Role::Error]);
    assert!(approx(layout.opacity(Role::Error), 1.0));
    assert_eq!(layout.visibility(Role::Loading), Visibility::Hidden);
    assert_eq!(layout.stacking_order().last(), Some(&Role::Error));
    assert!(!layout.is_animating());
}

#[test]
fn cross_fade_runs_legs_back_to_back() {
    let (mut layout, clock) = default_layout();
    layout.set_state(State::Success);

    tick_at(&mut layout, &clock, 250);
    assert!(layout.is_animating());
    assert_eq!(layout.visibility(Role::Success), Visibility::Shown);
    assert!(approx(layout.opacity(Role::Success), 0.0));
    assert_eq!(layout.stacking_order().last(), Some(&Role::Success));

    tick_at(&mut layout, &clock, 375);
    assert!(approx(layout.opacity(Role::Loading), 0.5));
    assert!(approx(layout.opacity(Role::Success), 0.0));

    tick_at(&mut layout, &clock, 500);
    assert_eq!(layout.visibility(Role::Loading), Visibility::Hidden);
    assert!(approx(layout.opacity(Role::Success), 0.0));

    tick_at(&mut layout, &clock, 625);
    assert!(approx(layout.opacity(Role::Success), 0.5));

    tick_at(&mut layout, &clock, 750);
    assert!(approx(layout.opacity(Role::Success), 1.0));
    assert!(!layout.is_animating());
    assert_eq!(layout.shown_roles(), vec![Role::Success]);
}

#[test]
fn late_tick_settles_both_legs() {
    let (mut layout, clock) = default_layout();
    layout.set_state(State::Error);
    tick_at(&mut layout, &clock, 250);
    tick_at(&mut layout, &clock, 5_000);

    assert_eq!(layout.shown_roles(), vec![Role::Error]);
    assert!(approx(layout.opacity(Role::Error), 1.0));
    assert!(!layout.is_animating());
}

#[test]
fn new_commit_snaps_running_fade() {
    let (mut layout, clock) = default_layout();
    layout.set_state(State::Success);
    tick_at(&mut layout, &clock, 250);
    assert!(layout.is_animating());

    layout.set_state(State::Error);
    tick_at(&mut layout, &clock, 400);
    tick_at(&mut layout, &clock, 500);

    // The first fade was finished, Success then faded out towards Error.
    assert_eq!(layout.committed_state(), State::Error);
    assert_eq!(layout.visibility(Role::Loading), Visibility::Hidden);
    tick_at(&mut layout, &clock, 1_000);
    assert_eq!(layout.shown_roles(), vec![Role::Error]);
}

#[test]
fn instant_swap_without_animation() {
    let (mut layout, clock) = default_layout();
    layout.set_state_with_animation(State::Success, false);
    tick_at(&mut layout, &clock, 250);

    assert!(!layout.is_animating());
    assert_eq!(layout.shown_roles(), vec![Role::Success]);
    assert!(approx(layout.opacity(Role::Success), 1.0));
}

#[test]
fn steady_state_shows_exactly_one_view() {
    let (mut layout, clock) = default_layout();
    let mut now = 0;
    for state in [State::Error, State::Success, State::Loading, State::Error] {
        layout.set_state(state);
        now += 2_000;
        tick_at(&mut layout, &clock, now);
        now += 2_000;
        tick_at(&mut layout, &clock, now);

        let shown = layout.shown_roles();
        assert_eq!(shown, vec![Role::for_state(state)]);
        assert!(approx(layout.opacity(shown[0]), 1.0));
    }
}

#[test]
fn detach_finishes_running_fade() {
    let (mut layout, clock) = default_layout();
    layout.set_state(State::Success);
    tick_at(&mut layout, &clock, 300);
    layout.on_detached();

    assert!(!layout.is_animating());
    assert_eq!(layout.shown_roles(), vec![Role::Success]);
}

#[test]
fn render_draws_top_view_and_dims_fading_one() {
    let (mut layout, clock) = default_layout();
    let buf = render(&layout, 20, 3);
    assert!(row(&buf, 0).starts_with("loading"));

    layout.set_state(State::Success);
    tick_at(&mut layout, &clock, 250);
    tick_at(&mut layout, &clock, 375);
    let buf = render(&layout, 20, 3);
    assert!(row(&buf, 0).starts_with("loading"));
    assert!(buf[(0, 0)]
        .modifier
        .contains(ratatui::style::Modifier::DIM));

    tick_at(&mut layout, &clock, 750);
    let buf = render(&layout, 20, 3);
    assert!(row(&buf, 0).starts_with("success"));
    assert!(!buf[(0, 0)]
        .modifier
        .contains(ratatui::style::Modifier::DIM));
}

#[test]
fn error_text_and_retry_flag_reach_error_pane() {
    let (mut layout, _clock) = default_layout();
    assert_eq!(layout.error_text(), None);
    assert!(!layout.display_retry_button());

    layout.set_error_text("Network unreachable");
    layout.set_display_retry_button(true);
    assert_eq!(layout.error_text(), Some("Network unreachable"));
    assert!(layout.display_retry_button());

    layout.clear_error_text();
    assert_eq!(layout.error_text(), None);
}

#[test]
fn error_pane_without_slots_ignores_contents() {
    let (mut layout, _clock) = default_layout();
    layout.set_error_view(Box::new(StubPane::new("bare")));

    layout.set_error_text("ignored");
    layout.set_display_retry_button(true);
    assert_eq!(layout.error_text(), None);
    assert!(!layout.display_retry_button());
}

#[test]
fn replaced_inactive_view_stays_hidden() {
    let (mut layout, clock) = layout_starting_in(State::Success);
    layout.set_state(State::Error);
    tick_at(&mut layout, &clock, 250);
    tick_at(&mut layout, &clock, 1_000);

    let old = layout.set_loading_view(Box::new(Spinner::dots()));
    assert!(old.refresh_indicator().is_none());
    assert_eq!(layout.visibility(Role::Loading), Visibility::Hidden);
    assert_eq!(layout.shown_roles(), vec![Role::Error]);
}

#[test]
fn replaced_active_view_is_shown_on_top() {
    let (mut layout, _clock) = layout_starting_in(State::Error);
    layout.set_error_view(Box::new(ErrorPanel::new().with_message("replacement")));

    assert_eq!(layout.shown_roles(), vec![Role::Error]);
    assert!(approx(layout.opacity(Role::Error), 1.0));
    assert_eq!(layout.stacking_order().last(), Some(&Role::Error));
    assert_eq!(layout.error_text(), Some("replacement"));
}

#[test]
fn error_view_from_template() {
    let (mut layout, _clock) = default_layout();
    let inflater = Inflater::default();
    assert!(layout
        .set_error_view_template(DEFAULT_ERROR_LAYOUT, &inflater)
        .is_ok());
    assert!(layout.error_view().retry_control().is_some());

    let err = layout.set_error_view_template("missing", &inflater);
    assert!(matches!(
        err,
        Err(lazylayout::LayoutError::UnknownTemplate { ref name }) if name == "missing"
    ));
}

#[test]
fn config_initial_state_is_applied() {
    let (layout, _clock) = manual_layout(LayoutConfig {
        state: State::Success,
        display_retry: true,
        ..LayoutConfig::default()
    });
    assert_eq!(layout.state(), State::Success);
    assert_eq!(layout.committed_state(), State::Success);
    assert!(layout.display_retry_button());
}
