//! The state machine tying scheduling, view transitions and listeners
//! together.

mod builder;

pub use builder::LayoutBuilder;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, Widget};
use std::sync::Arc;

use crate::clock::Clock;
use crate::config::TimingConfig;
use crate::error::{LayoutError, SubscribeError};
use crate::listener::{Listeners, Registration, RetryListener, StateUpdateListener};
use crate::pane::{Inflater, Pane, RenderContext};
use crate::rx::{self, Subscription};
use crate::scheduler::{Debouncer, PendingCommit};
use crate::state::State;
use crate::transition::{Animator, ManagedViews, Role, Visibility};

/// How soon to tick again while a fade is running.
const FRAME_MS: u64 = 16;

/// Container switching between a loading, an error and a success pane.
///
/// Requests are recorded immediately ([`LazyLayout::state`] reflects the
/// latest request) but only committed to the panes and reported to
/// listeners from [`LazyLayout::tick`], once their debounce delay elapsed.
pub struct LazyLayout {
    views: ManagedViews,
    requested: State,
    committed: State,
    debouncer: Debouncer,
    animator: Animator,
    listeners: Listeners,
    clock: Arc<dyn Clock>,
    refresh_gesture_bound: bool,
}

impl LazyLayout {
    fn assemble(
        views: ManagedViews,
        initial: State,
        timing: TimingConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mut layout = Self {
            views,
            requested: initial,
            committed: initial,
            debouncer: Debouncer::new(timing),
            animator: Animator::new(timing.animation_ms),
            listeners: Listeners::new(),
            clock,
            refresh_gesture_bound: false,
        };
        let target = Role::for_state(initial);
        if layout.views.refresh_mode() {
            layout.update_refresh_state(target, false, 0);
        } else {
            layout.update_view_state(target);
        }
        layout
    }

    /// Latest requested state.
    pub fn state(&self) -> State {
        self.requested
    }

    /// State whose pane was last committed as visible.
    pub fn committed_state(&self) -> State {
        self.committed
    }

    /// State waiting for its commit, if any.
    pub fn pending_state(&self) -> Option<State> {
        self.debouncer.pending().map(|p| p.target)
    }

    /// Requests `state` with an animated transition.
    pub fn set_state(&mut self, state: State) {
        self.request(state, true, true);
    }

    /// Requests `state`; `animate = false` swaps panes instantly on commit.
    pub fn set_state_with_animation(&mut self, state: State, animate: bool) {
        self.request(state, animate, true);
    }

    /// Like [`LazyLayout::set_state_with_animation`], but the commit skips
    /// the state update listener.
    pub fn set_state_silently(&mut self, state: State, animate: bool) {
        self.request(state, animate, false);
    }

    fn request(&mut self, state: State, animate: bool, notify: bool) {
        if self.requested == state {
            return;
        }
        if state == self.committed {
            // Already on screen, nothing left to commit.
            self.drop_pending("reverted");
            return;
        }
        let now_ms = self.clock.now_ms();
        if let Some(superseded) = self.debouncer.schedule(state, animate, notify, now_ms) {
            tracing::debug!(superseded = %superseded.target, "pending commit superseded");
        }
        tracing::debug!(
            from = %self.requested,
            to = %state,
            due_ms = ?self.debouncer.next_deadline_ms(),
            "state change scheduled"
        );
        self.requested = state;
    }

    /// Runs a due commit and advances animations. Returns true when the
    /// panes changed and should be redrawn.
    pub fn tick(&mut self) -> bool {
        let now_ms = self.clock.now_ms();
        let mut changed = false;
        if let Some(commit) = self.debouncer.take_due(now_ms) {
            self.commit(commit, now_ms);
            changed = true;
        }
        changed |= self.animator.advance(&mut self.views, now_ms);
        changed
    }

    /// When the next [`LazyLayout::tick`] has work to do.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        let frame = self
            .animator
            .is_running()
            .then(|| self.clock.now_ms().saturating_add(FRAME_MS));
        match (self.debouncer.next_deadline_ms(), frame) {
            (Some(due), Some(frame)) => Some(due.min(frame)),
            (due, frame) => due.or(frame),
        }
    }

    fn commit(&mut self, commit: PendingCommit, now_ms: u64) {
        self.committed = commit.target;
        self.debouncer.mark_committed(commit.target, now_ms);

        let target = Role::for_state(commit.target);
        if self.views.refresh_mode() {
            self.update_refresh_state(target, commit.animate, now_ms);
        } else if commit.animate {
            self.animate_view_state(target, now_ms);
        } else {
            self.update_view_state(target);
        }
        tracing::debug!(
            state = %commit.target,
            animate = commit.animate,
            waited_ms = now_ms.saturating_sub(commit.requested_ms),
            "state committed"
        );

        if commit.notify {
            self.listeners.notify_state(commit.target);
        }
    }

    /// Shows `target` alone, on top, without animation.
    fn update_view_state(&mut self, target: Role) {
        self.animator.finish(&mut self.views);
        for role in self.views.children().to_vec() {
            if role != target {
                self.views.hide(role);
            }
        }
        if self.views.is_attached(target) {
            self.views.show(target, 1.0);
            self.views.bring_to_front(target);
        }
    }

    fn animate_view_state(&mut self, target: Role, now_ms: u64) {
        self.animator.finish(&mut self.views);
        let outgoing = self.views.first_fully_visible();
        if outgoing == Some(target) {
            return;
        }
        self.animator
            .cross_fade(&mut self.views, outgoing, target, now_ms);
    }

    /// The loading slot holds a refresh container: loading only toggles its
    /// indicator, other states fade between error and success.
    fn update_refresh_state(&mut self, target: Role, animate: bool, now_ms: u64) {
        self.animator.finish(&mut self.views);
        if let Some(indicator) = self.views.pane_mut(Role::Loading).refresh_indicator_mut() {
            indicator.set_refreshing(target == Role::Loading);
        }
        if target == Role::Loading {
            return;
        }
        if animate {
            self.animate_view_state(target, now_ms);
        } else {
            self.update_view_state(target);
        }
    }

    pub fn display_retry_button(&self) -> bool {
        self.views
            .get(Role::Error)
            .pane()
            .retry_control()
            .is_some_and(|retry| retry.is_visible())
    }

    /// No-op when the error pane has no retry control.
    pub fn set_display_retry_button(&mut self, display: bool) {
        if let Some(retry) = self.views.pane_mut(Role::Error).retry_control_mut() {
            retry.set_visible(display);
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        self.views
            .get(Role::Error)
            .pane()
            .text_slot()
            .and_then(|slot| slot.text())
    }

    /// No-op when the error pane has no text slot.
    pub fn set_error_text(&mut self, text: impl Into<String>) {
        if let Some(slot) = self.views.pane_mut(Role::Error).text_slot_mut() {
            slot.set_text(Some(text.into()));
        }
    }

    pub fn clear_error_text(&mut self) {
        if let Some(slot) = self.views.pane_mut(Role::Error).text_slot_mut() {
            slot.set_text(None);
        }
    }

    pub fn loading_view(&self) -> &dyn Pane {
        self.views.get(Role::Loading).pane()
    }

    pub fn error_view(&self) -> &dyn Pane {
        self.views.get(Role::Error).pane()
    }

    pub fn success_view(&self) -> &dyn Pane {
        self.views.get(Role::Success).pane()
    }

    /// Replaces the loading pane and returns the detached one. A pane with
    /// the refresh capability switches the layout to pull-to-refresh mode.
    pub fn set_loading_view(&mut self, pane: Box<dyn Pane>) -> Box<dyn Pane> {
        self.animator.finish(&mut self.views);
        let old = self.views.replace(Role::Loading, pane);
        if !self.views.refresh_mode() {
            self.refresh_gesture_bound = false;
        }
        self.restore_slot(Role::Loading);
        old
    }

    /// Replaces the error pane and returns the detached one.
    pub fn set_error_view(&mut self, pane: Box<dyn Pane>) -> Box<dyn Pane> {
        self.animator.finish(&mut self.views);
        let old = self.views.replace(Role::Error, pane);
        self.restore_slot(Role::Error);
        old
    }

    /// Inflates `template` and installs it as the error pane.
    pub fn set_error_view_template(
        &mut self,
        template: &str,
        inflater: &Inflater,
    ) -> Result<Box<dyn Pane>, LayoutError> {
        let pane = inflater.inflate(template)?;
        Ok(self.set_error_view(pane))
    }

    /// Puts a freshly attached pane into the state the committed state implies.
    fn restore_slot(&mut self, role: Role) {
        let active = Role::for_state(self.committed) == role;
        if self.views.is_attached(role) {
            if active {
                self.update_view_state(role);
            } else {
                self.views.hide(role);
            }
        } else if let Some(indicator) = self.views.pane_mut(role).refresh_indicator_mut() {
            indicator.set_refreshing(active);
        }
    }

    /// Installs a pull-to-refresh container in the loading slot and routes
    /// its refresh gesture (see [`LazyLayout::on_refresh_gesture`]).
    pub fn setup_with_refresh_container(&mut self, container: Box<dyn Pane>) -> Box<dyn Pane> {
        if container.refresh_indicator().is_none() {
            tracing::warn!("pane has no refresh capability, installed as a plain loading view");
        }
        let old = self.set_loading_view(container);
        self.refresh_gesture_bound = self.views.refresh_mode();
        old
    }

    /// A pull gesture reported by the refresh container: same as requesting
    /// [`State::Loading`]. Ignored unless a container was set up.
    pub fn on_refresh_gesture(&mut self) -> bool {
        if !(self.refresh_gesture_bound && self.views.refresh_mode()) {
            tracing::warn!("refresh gesture ignored, no refresh container set up");
            return false;
        }
        if let Some(indicator) = self.views.pane_mut(Role::Loading).refresh_indicator_mut() {
            indicator.set_refreshing(true);
        }
        self.set_state(State::Loading);
        true
    }

    pub fn is_refresh_mode(&self) -> bool {
        self.views.refresh_mode()
    }

    /// Indicator state of the refresh container, if one is installed.
    pub fn is_refreshing(&self) -> Option<bool> {
        self.views
            .get(Role::Loading)
            .pane()
            .refresh_indicator()
            .map(|indicator| indicator.is_refreshing())
    }

    /// The user activated the retry control. Only counts when the error
    /// pane is on screen (shown, opacity above 0) and its retry control
    /// displayed. The state is left
    /// untouched; the retry listener decides what to do.
    pub fn activate_retry(&mut self) -> bool {
        let view = self.views.get(Role::Error);
        let displayed = view.is_shown()
            && view.opacity() > 0.0
            && view
                .pane()
                .retry_control()
                .is_some_and(|retry| retry.is_visible());
        if !displayed {
            return false;
        }
        tracing::debug!("retry activated");
        self.listeners.notify_retry();
        true
    }

    pub fn set_state_update_listener<L>(&mut self, listener: L) -> Registration
    where
        L: StateUpdateListener + 'static,
    {
        self.listeners.state_updates().set(Box::new(listener))
    }

    pub fn clear_state_update_listener(&mut self) {
        self.listeners.state_updates().clear();
    }

    pub fn set_retry_listener<L>(&mut self, listener: L) -> Registration
    where
        L: RetryListener + 'static,
    {
        self.listeners.retries().set(Box::new(listener))
    }

    pub fn clear_retry_listener(&mut self) {
        self.listeners.retries().clear();
    }

    /// Handle on both listener slots, shareable with other threads.
    pub fn listeners(&self) -> Listeners {
        self.listeners.clone()
    }

    pub fn state_changes(&self) -> Result<Subscription<State>, SubscribeError> {
        rx::state_changes(&self.listeners)
    }

    pub fn retries(&self) -> Result<Subscription<()>, SubscribeError> {
        rx::retries(&self.listeners)
    }

    pub fn on_attached(&mut self) {
        self.drop_pending("attached");
    }

    /// Drops the pending commit and settles any running fade.
    pub fn on_detached(&mut self) {
        self.drop_pending("detached");
        self.animator.finish(&mut self.views);
    }

    fn drop_pending(&mut self, reason: &'static str) {
        if let Some(pending) = self.debouncer.cancel() {
            tracing::debug!(dropped = %pending.target, reason, "pending commit cancelled");
        }
        self.requested = self.committed;
        self.sync_refresh_indicator();
    }

    /// Undoes an eager gesture indicator once its Loading request is gone.
    fn sync_refresh_indicator(&mut self) {
        let refreshing = self.committed == State::Loading;
        if let Some(indicator) = self.views.pane_mut(Role::Loading).refresh_indicator_mut() {
            indicator.set_refreshing(refreshing);
        }
    }

    pub fn visibility(&self, role: Role) -> Visibility {
        self.views.get(role).visibility()
    }

    pub fn opacity(&self, role: Role) -> f32 {
        self.views.get(role).opacity()
    }

    /// Attached panes currently shown, back to front.
    pub fn shown_roles(&self) -> Vec<Role> {
        self.views.shown()
    }

    /// Attached panes, back to front.
    pub fn stacking_order(&self) -> &[Role] {
        self.views.children()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Current time on the layout's clock.
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

impl Widget for &LazyLayout {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ctx = RenderContext {
            now_ms: self.clock.now_ms(),
        };
        for role in self.views.children() {
            let view = self.views.get(*role);
            if !view.is_shown() || view.opacity() <= 0.0 {
                continue;
            }
            Clear.render(area, buf);
            view.pane().render(area, buf, &ctx);
            if view.opacity() < 1.0 {
                buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
            }
        }
        if self.views.refresh_mode() {
            self.views.get(Role::Loading).pane().render(area, buf, &ctx);
        }
    }
}
