//! Debounced, cancellable scheduling of state commits.
//!
//! At most one commit is pending per layout. Scheduling a new one replaces
//! the old one, so only the last request inside a debounce window commits.

use crate::config::{SchedulePolicy, TimingConfig};
use crate::state::State;

/// A state change waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingCommit {
    pub target: State,
    pub animate: bool,
    pub notify: bool,
    pub requested_ms: u64,
    pub due_ms: u64,
}

#[derive(Debug)]
pub struct Debouncer {
    timing: TimingConfig,
    pending: Option<PendingCommit>,
    /// Set when a loading commit is applied, cleared by any other commit.
    loading_started_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            pending: None,
            loading_started_ms: None,
        }
    }

    /// Delay before a commit to `target` requested at `now_ms` may run.
    pub fn delay_for(&self, target: State, now_ms: u64) -> u64 {
        let debounce = self.timing.animation_ms;
        match self.timing.policy {
            SchedulePolicy::FlatDelay => debounce,
            SchedulePolicy::MinimumDwell => {
                let dwell_remaining = match self.loading_started_ms {
                    Some(started) if target != State::Loading => {
                        started
                            .saturating_add(self.timing.min_dwell_ms)
                            .saturating_sub(now_ms)
                    }
                    _ => 0,
                };
                debounce.max(dwell_remaining)
            }
        }
    }

    /// Schedules a commit, returning the one it superseded.
    pub fn schedule(
        &mut self,
        target: State,
        animate: bool,
        notify: bool,
        now_ms: u64,
    ) -> Option<PendingCommit> {
        let due_ms = now_ms.saturating_add(self.delay_for(target, now_ms));
        self.pending.replace(PendingCommit {
            target,
            animate,
            notify,
            requested_ms: now_ms,
            due_ms,
        })
    }

    /// Removes and returns the pending commit if it is due.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingCommit> {
        match self.pending {
            Some(pending) if pending.due_ms <= now_ms => self.pending.take(),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<PendingCommit> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PendingCommit> {
        self.pending.as_ref()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.map(|p| p.due_ms)
    }

    /// Records the commit of `state` at `now_ms` for the dwell rule.
    pub fn mark_committed(&mut self, state: State, now_ms: u64) {
        self.loading_started_ms = (state == State::Loading).then_some(now_ms);
    }

    pub fn loading_started_ms(&self) -> Option<u64> {
        self.loading_started_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dwell() -> Debouncer {
        Debouncer::new(TimingConfig::default())
    }

    #[test]
    fn first_transition_only_debounces() {
        let debouncer = dwell();
        assert_eq!(debouncer.delay_for(State::Success, 1_000), 250);
    }

    #[test]
    fn leaving_fresh_loading_waits_for_dwell() {
        let mut debouncer = dwell();
        debouncer.mark_committed(State::Loading, 1_000);
        assert_eq!(debouncer.delay_for(State::Success, 1_100), 400);
        assert_eq!(debouncer.delay_for(State::Error, 1_300), 250);
        assert_eq!(debouncer.delay_for(State::Success, 2_000), 250);
    }

    #[test]
    fn returning_to_loading_is_not_dwell_gated() {
        let mut debouncer = dwell();
        debouncer.mark_committed(State::Loading, 1_000);
        assert_eq!(debouncer.delay_for(State::Loading, 1_010), 250);
    }

    #[test]
    fn other_commits_clear_loading_start() {
        let mut debouncer = dwell();
        debouncer.mark_committed(State::Loading, 1_000);
        debouncer.mark_committed(State::Error, 1_500);
        assert_eq!(debouncer.loading_started_ms(), None);
    }

    #[test]
    fn flat_delay_ignores_dwell() {
        let mut debouncer = Debouncer::new(TimingConfig {
            policy: SchedulePolicy::FlatDelay,
            ..TimingConfig::default()
        });
        debouncer.mark_committed(State::Loading, 1_000);
        assert_eq!(debouncer.delay_for(State::Success, 1_001), 250);
    }

    #[test]
    fn schedule_replaces_pending_commit() {
        let mut debouncer = dwell();
        assert!(debouncer.schedule(State::Error, true, true, 0).is_none());
        let superseded = debouncer.schedule(State::Success, false, true, 100);
        assert_eq!(superseded.map(|p| p.target), Some(State::Error));
        assert_eq!(debouncer.next_deadline_ms(), Some(350));
    }

    #[test]
    fn take_due_waits_for_deadline() {
        let mut debouncer = dwell();
        debouncer.schedule(State::Success, true, true, 0);
        assert!(debouncer.take_due(249).is_none());
        let commit = debouncer.take_due(250).unwrap();
        assert_eq!(commit.target, State::Success);
        assert!(debouncer.pending().is_none());
    }

    #[test]
    fn huge_dwell_saturates_deadline() {
        let mut debouncer = Debouncer::new(TimingConfig {
            min_dwell_ms: u64::MAX,
            ..TimingConfig::default()
        });
        debouncer.mark_committed(State::Loading, 10);
        debouncer.schedule(State::Success, true, true, 20);
        assert_eq!(debouncer.next_deadline_ms(), Some(u64::MAX));
    }
}
