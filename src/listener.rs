//! Single-slot listeners for committed state changes and retry requests.
//!
//! Each slot holds at most one listener. Registering replaces (and drops)
//! the previous one. Every registration gets a [`Registration`] token so an
//! owner can later clear the slot without removing somebody else's listener.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use crate::state::State;

/// Receives every committed state change.
pub trait StateUpdateListener: Send {
    fn on_state_updated(&mut self, state: State);
}

impl<F> StateUpdateListener for F
where
    F: FnMut(State) + Send,
{
    fn on_state_updated(&mut self, state: State) {
        self(state)
    }
}

/// Receives retry activations from the error pane.
pub trait RetryListener: Send {
    fn on_retry(&mut self);
}

impl<F> RetryListener for F
where
    F: FnMut() + Send,
{
    fn on_retry(&mut self) {
        self()
    }
}

/// Token identifying one registration in a [`ListenerSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration(u64);

struct SlotInner<L: ?Sized> {
    listener: Option<Box<L>>,
    generation: u64,
}

pub struct ListenerSlot<L: ?Sized> {
    inner: Arc<Mutex<SlotInner<L>>>,
    ui_thread: ThreadId,
}

impl<L: ?Sized> Clone for ListenerSlot<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            ui_thread: self.ui_thread,
        }
    }
}

impl<L: ?Sized> fmt::Debug for ListenerSlot<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ListenerSlot")
            .field("set", &inner.listener.is_some())
            .field("generation", &inner.generation)
            .field("ui_thread", &self.ui_thread)
            .finish()
    }
}

impl<L: ?Sized> ListenerSlot<L> {
    pub fn new(ui_thread: ThreadId) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                listener: None,
                generation: 0,
            })),
            ui_thread,
        }
    }

    /// Thread that owns the layout this slot belongs to.
    pub fn ui_thread(&self) -> ThreadId {
        self.ui_thread
    }

    /// Installs `listener`, dropping whatever was registered before.
    pub fn set(&self, listener: Box<L>) -> Registration {
        let (previous, registration) = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            (inner.listener.replace(listener), Registration(inner.generation))
        };
        drop(previous);
        registration
    }

    /// Removes the current listener. Returns whether one was registered.
    pub fn clear(&self) -> bool {
        let previous = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.listener.take()
        };
        previous.is_some()
    }

    /// Clears the slot only if `registration` is still the current one.
    pub fn clear_if(&self, registration: Registration) -> bool {
        let previous = {
            let mut inner = self.inner.lock();
            if inner.generation != registration.0 {
                return false;
            }
            inner.generation += 1;
            inner.listener.take()
        };
        drop(previous);
        true
    }

    pub fn is_set(&self) -> bool {
        self.inner.lock().listener.is_some()
    }

    /// Registration of the installed listener, if any.
    pub fn current(&self) -> Option<Registration> {
        let inner = self.inner.lock();
        inner
            .listener
            .as_ref()
            .map(|_| Registration(inner.generation))
    }

    /// Calls the listener without holding the lock, so it may replace or
    /// clear its own slot. Returns false when the slot is empty.
    pub(crate) fn invoke(&self, f: impl FnOnce(&mut L)) -> bool {
        let (mut listener, generation) = {
            let mut inner = self.inner.lock();
            match inner.listener.take() {
                Some(listener) => (listener, inner.generation),
                None => return false,
            }
        };

        f(listener.as_mut());

        let mut inner = self.inner.lock();
        if inner.generation == generation && inner.listener.is_none() {
            inner.listener = Some(listener);
        }
        true
    }
}

/// Both listener slots of one layout. Clones share the slots.
#[derive(Clone, Debug)]
pub struct Listeners {
    state_updates: ListenerSlot<dyn StateUpdateListener>,
    retries: ListenerSlot<dyn RetryListener>,
}

impl Listeners {
    /// Slots owned by the calling thread.
    pub fn new() -> Self {
        let ui_thread = thread::current().id();
        Self {
            state_updates: ListenerSlot::new(ui_thread),
            retries: ListenerSlot::new(ui_thread),
        }
    }

    pub fn state_updates(&self) -> &ListenerSlot<dyn StateUpdateListener> {
        &self.state_updates
    }

    pub fn retries(&self) -> &ListenerSlot<dyn RetryListener> {
        &self.retries
    }

    pub(crate) fn notify_state(&self, state: State) -> bool {
        self.state_updates.invoke(|l| l.on_state_updated(state))
    }

    pub(crate) fn notify_retry(&self) -> bool {
        self.retries.invoke(|l| l.on_retry())
    }
}

impl Default for Listeners {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_replaces_previous_listener() {
        let listeners = Listeners::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        listeners.retries().set(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = Arc::clone(&second);
        listeners.retries().set(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        assert!(listeners.notify_retry());
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_if_ignores_stale_registration() {
        let listeners = Listeners::new();
        let stale = listeners.state_updates().set(Box::new(|_: State| {}));
        let current = listeners.state_updates().set(Box::new(|_: State| {}));

        assert!(!listeners.state_updates().clear_if(stale));
        assert!(listeners.state_updates().is_set());
        assert!(listeners.state_updates().clear_if(current));
        assert!(!listeners.state_updates().is_set());
    }

    #[test]
    fn empty_slot_skips_notification() {
        let listeners = Listeners::new();
        assert!(!listeners.notify_state(State::Success));
    }

    #[test]
    fn listener_may_clear_its_own_slot() {
        let listeners = Listeners::new();
        let slot = listeners.state_updates().clone();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        listeners.state_updates().set(Box::new(move |_: State| {
            seen.fetch_add(1, Ordering::SeqCst);
            slot.clear();
        }));

        assert!(listeners.notify_state(State::Error));
        assert!(!listeners.notify_state(State::Success));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
