//! Stream-style adapters over a layout's listener slots.
//!
//! A subscription owns the slot it registered into: a newer subscription (or
//! a plain listener) replaces it, and disposing it clears the slot only if it
//! is still the registered listener. Subscribing is only allowed from the
//! layout's UI thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Duration;

use crate::error::SubscribeError;
use crate::listener::Listeners;
use crate::state::State;

/// Receiving end of a state-change or retry subscription.
pub struct Subscription<T> {
    rx: Receiver<T>,
    disposed: Arc<AtomicBool>,
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl<T> Subscription<T> {
    fn new<F>(rx: Receiver<T>, disposed: Arc<AtomicBool>, release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            rx,
            disposed,
            release: Some(Box::new(release)),
        }
    }

    pub fn try_next(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    pub fn next_timeout(&self, timeout: Duration) -> Option<T> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Everything received so far.
    pub fn drain(&self) -> Vec<T> {
        self.rx.try_iter().collect()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Stops delivery and clears the listener this subscription registered.
    pub fn dispose(&mut self) {
        self.disposed.store(true, Ordering::SeqCst);
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn check_ui_thread(expected: ThreadId) -> Result<(), SubscribeError> {
    let actual = thread::current().id();
    if actual == expected {
        return Ok(());
    }
    tracing::warn!(?expected, ?actual, "subscription rejected off the UI thread");
    Err(SubscribeError::OffUiThread { expected, actual })
}

/// Emits every committed state.
pub fn state_changes(listeners: &Listeners) -> Result<Subscription<State>, SubscribeError> {
    let slot = listeners.state_updates();
    check_ui_thread(slot.ui_thread())?;

    let (tx, rx) = mpsc::channel();
    let disposed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&disposed);
    let registration = slot.set(Box::new(move |state: State| {
        if !flag.load(Ordering::SeqCst) {
            let _ = tx.send(state);
        }
    }));

    let slot = slot.clone();
    Ok(Subscription::new(rx, disposed, move || {
        slot.clear_if(registration);
    }))
}

/// Emits `()` for every retry activation.
pub fn retries(listeners: &Listeners) -> Result<Subscription<()>, SubscribeError> {
    let slot = listeners.retries();
    check_ui_thread(slot.ui_thread())?;

    let (tx, rx) = mpsc::channel();
    let disposed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&disposed);
    let registration = slot.set(Box::new(move || {
        if !flag.load(Ordering::SeqCst) {
            let _ = tx.send(());
        }
    }));

    let slot = slot.clone();
    Ok(Subscription::new(rx, disposed, move || {
        slot.clear_if(registration);
    }))
}
