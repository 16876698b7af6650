//! Change feeds for the admin console state layer.
//!
//! A [`ChangeFeed`] broadcasts each new value to its listeners inline, on the
//! notifying caller's thread.
//!
//! # Design Principles
//!
//! - Listeners run synchronously, in registration order
//! - Subscribing does not replay the current value
//! - A panicking listener never blocks delivery to later listeners
//! - Unsubscribing removes exactly one listener

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// A registered listener callback.
pub type Callback<T> = Box<dyn Fn(&T) + Send + Sync>;

struct Entry<T> {
    id: u64,
    callback: Arc<Callback<T>>,
}

/// A feed that broadcasts values to registered listeners.
pub struct ChangeFeed<T> {
    entries: Arc<Mutex<Vec<Entry<T>>>>,
    next_id: AtomicU64,
}

impl<T: 'static> ChangeFeed<T> {
    /// Creates a new feed with no listeners.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Registers a listener for future values.
    ///
    /// The listener is NOT invoked with the current value; it only sees
    /// values broadcast after this call. The returned [`Subscription`]
    /// removes exactly this listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.lock().expect("lock poisoned");
        entries.push(Entry {
            id,
            callback: Arc::new(Box::new(listener)),
        });
        drop(entries);

        let feed = Arc::downgrade(&self.entries);
        Subscription::new(move || remove_listener(&feed, id))
    }

    /// Broadcasts a value to all registered listeners.
    ///
    /// Listeners run inline in registration order. A listener that panics is
    /// caught and logged; the remaining listeners still run. The registry
    /// lock is released before any listener runs, so a listener may
    /// subscribe, unsubscribe, or read state without deadlocking.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Arc<Callback<T>>> = {
            let entries = self.entries.lock().expect("lock poisoned");
            entries.iter().map(|e| Arc::clone(&e.callback)).collect()
        };

        for callback in callbacks {
            if catch_unwind(AssertUnwindSafe(|| callback(value))).is_err() {
                tracing::warn!("change feed: listener panicked during notification");
            }
        }
    }

    /// Returns the count of currently registered listeners.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("lock poisoned").len()
    }

    /// Returns true if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: 'static> Default for ChangeFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ChangeFeed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeFeed")
            .field("listeners", &self.entries.lock().expect("lock poisoned").len())
            .finish()
    }
}

fn remove_listener<T>(feed: &Weak<Mutex<Vec<Entry<T>>>>, id: u64) {
    // The feed may already be gone; unsubscribing then is a no-op.
    if let Some(entries) = feed.upgrade() {
        entries.lock().expect("lock poisoned").retain(|e| e.id != id);
    }
}

/// Handle that removes one listener from the feed it came from.
///
/// Calling [`Subscription::unsubscribe`] stops delivery to that listener;
/// other listeners are unaffected. Dropping the handle without calling it
/// leaves the listener registered.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps a cancel action into a subscription handle.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Removes the listener this handle was returned for.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
