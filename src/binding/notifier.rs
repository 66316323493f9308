//! Listener registry shared by every bindable value.
//!
//! Listeners are plain callbacks. They run synchronously on whichever thread
//! calls [`ChangeNotifier::trigger`], so anything that needs to reach UI state
//! should forward a signal over a channel instead of touching it directly.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A change callback. Identity is the `Arc` allocation, so keep a clone of the
/// listener around if you want to remove it later.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

/// Wrap a closure as a [`Listener`]
pub fn listener<F>(f: F) -> Listener
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Ordered list of listeners for one bindable entity.
#[derive(Default)]
pub struct ChangeNotifier {
    listeners: Mutex<Vec<Listener>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Listener>> {
        // A listener that panicked mid-trigger never holds this lock
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. Registering the same listener twice means it is
    /// called twice per trigger.
    pub fn add_listener(&self, listener: Listener) {
        self.lock().push(listener);
    }

    /// Remove every registration of `listener`. Unknown listeners are ignored.
    pub fn remove_listener(&self, listener: &Listener) {
        self.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    /// Call every registered listener on the current thread.
    ///
    /// Works on a snapshot, so listeners may add or remove listeners (or
    /// trigger again) while running.
    pub fn trigger(&self) {
        let snapshot: Vec<Listener> = self.lock().clone();
        tracing::trace!(listeners = snapshot.len(), "trigger");
        for listener in snapshot {
            listener();
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
