//! Emitter<A> — named, synchronous pub/sub.
//!
//! Listeners are registered against string event names and receive a shared
//! reference to the emitted payload `A`. Use a tuple for several positional
//! arguments and `()` for none.
//!
//! Snapshot-on-emit semantics mean:
//!   - A listener removed *during* emission is still called in that round.
//!   - A listener added *during* emission is NOT called until the next emit.
//!
//! Panics inside a listener propagate to the caller of `emit` and skip the
//! remaining listeners. There is no error isolation at this level; wrap the
//! listener itself if that is needed.
//!
//! All methods take `&self`. The registry sits behind a `parking_lot::Mutex`
//! that is never held while a listener runs, so listeners may call back into
//! the emitter (including `on`/`off`/`clear` for the event being emitted).

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::listener::Listener;
use crate::registry::Registry;

/// Create a fresh, isolated emitter.
pub fn create_emitter<A>() -> Emitter<A> {
    Emitter::new()
}

/// Named-event emitter with payload type `A`.
///
/// Cloning yields another handle to the *same* emitter.
///
/// A listener must not capture a clone to call back into its own emitter:
/// the emitter owns the listener and the listener would own the emitter, so
/// neither is ever freed unless the listener is removed (`off`, `clear`,
/// `destroy`) first. Capture a [`WeakEmitter`] from [`Emitter::downgrade`]
/// instead.
pub struct Emitter<A> {
    registry: Arc<Mutex<Registry<Listener<A>>>>,
}

impl<A> Emitter<A> {
    /// Create a new, empty emitter.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::new())),
        }
    }

    /// Append `listener` to `event` and return how many listeners the event
    /// now has. The same listener may be registered more than once.
    pub fn on(&self, event: &str, listener: Listener<A>) -> usize {
        self.registry.lock().add(event, listener)
    }

    /// Remove every registration of `listener` from `event`.
    ///
    /// Returns `false` if the event has no listeners or `listener` is not
    /// among them.
    pub fn off(&self, event: &str, listener: &Listener<A>) -> bool {
        self.registry.lock().remove(event, listener)
    }

    /// Register `listener` for a single emission of `event`.
    ///
    /// The first time the wrapper fires it calls `listener` and then clears
    /// *every* listener on `event`, not only itself. The wrapper is private,
    /// so `off(event, &listener)` does not remove it.
    pub fn once(&self, event: &str, listener: Listener<A>) -> usize
    where
        A: 'static,
    {
        let emitter = self.downgrade();
        let name = event.to_owned();
        let wrapper = Listener::new(move |args: &A| {
            listener.call(args);
            if let Some(emitter) = emitter.upgrade() {
                emitter.clear(&name);
            }
        });
        self.on(event, wrapper)
    }

    /// Call every listener of `event`, in registration order, with `args`.
    pub fn emit(&self, event: &str, args: &A) {
        // Lock only for the copy; callbacks run unlocked.
        let snapshot = self.registry.lock().snapshot(event);
        for listener in snapshot {
            listener.call(args);
        }
    }

    /// Remove all listeners of `event`. Returns `false` if it had none.
    pub fn clear(&self, event: &str) -> bool {
        self.registry.lock().clear(event)
    }

    /// Remove all listeners of all events. The emitter stays usable.
    pub fn destroy(&self) {
        self.registry.lock().clear_all();
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry.lock().listener_count(event)
    }

    /// Sorted names of events that currently have listeners.
    pub fn event_names(&self) -> Vec<String> {
        self.registry.lock().event_names()
    }

    /// `true` when no event has listeners.
    pub fn is_empty(&self) -> bool {
        self.registry.lock().is_empty()
    }

    /// Non-owning handle to this emitter, safe to capture in its listeners.
    pub fn downgrade(&self) -> WeakEmitter<A> {
        WeakEmitter {
            registry: Arc::downgrade(&self.registry),
        }
    }
}

/// Non-owning handle to an [`Emitter`], obtained from [`Emitter::downgrade`].
pub struct WeakEmitter<A> {
    registry: Weak<Mutex<Registry<Listener<A>>>>,
}

impl<A> WeakEmitter<A> {
    /// The emitter, if any strong handle to it is still alive.
    pub fn upgrade(&self) -> Option<Emitter<A>> {
        self.registry.upgrade().map(|registry| Emitter { registry })
    }
}

impl<A> Clone for WeakEmitter<A> {
    fn clone(&self) -> Self {
        Self {
            registry: Weak::clone(&self.registry),
        }
    }
}

impl<A> fmt::Debug for WeakEmitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakEmitter")
            .field("alive", &(self.registry.strong_count() > 0))
            .finish()
    }
}

impl<A> Clone for Emitter<A> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.event_names())
            .finish()
    }
}
