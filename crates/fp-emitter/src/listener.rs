//! Listener handles.
//!
//! A [`Listener<A>`] is a cheap, cloneable handle around an
//! `Arc<dyn Fn(&A)>`. Two handles are equal only when they share the same
//! allocation, so removal works by identity: keep the handle you registered
//! and pass it (or a clone of it) to `off`. A second handle wrapping an
//! identical closure is a different listener.

use std::fmt;
use std::sync::Arc;

/// Closure type for event listeners.
pub type ListenerFn<A> = dyn Fn(&A) + Send + Sync;

/// An entry that can be stored in a [`Registry`](crate::registry::Registry).
pub trait Callback {
    /// Whether the entry can be invoked at all.
    ///
    /// Entries that report `false` are dropped whenever a successful removal
    /// rebuilds their event's queue.
    fn is_callable(&self) -> bool {
        true
    }

    /// Identity comparison used by removal.
    fn same(&self, other: &Self) -> bool;
}

/// Shared handle to a typed listener callback.
pub struct Listener<A> {
    inner: Arc<ListenerFn<A>>,
}

impl<A> Listener<A> {
    /// Wrap `callback` in a new listener with its own identity.
    pub fn new(callback: impl Fn(&A) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(callback),
        }
    }

    /// Invoke the callback with `args`.
    pub fn call(&self, args: &A) {
        (self.inner)(args)
    }
}

impl<A> Callback for Listener<A> {
    fn same(&self, other: &Self) -> bool {
        // Compare data addresses only; vtable pointers are not unique.
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<A> Eq for Listener<A> {}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
