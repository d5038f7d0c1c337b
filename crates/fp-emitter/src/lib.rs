//! Minimal synchronous, in-process event emitter.
//!
//! # Modules
//!
//! - [`emitter`] — [`Emitter<A>`], its non-owning [`WeakEmitter<A>`], and the
//!   [`create_emitter`] factory.
//! - [`listener`] — [`Listener<A>`] handles compared by identity, and the
//!   [`Callback`] trait for stored entries.
//! - [`registry`] — [`Registry<L>`], the event-name → queue mapping shared
//!   with the WASM bindings.

pub mod emitter;
pub mod listener;
pub mod registry;

pub use emitter::{create_emitter, Emitter, WeakEmitter};
pub use listener::{Callback, Listener, ListenerFn};
pub use registry::Registry;
