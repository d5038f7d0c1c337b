//! WASM bindings for fp-emitter.
//!
//! Exposes `createEmitter()` and the `Emitter` class to JavaScript via
//! wasm-bindgen. Listeners are stored as plain `JsValue`s: nothing is checked
//! at registration, so a value that is not a function only fails once `emit`
//! reaches it, and a successful `off` silently drops such values.

pub mod emitter;
pub mod entry;
pub mod error;

pub use emitter::{create_emitter, WasmEmitter};
