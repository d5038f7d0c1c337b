//! WasmEmitter — the `Emitter` class exposed to JavaScript.
//!
//! WASM is single-threaded, so the registry lives in an `Rc<RefCell<..>>`.
//! The borrow is always released before calling into JS, which lets
//! listeners call any emitter method while an `emit` is in progress.

use std::cell::RefCell;
use std::rc::Rc;

use fp_emitter::Registry;
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::{
    entry::{as_function, JsEntry},
    error::{EmitterError, IntoJsResult},
};

/// Create a fresh, isolated emitter.
#[wasm_bindgen(js_name = "createEmitter")]
pub fn create_emitter() -> WasmEmitter {
    WasmEmitter::new()
}

/// Named-event emitter exposed to JavaScript as `Emitter`.
#[wasm_bindgen(js_name = "Emitter")]
pub struct WasmEmitter {
    registry: Rc<RefCell<Registry<JsEntry>>>,
}

#[wasm_bindgen(js_class = "Emitter")]
impl WasmEmitter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEmitter {
        WasmEmitter {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Attach `listener` to `event`. Returns the event's listener count.
    ///
    /// `listener` is stored as given, even if it is not a function.
    pub fn on(&self, event: &str, listener: JsValue) -> usize {
        self.registry
            .borrow_mut()
            .add(event, JsEntry::Value(listener))
    }

    /// Remove every registration of `listener` (compared with `===`).
    pub fn off(&self, event: &str, listener: JsValue) -> bool {
        self.registry
            .borrow_mut()
            .remove(event, &JsEntry::Value(listener))
    }

    /// Attach `listener` for one emission; firing it clears the whole event.
    pub fn once(&self, event: &str, listener: JsValue) -> usize {
        self.registry
            .borrow_mut()
            .add(event, JsEntry::Once(listener))
    }

    /// Call every listener of `event` with the elements of `args` spread as
    /// positional arguments.
    ///
    /// `args` is a single array, not a rest parameter: call
    /// `emitter.emit("x", [1, 2])`, not `emitter.emit("x", 1, 2)`. Omitted,
    /// `undefined` or `null` `args` means a zero-argument call; any other
    /// non-array throws a `TypeError` before a listener runs.
    ///
    /// Throws whatever a listener throws, or a `TypeError` when a stored value
    /// is not a function. Later listeners are skipped in both cases.
    pub fn emit(&self, event: &str, args: JsValue) -> Result<(), JsValue> {
        let args = spread_args(event, args).into_js()?;
        let snapshot = self.registry.borrow().snapshot(event);
        for entry in snapshot {
            let function = as_function(event, entry.target()).into_js()?;
            function.apply(&JsValue::UNDEFINED, &args)?;
            // Only reached when the call returned normally.
            if let JsEntry::Once(_) = entry {
                self.registry.borrow_mut().clear(event);
            }
        }
        Ok(())
    }

    /// Remove `event` entirely. Returns `false` if it had no listeners.
    pub fn clear(&self, event: &str) -> bool {
        self.registry.borrow_mut().clear(event)
    }

    /// Remove every listener of every event.
    pub fn destroy(&self) {
        self.registry.borrow_mut().clear_all();
    }

    /// Number of values stored for `event`.
    #[wasm_bindgen(js_name = "listenerCount")]
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry.borrow().listener_count(event)
    }

    /// Sorted names of events with stored values.
    #[wasm_bindgen(js_name = "eventNames")]
    pub fn event_names(&self) -> Vec<String> {
        self.registry.borrow().event_names()
    }
}

/// Normalize the `args` passed to `emit` into an argument list.
fn spread_args(event: &str, args: JsValue) -> Result<Array, EmitterError> {
    if args.is_undefined() || args.is_null() {
        return Ok(Array::new());
    }
    if !Array::is_array(&args) {
        return Err(EmitterError::ArgsNotArray {
            event: event.to_owned(),
        });
    }
    Ok(args.unchecked_into())
}

impl Default for WasmEmitter {
    fn default() -> Self {
        Self::new()
    }
}
