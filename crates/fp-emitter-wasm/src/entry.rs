//! JsEntry — what the JS-facing registry stores.

use fp_emitter::Callback;
use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::EmitterError;

#[derive(Debug, Clone)]
pub enum JsEntry {
    /// Registered through `on`; may be any JS value.
    Value(JsValue),
    /// Registered through `once`. Stands in for the internal wrapper function,
    /// so it is always callable and never identical to a caller's value.
    Once(JsValue),
}

impl JsEntry {
    /// The value that should actually be invoked.
    pub fn target(&self) -> &JsValue {
        match self {
            Self::Value(v) | Self::Once(v) => v,
        }
    }
}

impl Callback for JsEntry {
    fn is_callable(&self) -> bool {
        match self {
            Self::Value(v) => v.is_function(),
            Self::Once(_) => true,
        }
    }

    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            // JsValue equality is `===`.
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

/// Borrow `value` as a function, or fail the way a JS call would.
pub fn as_function<'a>(event: &str, value: &'a JsValue) -> Result<&'a Function, EmitterError> {
    value
        .dyn_ref::<Function>()
        .ok_or_else(|| EmitterError::NotCallable {
            event: event.to_owned(),
        })
}
