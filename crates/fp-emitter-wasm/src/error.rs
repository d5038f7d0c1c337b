//! Error conversion: EmitterError → JsValue for wasm-bindgen boundaries.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures raised by the emitter itself.
///
/// Errors thrown by listeners are not wrapped: they reach the caller of
/// `emit` as the original thrown value.
#[derive(Debug, Error)]
pub enum EmitterError {
    #[error("listener registered for \"{event}\" is not a function")]
    NotCallable { event: String },

    #[error("arguments for \"{event}\" must be passed to emit as an array")]
    ArgsNotArray { event: String },
}

/// Convert an `EmitterError` into a `JsValue` suitable for throwing across the
/// WASM boundary.
///
/// Both variants become a `TypeError`, which is what calling a non-function
/// (or spreading a non-list) raises in plain JavaScript.
pub fn to_js_error(e: EmitterError) -> JsValue {
    let msg = e.to_string();
    match e {
        EmitterError::NotCallable { .. } | EmitterError::ArgsNotArray { .. } => {
            js_sys::TypeError::new(&msg).into()
        }
    }
}

/// Convert any `EmitterError` result into a `Result<T, JsValue>`.
pub trait IntoJsResult<T> {
    fn into_js(self) -> Result<T, JsValue>;
}

impl<T> IntoJsResult<T> for Result<T, EmitterError> {
    fn into_js(self) -> Result<T, JsValue> {
        self.map_err(to_js_error)
    }
}
