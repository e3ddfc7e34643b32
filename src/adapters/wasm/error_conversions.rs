use crate::domain::error::PushError;
use wasm_bindgen::JsValue;

/// A rejected bridge promise, message passed through untouched.
impl From<JsValue> for PushError {
    fn from(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        PushError::TransportRejection(message)
    }
}

/// Conversion from PushError to JsValue for WASM boundary
impl From<PushError> for JsValue {
    fn from(error: PushError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
