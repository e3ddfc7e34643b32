use crate::domain::error::PushError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Serializes through JSON so maps arrive as plain JS objects.
pub fn to_js_object<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let text = serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize: {}", e)))?;
    js_sys::JSON::parse(&text)
}

pub fn from_js_value<T: DeserializeOwned>(value: JsValue) -> Result<T, PushError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| PushError::invalid_argument(format!("Failed to convert: {}", e)))
}

/// JS numbers that are whole, finite and within `i64` range.
pub fn integer_from_f64(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_integer_from_f64() {
        assert_eq!(integer_from_f64(3.0), Some(3));
        assert_eq!(integer_from_f64(-1.0), Some(-1));
        assert_eq!(integer_from_f64(2.5), None);
        assert_eq!(integer_from_f64(f64::NAN), None);
        assert_eq!(integer_from_f64(f64::INFINITY), None);
    }
}
