use crate::adapters::wasm::converters::{to_js_error, to_js_object};
use crate::domain::notification::{Alert, FetchResult, Notification};
use wasm_bindgen::prelude::*;

/// JS view of a [`Notification`], keeping the accessor names applications already use.
#[wasm_bindgen(js_name = PushNotification)]
pub struct PushNotificationHandle {
    inner: Notification,
}

impl From<Notification> for PushNotificationHandle {
    fn from(inner: Notification) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen(js_class = PushNotification)]
impl PushNotificationHandle {
    #[wasm_bindgen(getter, js_name = isRemote)]
    pub fn is_remote(&self) -> bool {
        self.inner.is_remote()
    }

    #[wasm_bindgen(getter, js_name = notificationId)]
    pub fn notification_id(&self) -> Option<String> {
        self.inner.notification_id().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getMessage)]
    pub fn get_message(&self) -> Option<String> {
        self.inner.message().map(str::to_owned)
    }

    /// The raw alert: a string, or an object with `title`, `subtitle` and `body`.
    #[wasm_bindgen(js_name = getAlert)]
    pub fn get_alert(&self) -> Result<JsValue, JsValue> {
        match self.inner.alert() {
            None => Ok(JsValue::UNDEFINED),
            Some(Alert::Text(text)) => Ok(JsValue::from_str(text)),
            Some(alert @ Alert::Structured(_)) => to_js_object(alert),
        }
    }

    #[wasm_bindgen(js_name = getTitle)]
    pub fn get_title(&self) -> Option<String> {
        self.inner.title().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getSubtitle)]
    pub fn get_subtitle(&self) -> Option<String> {
        self.inner.subtitle().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getSound)]
    pub fn get_sound(&self) -> Option<String> {
        self.inner.sound().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getCategory)]
    pub fn get_category(&self) -> Option<String> {
        self.inner.category().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getContentAvailable)]
    pub fn get_content_available(&self) -> Option<u8> {
        self.inner.content_available()
    }

    #[wasm_bindgen(js_name = getBadgeCount)]
    pub fn get_badge_count(&self) -> Option<f64> {
        self.inner.badge_count().map(|count| count as f64)
    }

    #[wasm_bindgen(js_name = getData)]
    pub fn get_data(&self) -> Result<JsValue, JsValue> {
        to_js_object(self.inner.data())
    }

    #[wasm_bindgen(js_name = getThreadID)]
    pub fn get_thread_id(&self) -> Option<String> {
        self.inner.thread_id().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getFireDate)]
    pub fn get_fire_date(&self) -> Option<String> {
        self.inner.fire_date().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getActionIdentifier)]
    pub fn get_action_identifier(&self) -> Option<String> {
        self.inner.action_identifier().map(str::to_owned)
    }

    #[wasm_bindgen(js_name = getUserText)]
    pub fn get_user_text(&self) -> Option<String> {
        self.inner.user_text().map(str::to_owned)
    }

    /// Reports background fetch completion; `result` is one of the `FetchResult` strings.
    ///
    /// Stricter than the native module, which forwards any string: anything other than
    /// the three `UIBackgroundFetchResult*` values is rejected with an invalid-argument
    /// error when the call would reach the bridge.
    pub fn finish(&self, result: &str) -> Result<(), JsValue> {
        if !self.inner.awaits_completion() {
            return Ok(());
        }
        let fetch_result: FetchResult = result.parse().map_err(to_js_error)?;
        self.inner.finish(fetch_result).map_err(JsValue::from)
    }
}
