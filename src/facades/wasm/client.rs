use super::notification::PushNotificationHandle;
use crate::adapters::wasm::converters::{from_js_value, integer_from_f64, to_js_object};
use crate::adapters::wasm::JsTransport;
use crate::domain::error::PushError;
use crate::domain::events::PushEvent;
use crate::domain::notification::FetchResult;
use crate::domain::permissions::{AuthorizationStatus, PermissionRequest};
use crate::domain::request::{
    FireDate, LocalNotificationDetails, NotificationCategory, NotificationRequest,
};
use crate::facades::native::PushNotificationClient;
use crate::platform::Platform;
use chrono::DateTime;
use js_sys::{Function, Object, Promise, Reflect};
use serde_json::{json, Map, Value};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}

/// `FetchResult` wire constants.
#[wasm_bindgen(js_name = fetchResults)]
pub fn fetch_results() -> Result<JsValue, JsValue> {
    to_js_object(&json!({
        "NewData": FetchResult::NewData.as_str(),
        "NoData": FetchResult::NoData.as_str(),
        "ResultFailed": FetchResult::ResultFailed.as_str(),
    }))
}

/// `AuthorizationStatus` wire constants.
#[wasm_bindgen(js_name = authorizationStatuses)]
pub fn authorization_statuses() -> Result<JsValue, JsValue> {
    to_js_object(&json!({
        "UNAuthorizationStatusNotDetermined": AuthorizationStatus::NotDetermined,
        "UNAuthorizationStatusDenied": AuthorizationStatus::Denied,
        "UNAuthorizationStatusAuthorized": AuthorizationStatus::Authorized,
        "UNAuthorizationStatusProvisional": AuthorizationStatus::Provisional,
    }))
}

fn event_to_js(event: PushEvent) -> Result<JsValue, JsValue> {
    match event {
        PushEvent::Notification(notification) => {
            Ok(PushNotificationHandle::from(notification).into())
        }
        PushEvent::Register(Some(token)) => Ok(JsValue::from_str(&token)),
        PushEvent::Register(None) => Ok(JsValue::UNDEFINED),
        PushEvent::RegistrationError(error) => to_js_object(&error),
    }
}

fn fire_date_from_js(value: &JsValue) -> Result<Option<FireDate>, PushError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    if let Some(text) = value.as_string() {
        return Ok(Some(FireDate::Text(text)));
    }
    let date = value
        .dyn_ref::<js_sys::Date>()
        .ok_or_else(|| PushError::invalid_argument("fireDate must be a Date or a string"))?;
    DateTime::from_timestamp_millis(date.get_time() as i64)
        .filter(|_| !date.get_time().is_nan())
        .map(|date| Some(FireDate::Date(date)))
        .ok_or_else(|| PushError::invalid_argument("fireDate is not a valid date"))
}

fn request_from_js(request: &JsValue) -> Result<NotificationRequest, PushError> {
    if !request.is_object() {
        return Err(PushError::invalid_argument("request must be an object"));
    }
    let fire_date = Reflect::get(request, &JsValue::from_str("fireDate"))
        .map_err(PushError::from)
        .and_then(|value| fire_date_from_js(&value))?;

    let fields = Object::assign(&Object::new(), request.unchecked_ref());
    Reflect::delete_property(&fields, &JsValue::from_str("fireDate")).map_err(PushError::from)?;

    let mut decoded: NotificationRequest = from_js_value(fields.into())?;
    decoded.fire_date = fire_date;
    Ok(decoded)
}

/// JS entry point mirroring the `PushNotificationIOS` module API.
#[wasm_bindgen]
pub struct PushNotificationIOS {
    client: Rc<PushNotificationClient>,
}

#[wasm_bindgen]
impl PushNotificationIOS {
    /// Wraps the native notification module. `emitter` defaults to the module.
    #[wasm_bindgen(constructor)]
    pub fn new(native_module: JsValue, emitter: JsValue) -> PushNotificationIOS {
        let platform = if native_module.is_undefined() || native_module.is_null() {
            Platform::new()
        } else {
            let logger = crate::adapters::logger();
            Platform::with_transport(Rc::new(JsTransport::new(native_module, emitter, logger)))
        };
        PushNotificationIOS {
            client: Rc::new(PushNotificationClient::new(platform)),
        }
    }

    #[wasm_bindgen(js_name = addEventListener)]
    pub fn add_event_listener(&self, event: &str, handler: Function) -> Result<(), JsValue> {
        let logger = self.client.platform().logger();
        self.client
            .add_event_listener(event, move |event| match event_to_js(event) {
                Ok(value) => {
                    if let Err(e) = handler.call1(&JsValue::NULL, &value) {
                        logger.error(&format!("Listener threw: {}", PushError::from(e)));
                    }
                }
                Err(e) => logger.error(&format!(
                    "Failed to convert event: {}",
                    PushError::from(e)
                )),
            })
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = removeEventListener)]
    pub fn remove_event_listener(&self, event: &str) -> Result<(), JsValue> {
        self.client
            .remove_event_listener(event)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = addNotificationRequest)]
    pub fn add_notification_request(&self, request: JsValue) -> Result<(), JsValue> {
        self.client.platform().transport()?;
        let request = request_from_js(&request)?;
        self.client
            .add_notification_request(request)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = setNotificationCategories)]
    pub fn set_notification_categories(&self, categories: JsValue) -> Result<(), JsValue> {
        let categories: Vec<NotificationCategory> = from_js_value(categories)?;
        self.client
            .set_notification_categories(&categories)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = presentLocalNotification)]
    pub fn present_local_notification(&self, details: JsValue) -> Result<(), JsValue> {
        let details: LocalNotificationDetails = from_js_value(details)?;
        self.client
            .present_local_notification(&details)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = scheduleLocalNotification)]
    pub fn schedule_local_notification(&self, details: JsValue) -> Result<(), JsValue> {
        let details: LocalNotificationDetails = from_js_value(details)?;
        self.client
            .schedule_local_notification(&details)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = cancelAllLocalNotifications)]
    pub fn cancel_all_local_notifications(&self) -> Result<(), JsValue> {
        self.client
            .cancel_all_local_notifications()
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = cancelLocalNotifications)]
    pub fn cancel_local_notifications(&self, user_info: JsValue) -> Result<(), JsValue> {
        let user_info: Map<String, Value> = from_js_value(user_info)?;
        self.client
            .cancel_local_notifications(&user_info)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = removeAllPendingNotificationRequests)]
    pub fn remove_all_pending_notification_requests(&self) -> Result<(), JsValue> {
        self.client
            .remove_all_pending_notification_requests()
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = removePendingNotificationRequests)]
    pub fn remove_pending_notification_requests(
        &self,
        identifiers: Vec<String>,
    ) -> Result<(), JsValue> {
        self.client
            .remove_pending_notification_requests(&identifiers)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = removeAllDeliveredNotifications)]
    pub fn remove_all_delivered_notifications(&self) -> Result<(), JsValue> {
        self.client
            .remove_all_delivered_notifications()
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = removeDeliveredNotifications)]
    pub fn remove_delivered_notifications(&self, identifiers: Vec<String>) -> Result<(), JsValue> {
        self.client
            .remove_delivered_notifications(&identifiers)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = setApplicationIconBadgeNumber)]
    pub fn set_application_icon_badge_number(&self, number: f64) -> Result<(), JsValue> {
        let number = integer_from_f64(number).ok_or_else(|| {
            PushError::invalid_argument(format!("Badge number must be a whole number, got {number}"))
        })?;
        self.client
            .set_application_icon_badge_number(number)
            .map_err(JsValue::from)
    }

    #[wasm_bindgen(js_name = abandonPermissions)]
    pub fn abandon_permissions(&self) -> Result<(), JsValue> {
        self.client.abandon_permissions().map_err(JsValue::from)
    }

    /// Resolves to the permissions the platform granted.
    #[wasm_bindgen(js_name = requestPermissions)]
    pub fn request_permissions(&self, permissions: JsValue) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let permissions = if permissions.is_undefined() || permissions.is_null() {
            None
        } else {
            Some(from_js_value::<PermissionRequest>(permissions)?)
        };

        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let granted = client.request_permissions(permissions).await?;
            to_js_object(&granted)
        }))
    }

    /// Invokes `callback` with the currently granted permissions.
    #[wasm_bindgen(js_name = checkPermissions)]
    pub fn check_permissions(&self, callback: JsValue) -> Result<(), JsValue> {
        let callback: Function = callback
            .dyn_into()
            .map_err(|_| PushError::invalid_argument("Must provide a valid callback"))?;
        self.client.platform().transport()?;

        let client = self.client.clone();
        spawn_local(async move {
            let logger = client.platform().logger();
            match client.check_permissions().await {
                Ok(permissions) => match to_js_object(&permissions) {
                    Ok(value) => {
                        if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                            logger.error(&format!(
                                "checkPermissions callback threw: {}",
                                PushError::from(e)
                            ));
                        }
                    }
                    Err(e) => logger.error(&format!("{}", PushError::from(e))),
                },
                Err(e) => logger.error(&format!("checkPermissions failed: {e}")),
            }
        });
        Ok(())
    }

    #[wasm_bindgen(js_name = getInitialNotification)]
    pub fn get_initial_notification(&self) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            match client.get_initial_notification().await? {
                Some(notification) => Ok(PushNotificationHandle::from(notification).into()),
                None => Ok(JsValue::NULL),
            }
        }))
    }

    #[wasm_bindgen(js_name = getDeliveredNotifications)]
    pub fn get_delivered_notifications(&self) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let delivered = client.get_delivered_notifications().await?;
            to_js_object(&delivered)
        }))
    }

    #[wasm_bindgen(js_name = getPendingNotificationRequests)]
    pub fn get_pending_notification_requests(&self) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let pending = client.get_pending_notification_requests().await?;
            to_js_object(&pending)
        }))
    }

    #[wasm_bindgen(js_name = getScheduledLocalNotifications)]
    pub fn get_scheduled_local_notifications(&self) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let scheduled = client.get_scheduled_local_notifications().await?;
            to_js_object(&scheduled)
        }))
    }

    #[wasm_bindgen(js_name = getApplicationIconBadgeNumber)]
    pub fn get_application_icon_badge_number(&self) -> Result<Promise, JsValue> {
        self.client.platform().transport()?;
        let client = self.client.clone();
        Ok(future_to_promise(async move {
            let number = client.get_application_icon_badge_number().await?;
            Ok(JsValue::from_f64(number as f64))
        }))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_fire_date_from_js_date() {
        let date = js_sys::Date::new(&JsValue::from_f64(1_710_000_000_000.0));
        let fire_date = fire_date_from_js(&date.into()).unwrap();
        assert!(matches!(fire_date, Some(FireDate::Date(_))));
    }

    #[wasm_bindgen_test]
    fn test_missing_module_is_unavailable() {
        let bridge = PushNotificationIOS::new(JsValue::UNDEFINED, JsValue::UNDEFINED);
        assert!(bridge.abandon_permissions().is_err());
    }

    #[wasm_bindgen_test]
    fn test_listener_on_module_without_emitter_fails() {
        let bridge = PushNotificationIOS::new(Object::new().into(), JsValue::UNDEFINED);
        let handler = Function::new_no_args("");
        assert!(bridge.add_event_listener("notification", handler).is_err());
    }

    #[wasm_bindgen_test]
    fn test_badge_number_must_be_whole() {
        let bridge = PushNotificationIOS::new(Object::new().into(), JsValue::UNDEFINED);
        for number in [f64::NAN, f64::INFINITY, 1.5] {
            let error = bridge.set_application_icon_badge_number(number).unwrap_err();
            let message = Reflect::get(&error, &JsValue::from_str("message"))
                .unwrap()
                .as_string()
                .unwrap();
            assert!(message.starts_with("Invalid argument"));
        }
    }

    #[wasm_bindgen_test]
    fn test_check_permissions_requires_function() {
        let bridge = PushNotificationIOS::new(JsValue::UNDEFINED, JsValue::UNDEFINED);
        let error = bridge.check_permissions(JsValue::from_str("nope")).unwrap_err();
        let message = Reflect::get(&error, &JsValue::from_str("message"))
            .unwrap()
            .as_string()
            .unwrap();
        assert!(message.contains("Must provide a valid callback"));
    }
}
