use super::converters::{from_js_value, integer_from_f64, to_js_object};
use crate::domain::error::PushError;
use crate::domain::notification::{DeliveredNotification, FetchResult};
use crate::domain::permissions::{Permissions, RequestedPermissions};
use crate::domain::request::{LocalNotificationDetails, NotificationCategory, OutboundRequest};
use crate::ports::{EventCallback, LoggerPort, SubscriptionHandle, TransportPort};
use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Subscription object returned by the JS emitter's `addListener`.
pub struct JsSubscription {
    subscription: JsValue,
    logger: &'static dyn LoggerPort,
}

impl SubscriptionHandle for JsSubscription {
    fn remove(&self) {
        if let Err(e) = method(&self.subscription, "remove")
            .and_then(|remove| remove.call0(&self.subscription))
        {
            self.logger
                .error(&format!("subscription.remove() failed: {}", PushError::from(e)));
        }
    }
}

/// Transport backed by the JS native notification module and its event emitter.
pub struct JsTransport {
    module: JsValue,
    emitter: JsValue,
    logger: &'static dyn LoggerPort,
}

fn method(target: &JsValue, name: &str) -> Result<Function, JsValue> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("`{name}` is not a function")))
}

impl JsTransport {
    /// `emitter` defaults to the module itself when it is `undefined` or `null`.
    pub fn new(module: JsValue, emitter: JsValue, logger: &'static dyn LoggerPort) -> Self {
        let emitter = if emitter.is_undefined() || emitter.is_null() {
            module.clone()
        } else {
            emitter
        };
        Self {
            module,
            emitter,
            logger,
        }
    }

    fn call(&self, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let function = method(&self.module, name)?;
        let array: Array = args.iter().collect();
        function.apply(&self.module, &array)
    }

    fn fire(&self, name: &str, args: &[JsValue]) {
        if let Err(e) = self.call(name, args) {
            self.logger
                .error(&format!("{name} failed: {}", PushError::from(e)));
        }
    }

    fn fire_with<T: Serialize + ?Sized>(&self, name: &str, value: &T) {
        match to_js_object(value) {
            Ok(arg) => self.fire(name, &[arg]),
            Err(e) => self
                .logger
                .error(&format!("{name} failed: {}", PushError::from(e))),
        }
    }

    async fn call_promise(&self, name: &str, args: &[JsValue]) -> Result<JsValue, PushError> {
        let promise: Promise = self.call(name, args)?.dyn_into()?;
        Ok(JsFuture::from(promise).await?)
    }

    /// Wraps a callback-style bridge method in a single-resolution future.
    async fn call_with_callback(&self, name: &str) -> Result<JsValue, PushError> {
        let mut failure = None;
        let promise = Promise::new(&mut |resolve, _reject| {
            if let Err(e) = self.call(name, &[resolve.into()]) {
                failure = Some(e);
            }
        });
        if let Some(e) = failure {
            return Err(e.into());
        }
        Ok(JsFuture::from(promise).await?)
    }
}

#[async_trait(?Send)]
impl TransportPort for JsTransport {
    fn add_listener(
        &self,
        event_name: &str,
        callback: EventCallback,
    ) -> Result<Box<dyn SubscriptionHandle>, PushError> {
        let logger = self.logger;
        let event = event_name.to_owned();
        let closure = Closure::wrap(Box::new(move |payload: JsValue| {
            match from_js_value::<Value>(payload) {
                Ok(payload) => callback(payload),
                Err(e) => logger.warn(&format!("Dropped `{event}` payload: {e}")),
            }
        }) as Box<dyn Fn(JsValue)>);
        // The emitter owns the function from here on; it stays callable until removed.
        let function = closure.into_js_value();

        let subscription = method(&self.emitter, "addListener")
            .and_then(|add| add.call2(&self.emitter, &JsValue::from_str(event_name), &function))?;
        if subscription.is_undefined() || subscription.is_null() {
            return Err(PushError::rejection(format!(
                "addListener({event_name}) returned no subscription"
            )));
        }

        Ok(Box::new(JsSubscription {
            subscription,
            logger: self.logger,
        }))
    }

    fn add_notification_request(&self, request: &OutboundRequest) {
        self.fire_with("addNotificationRequest", request);
    }

    fn set_notification_categories(&self, categories: &[NotificationCategory]) {
        self.fire_with("setNotificationCategories", categories);
    }

    fn present_local_notification(&self, details: &LocalNotificationDetails) {
        self.fire_with("presentLocalNotification", details);
    }

    fn schedule_local_notification(&self, details: &LocalNotificationDetails) {
        self.fire_with("scheduleLocalNotification", details);
    }

    fn cancel_all_local_notifications(&self) {
        self.fire("cancelAllLocalNotifications", &[]);
    }

    fn cancel_local_notifications(&self, user_info: &Map<String, Value>) {
        self.fire_with("cancelLocalNotifications", user_info);
    }

    fn remove_all_pending_notification_requests(&self) {
        self.fire("removeAllPendingNotificationRequests", &[]);
    }

    fn remove_pending_notification_requests(&self, identifiers: &[String]) {
        self.fire_with("removePendingNotificationRequests", identifiers);
    }

    fn remove_all_delivered_notifications(&self) {
        self.fire("removeAllDeliveredNotifications", &[]);
    }

    fn remove_delivered_notifications(&self, identifiers: &[String]) {
        self.fire_with("removeDeliveredNotifications", identifiers);
    }

    fn set_application_icon_badge_number(&self, number: i64) {
        self.fire(
            "setApplicationIconBadgeNumber",
            &[JsValue::from_f64(number as f64)],
        );
    }

    fn abandon_permissions(&self) {
        self.fire("abandonPermissions", &[]);
    }

    fn on_finish_remote_notification(&self, notification_id: &str, fetch_result: FetchResult) {
        self.fire(
            "onFinishRemoteNotification",
            &[
                JsValue::from_str(notification_id),
                JsValue::from_str(fetch_result.as_str()),
            ],
        );
    }

    async fn request_permissions(
        &self,
        requested: &RequestedPermissions,
    ) -> Result<Permissions, PushError> {
        let arg = to_js_object(requested)?;
        let granted = self.call_promise("requestPermissions", &[arg]).await?;
        from_js_value(granted)
    }

    async fn check_permissions(&self) -> Result<Permissions, PushError> {
        let permissions = self.call_with_callback("checkPermissions").await?;
        from_js_value(permissions)
    }

    async fn get_initial_notification(&self) -> Result<Option<Value>, PushError> {
        let notification = self.call_promise("getInitialNotification", &[]).await?;
        if notification.is_undefined() || notification.is_null() {
            return Ok(None);
        }
        from_js_value(notification).map(Some)
    }

    async fn get_delivered_notifications(&self) -> Result<Vec<DeliveredNotification>, PushError> {
        let notifications = self.call_with_callback("getDeliveredNotifications").await?;
        from_js_value(notifications)
    }

    async fn get_pending_notification_requests(&self) -> Result<Vec<Value>, PushError> {
        let requests = self
            .call_with_callback("getPendingNotificationRequests")
            .await?;
        from_js_value(requests)
    }

    async fn get_scheduled_local_notifications(&self) -> Result<Vec<Value>, PushError> {
        let notifications = self
            .call_with_callback("getScheduledLocalNotifications")
            .await?;
        from_js_value(notifications)
    }

    async fn get_application_icon_badge_number(&self) -> Result<i64, PushError> {
        let number = self
            .call_with_callback("getApplicationIconBadgeNumber")
            .await?;
        number
            .as_f64()
            .and_then(integer_from_f64)
            .ok_or_else(|| PushError::rejection("Badge number is not a whole number"))
    }
}
