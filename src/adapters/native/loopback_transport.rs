use crate::domain::error::PushError;
use crate::domain::notification::{DeliveredNotification, FetchResult};
use crate::domain::permissions::{AuthorizationStatus, Permissions, RequestedPermissions};
use crate::domain::request::{LocalNotificationDetails, NotificationCategory, OutboundRequest};
use crate::ports::{EventCallback, SubscriptionHandle, TransportPort};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Outbound call recorded by [`LoopbackTransport`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    AddNotificationRequest(OutboundRequest),
    SetNotificationCategories(Vec<NotificationCategory>),
    PresentLocalNotification(LocalNotificationDetails),
    ScheduleLocalNotification(LocalNotificationDetails),
    CancelAllLocalNotifications,
    CancelLocalNotifications(Map<String, Value>),
    RemoveAllPendingNotificationRequests,
    RemovePendingNotificationRequests(Vec<String>),
    RemoveAllDeliveredNotifications,
    RemoveDeliveredNotifications(Vec<String>),
    SetApplicationIconBadgeNumber(i64),
    RequestPermissions(RequestedPermissions),
    AbandonPermissions,
    FinishRemoteNotification {
        notification_id: String,
        fetch_result: FetchResult,
    },
}

struct Listener {
    id: u64,
    event_name: String,
    callback: Rc<dyn Fn(Value)>,
}

type Listeners = Rc<RefCell<Vec<Listener>>>;

pub struct LoopbackSubscription {
    id: u64,
    listeners: Weak<RefCell<Vec<Listener>>>,
}

impl SubscriptionHandle for LoopbackSubscription {
    fn remove(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|listener| listener.id != self.id);
        }
    }
}

/// In-process notification center for native hosts and tests.
///
/// Keeps pending requests, delivered notifications, the badge number and the
/// granted permissions in memory, records every outbound call, and lets the
/// host emit events the way the platform bridge would.
#[derive(Default)]
pub struct LoopbackTransport {
    listeners: Listeners,
    next_listener_id: Cell<u64>,
    calls: RefCell<Vec<TransportCall>>,
    pending: RefCell<Vec<OutboundRequest>>,
    delivered: RefCell<Vec<DeliveredNotification>>,
    scheduled_legacy: RefCell<Vec<LocalNotificationDetails>>,
    badge_number: Cell<i64>,
    granted: Cell<Option<Permissions>>,
    initial_notification: RefCell<Option<Value>>,
    permission_rejection: RefCell<Option<String>>,
    subscription_refusal: RefCell<Option<String>>,
}

impl LoopbackTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `payload` to every listener subscribed to `event_name`, in subscription order.
    pub fn emit(&self, event_name: &str, payload: Value) {
        let callbacks: Vec<Rc<dyn Fn(Value)>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event_name == event_name)
            .map(|listener| listener.callback.clone())
            .collect();

        for callback in callbacks {
            callback(payload.clone());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.borrow().clone()
    }

    /// Fetch completions received so far.
    pub fn finished(&self) -> Vec<(String, FetchResult)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                TransportCall::FinishRemoteNotification {
                    notification_id,
                    fetch_result,
                } => Some((notification_id.clone(), *fetch_result)),
                _ => None,
            })
            .collect()
    }

    pub fn pending_requests(&self) -> Vec<OutboundRequest> {
        self.pending.borrow().clone()
    }

    pub fn badge_number(&self) -> i64 {
        self.badge_number.get()
    }

    pub fn set_initial_notification(&self, payload: Option<Value>) {
        *self.initial_notification.borrow_mut() = payload;
    }

    /// Marks a notification as shown in Notification Center.
    pub fn deliver(&self, notification: DeliveredNotification) {
        self.delivered.borrow_mut().push(notification);
    }

    /// Makes the next permission request fail with `message`.
    pub fn reject_next_permission_request(&self, message: impl Into<String>) {
        *self.permission_rejection.borrow_mut() = Some(message.into());
    }

    /// Makes the next `add_listener` fail with `message`.
    pub fn refuse_next_subscription(&self, message: impl Into<String>) {
        *self.subscription_refusal.borrow_mut() = Some(message.into());
    }

    fn record(&self, call: TransportCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl TransportPort for LoopbackTransport {
    fn add_listener(
        &self,
        event_name: &str,
        callback: EventCallback,
    ) -> Result<Box<dyn SubscriptionHandle>, PushError> {
        if let Some(message) = self.subscription_refusal.borrow_mut().take() {
            return Err(PushError::rejection(message));
        }

        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);

        self.listeners.borrow_mut().push(Listener {
            id,
            event_name: event_name.to_owned(),
            callback: Rc::from(callback),
        });

        Ok(Box::new(LoopbackSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }))
    }

    fn add_notification_request(&self, request: &OutboundRequest) {
        let mut pending = self.pending.borrow_mut();
        pending.retain(|existing| existing.id != request.id);
        pending.push(request.clone());
        drop(pending);
        self.record(TransportCall::AddNotificationRequest(request.clone()));
    }

    fn set_notification_categories(&self, categories: &[NotificationCategory]) {
        self.record(TransportCall::SetNotificationCategories(categories.to_vec()));
    }

    fn present_local_notification(&self, details: &LocalNotificationDetails) {
        self.record(TransportCall::PresentLocalNotification(details.clone()));
    }

    fn schedule_local_notification(&self, details: &LocalNotificationDetails) {
        self.scheduled_legacy.borrow_mut().push(details.clone());
        self.record(TransportCall::ScheduleLocalNotification(details.clone()));
    }

    fn cancel_all_local_notifications(&self) {
        self.scheduled_legacy.borrow_mut().clear();
        self.record(TransportCall::CancelAllLocalNotifications);
    }

    fn cancel_local_notifications(&self, user_info: &Map<String, Value>) {
        self.scheduled_legacy.borrow_mut().retain(|details| {
            let info = details.user_info.as_ref();
            !user_info
                .iter()
                .all(|(key, value)| info.and_then(|info| info.get(key)) == Some(value))
        });
        self.record(TransportCall::CancelLocalNotifications(user_info.clone()));
    }

    fn remove_all_pending_notification_requests(&self) {
        self.pending.borrow_mut().clear();
        self.record(TransportCall::RemoveAllPendingNotificationRequests);
    }

    fn remove_pending_notification_requests(&self, identifiers: &[String]) {
        self.pending
            .borrow_mut()
            .retain(|request| !identifiers.contains(&request.id));
        self.record(TransportCall::RemovePendingNotificationRequests(
            identifiers.to_vec(),
        ));
    }

    fn remove_all_delivered_notifications(&self) {
        self.delivered.borrow_mut().clear();
        self.record(TransportCall::RemoveAllDeliveredNotifications);
    }

    fn remove_delivered_notifications(&self, identifiers: &[String]) {
        self.delivered
            .borrow_mut()
            .retain(|notification| !identifiers.contains(&notification.identifier));
        self.record(TransportCall::RemoveDeliveredNotifications(
            identifiers.to_vec(),
        ));
    }

    fn set_application_icon_badge_number(&self, number: i64) {
        self.badge_number.set(number);
        self.record(TransportCall::SetApplicationIconBadgeNumber(number));
    }

    fn abandon_permissions(&self) {
        self.granted.set(None);
        self.record(TransportCall::AbandonPermissions);
    }

    fn on_finish_remote_notification(&self, notification_id: &str, fetch_result: FetchResult) {
        self.record(TransportCall::FinishRemoteNotification {
            notification_id: notification_id.to_owned(),
            fetch_result,
        });
    }

    async fn request_permissions(
        &self,
        requested: &RequestedPermissions,
    ) -> Result<Permissions, PushError> {
        self.record(TransportCall::RequestPermissions(*requested));

        if let Some(message) = self.permission_rejection.borrow_mut().take() {
            return Err(PushError::rejection(message));
        }

        let granted = Permissions {
            alert: requested.alert,
            badge: requested.badge,
            sound: requested.sound,
            critical: requested.critical.unwrap_or(false),
            lock_screen: Some(requested.alert),
            notification_center: Some(requested.alert),
            authorization_status: Some(AuthorizationStatus::Authorized),
        };
        self.granted.set(Some(granted));
        Ok(granted)
    }

    async fn check_permissions(&self) -> Result<Permissions, PushError> {
        Ok(self.granted.get().unwrap_or(Permissions {
            authorization_status: Some(AuthorizationStatus::NotDetermined),
            ..Permissions::default()
        }))
    }

    async fn get_initial_notification(&self) -> Result<Option<Value>, PushError> {
        Ok(self.initial_notification.borrow().clone())
    }

    async fn get_delivered_notifications(&self) -> Result<Vec<DeliveredNotification>, PushError> {
        Ok(self.delivered.borrow().clone())
    }

    async fn get_pending_notification_requests(&self) -> Result<Vec<Value>, PushError> {
        self.pending
            .borrow()
            .iter()
            .map(|request| {
                serde_json::to_value(request).map_err(|e| PushError::rejection(e.to_string()))
            })
            .collect()
    }

    async fn get_scheduled_local_notifications(&self) -> Result<Vec<Value>, PushError> {
        self.scheduled_legacy
            .borrow()
            .iter()
            .map(|details| {
                serde_json::to_value(details).map_err(|e| PushError::rejection(e.to_string()))
            })
            .collect()
    }

    async fn get_application_icon_badge_number(&self) -> Result<i64, PushError> {
        Ok(self.badge_number.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_emit_reaches_only_matching_channel() {
        let transport = LoopbackTransport::new();
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();

        let _handle = transport
            .add_listener("a", Box::new(move |_| sink.set(sink.get() + 1)))
            .unwrap();
        transport.emit("a", json!({}));
        transport.emit("b", json!({}));

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_removed_subscription_stops_receiving() {
        let transport = LoopbackTransport::new();
        let hits = Rc::new(Cell::new(0));
        let sink = hits.clone();

        let handle = transport
            .add_listener("a", Box::new(move |_| sink.set(sink.get() + 1)))
            .unwrap();
        handle.remove();
        handle.remove();
        transport.emit("a", json!({}));

        assert_eq!(hits.get(), 0);
        assert_eq!(transport.listener_count(), 0);
    }

    #[test]
    fn test_pending_requests_replace_same_id() {
        let transport = LoopbackTransport::new();
        let request = OutboundRequest {
            id: "r".to_string(),
            title: None,
            subtitle: None,
            body: Some("first".to_string()),
            badge: None,
            sound: None,
            category: None,
            thread_id: None,
            fire_date: None,
            repeats: None,
            repeats_component: Default::default(),
            is_silent: None,
            is_critical: None,
            critical_sound_volume: None,
            user_info: None,
        };
        let replacement = OutboundRequest {
            body: Some("second".to_string()),
            ..request.clone()
        };

        transport.add_notification_request(&request);
        transport.add_notification_request(&replacement);

        assert_eq!(transport.pending_requests(), vec![replacement]);
    }

    #[test]
    fn test_permission_rejection_is_single_shot() {
        let transport = LoopbackTransport::new();
        let requested = RequestedPermissions {
            alert: true,
            badge: false,
            sound: false,
            critical: None,
        };
        transport.reject_next_permission_request("denied");

        assert_eq!(
            block_on(transport.request_permissions(&requested)),
            Err(PushError::rejection("denied"))
        );
        assert!(block_on(transport.request_permissions(&requested)).is_ok());
    }

    #[test]
    fn test_cancel_local_notifications_matches_user_info() {
        let transport = LoopbackTransport::new();
        let mut keep = LocalNotificationDetails {
            alert_body: "keep".to_string(),
            ..LocalNotificationDetails::default()
        };
        keep.user_info = json!({"id": 1}).as_object().cloned();
        let mut drop_me = keep.clone();
        drop_me.alert_body = "drop".to_string();
        drop_me.user_info = json!({"id": 2, "extra": true}).as_object().cloned();

        transport.schedule_local_notification(&keep);
        transport.schedule_local_notification(&drop_me);
        let filter = json!({"id": 2}).as_object().cloned().unwrap_or_default();
        transport.cancel_local_notifications(&filter);

        let scheduled = block_on(transport.get_scheduled_local_notifications()).unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0]["alertBody"], json!("keep"));
    }
}
