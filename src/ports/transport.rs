use crate::domain::error::PushError;
use crate::domain::notification::{DeliveredNotification, FetchResult};
use crate::domain::permissions::{Permissions, RequestedPermissions};
use crate::domain::request::{LocalNotificationDetails, NotificationCategory, OutboundRequest};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Callback invoked by the transport with the raw payload of one emitted event.
pub type EventCallback = Box<dyn Fn(Value)>;

/// A live subscription to one transport event channel.
pub trait SubscriptionHandle {
    /// Detaches the callback from the channel. Calling it again has no effect.
    fn remove(&self);
}

/// The native notification bridge.
///
/// Fire-and-forget calls return nothing; queries are single-shot futures that
/// resolve exactly once. Rejections surface as [`PushError::TransportRejection`].
#[async_trait(?Send)]
pub trait TransportPort {
    /// Subscribes `callback` to `event_name`. Fails when the bridge refuses the subscription.
    fn add_listener(
        &self,
        event_name: &str,
        callback: EventCallback,
    ) -> Result<Box<dyn SubscriptionHandle>, PushError>;

    fn add_notification_request(&self, request: &OutboundRequest);

    fn set_notification_categories(&self, categories: &[NotificationCategory]);

    fn present_local_notification(&self, details: &LocalNotificationDetails);

    fn schedule_local_notification(&self, details: &LocalNotificationDetails);

    fn cancel_all_local_notifications(&self);

    fn cancel_local_notifications(&self, user_info: &Map<String, Value>);

    fn remove_all_pending_notification_requests(&self);

    fn remove_pending_notification_requests(&self, identifiers: &[String]);

    fn remove_all_delivered_notifications(&self);

    fn remove_delivered_notifications(&self, identifiers: &[String]);

    fn set_application_icon_badge_number(&self, number: i64);

    fn abandon_permissions(&self);

    fn on_finish_remote_notification(&self, notification_id: &str, fetch_result: FetchResult);

    async fn request_permissions(
        &self,
        requested: &RequestedPermissions,
    ) -> Result<Permissions, PushError>;

    async fn check_permissions(&self) -> Result<Permissions, PushError>;

    /// Raw payload of the notification that launched the app, if any.
    async fn get_initial_notification(&self) -> Result<Option<Value>, PushError>;

    async fn get_delivered_notifications(&self) -> Result<Vec<DeliveredNotification>, PushError>;

    async fn get_pending_notification_requests(&self) -> Result<Vec<Value>, PushError>;

    async fn get_scheduled_local_notifications(&self) -> Result<Vec<Value>, PushError>;

    async fn get_application_icon_badge_number(&self) -> Result<i64, PushError>;
}
