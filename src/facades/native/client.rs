/// Native Rust facade for the notification bridge.
/// Provides the application-facing API and delegates to domain logic.
use crate::domain::error::PushError;
use crate::domain::events::{EventListenerRegistry, PushEvent};
use crate::domain::notification::{notification_from_payload, DeliveredNotification, Notification};
use crate::domain::permissions::{negotiate_permissions, PermissionRequest, Permissions};
use crate::domain::request::{
    build_notification_request, LocalNotificationDetails, NotificationCategory,
    NotificationRequest,
};
use crate::platform::Platform;
use serde_json::{Map, Value};

/// Push notification client.
///
/// Owns the listener registry for its platform; create one per process at startup.
pub struct PushNotificationClient {
    platform: Platform,
    listeners: EventListenerRegistry,
}

impl PushNotificationClient {
    pub fn new(platform: Platform) -> Self {
        Self {
            listeners: EventListenerRegistry::new(platform.clone()),
            platform,
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Attaches `handler` to `notification`, `localNotification`, `register` or
    /// `registrationError` events.
    pub fn add_event_listener<H>(&self, event: &str, handler: H) -> Result<(), PushError>
    where
        H: Fn(PushEvent) + 'static,
    {
        self.listeners.add_event_listener(event, handler)
    }

    /// Detaches the tracked listener for `event`. Nothing happens if none is tracked.
    pub fn remove_event_listener(&self, event: &str) -> Result<(), PushError> {
        self.listeners.remove_event_listener(event)
    }

    pub fn listeners(&self) -> &EventListenerRegistry {
        &self.listeners
    }

    /// Sends the request to the notification center; no fire date means deliver now.
    pub fn add_notification_request(&self, request: NotificationRequest) -> Result<(), PushError> {
        let transport = self.platform.transport()?;
        transport.add_notification_request(&build_notification_request(request));
        Ok(())
    }

    pub fn set_notification_categories(
        &self,
        categories: &[NotificationCategory],
    ) -> Result<(), PushError> {
        self.platform
            .transport()?
            .set_notification_categories(categories);
        Ok(())
    }

    /// Legacy immediate local notification. Prefer [`Self::add_notification_request`].
    pub fn present_local_notification(
        &self,
        details: &LocalNotificationDetails,
    ) -> Result<(), PushError> {
        self.platform.transport()?.present_local_notification(details);
        Ok(())
    }

    /// Legacy scheduled local notification. Prefer [`Self::add_notification_request`].
    pub fn schedule_local_notification(
        &self,
        details: &LocalNotificationDetails,
    ) -> Result<(), PushError> {
        self.platform
            .transport()?
            .schedule_local_notification(details);
        Ok(())
    }

    pub fn cancel_all_local_notifications(&self) -> Result<(), PushError> {
        self.platform.transport()?.cancel_all_local_notifications();
        Ok(())
    }

    pub fn cancel_local_notifications(&self, user_info: &Map<String, Value>) -> Result<(), PushError> {
        self.platform
            .transport()?
            .cancel_local_notifications(user_info);
        Ok(())
    }

    pub async fn get_scheduled_local_notifications(&self) -> Result<Vec<Value>, PushError> {
        let transport = self.platform.transport()?;
        transport.get_scheduled_local_notifications().await
    }

    pub fn remove_all_pending_notification_requests(&self) -> Result<(), PushError> {
        self.platform
            .transport()?
            .remove_all_pending_notification_requests();
        Ok(())
    }

    pub fn remove_pending_notification_requests(
        &self,
        identifiers: &[String],
    ) -> Result<(), PushError> {
        self.platform
            .transport()?
            .remove_pending_notification_requests(identifiers);
        Ok(())
    }

    pub async fn get_pending_notification_requests(&self) -> Result<Vec<Value>, PushError> {
        let transport = self.platform.transport()?;
        transport.get_pending_notification_requests().await
    }

    pub fn remove_all_delivered_notifications(&self) -> Result<(), PushError> {
        self.platform
            .transport()?
            .remove_all_delivered_notifications();
        Ok(())
    }

    pub fn remove_delivered_notifications(&self, identifiers: &[String]) -> Result<(), PushError> {
        self.platform
            .transport()?
            .remove_delivered_notifications(identifiers);
        Ok(())
    }

    pub async fn get_delivered_notifications(
        &self,
    ) -> Result<Vec<DeliveredNotification>, PushError> {
        let transport = self.platform.transport()?;
        transport.get_delivered_notifications().await
    }

    pub fn set_application_icon_badge_number(&self, number: i64) -> Result<(), PushError> {
        self.platform
            .transport()?
            .set_application_icon_badge_number(number);
        Ok(())
    }

    pub async fn get_application_icon_badge_number(&self) -> Result<i64, PushError> {
        let transport = self.platform.transport()?;
        transport.get_application_icon_badge_number().await
    }

    /// Prompts for permissions and resolves to what the platform actually granted.
    ///
    /// `None` asks for alert, badge and sound. A request asks for exactly the flags
    /// it sets to `true`.
    pub async fn request_permissions(
        &self,
        permissions: Option<PermissionRequest>,
    ) -> Result<Permissions, PushError> {
        let requested = negotiate_permissions(permissions.as_ref());
        let transport = self.platform.transport()?;
        transport.request_permissions(&requested).await
    }

    pub async fn check_permissions(&self) -> Result<Permissions, PushError> {
        let transport = self.platform.transport()?;
        transport.check_permissions().await
    }

    /// Unregisters from remote notifications. No confirmation is reported.
    pub fn abandon_permissions(&self) -> Result<(), PushError> {
        self.platform.transport()?.abandon_permissions();
        Ok(())
    }

    /// The notification that launched the app, if any.
    pub async fn get_initial_notification(&self) -> Result<Option<Notification>, PushError> {
        let transport = self.platform.transport()?;
        let payload = transport.get_initial_notification().await?;
        Ok(payload.map(|payload| {
            notification_from_payload(&payload).with_platform(self.platform.clone())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::{LoopbackTransport, TransportCall};
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn client() -> (PushNotificationClient, Rc<LoopbackTransport>) {
        let transport = Rc::new(LoopbackTransport::new());
        let client = PushNotificationClient::new(Platform::with_transport(transport.clone()));
        (client, transport)
    }

    #[test]
    fn test_every_operation_requires_transport() {
        let client = PushNotificationClient::new(Platform::new());

        assert_eq!(
            client.add_notification_request(NotificationRequest::new("x")),
            Err(PushError::TransportUnavailable)
        );
        assert_eq!(client.abandon_permissions(), Err(PushError::TransportUnavailable));
        assert_eq!(
            client.set_application_icon_badge_number(1),
            Err(PushError::TransportUnavailable)
        );
        assert_eq!(
            block_on(client.request_permissions(None)),
            Err(PushError::TransportUnavailable)
        );
        assert_eq!(
            block_on(client.get_initial_notification()).map(|n| n.is_some()),
            Err(PushError::TransportUnavailable)
        );
    }

    #[test]
    fn test_badge_number_round_trips_through_transport() {
        let (client, transport) = client();

        client.set_application_icon_badge_number(7).unwrap();

        assert_eq!(block_on(client.get_application_icon_badge_number()), Ok(7));
        assert_eq!(transport.badge_number(), 7);
    }

    #[test]
    fn test_abandon_permissions_is_forwarded() {
        let (client, transport) = client();

        client.abandon_permissions().unwrap();

        assert_eq!(transport.calls(), vec![TransportCall::AbandonPermissions]);
    }

    #[test]
    fn test_initial_notification_is_normalized() {
        let (client, transport) = client();
        transport.set_initial_notification(Some(json!({
            "remote": true,
            "notificationId": "launch",
            "aps": {"alert": "Opened"}
        })));

        let notification = block_on(client.get_initial_notification())
            .unwrap()
            .unwrap();

        assert_eq!(notification.message(), Some("Opened"));
        assert_eq!(notification.notification_id(), Some("launch"));
    }

    #[test]
    fn test_no_initial_notification() {
        let (client, _transport) = client();

        assert!(block_on(client.get_initial_notification()).unwrap().is_none());
    }
}
