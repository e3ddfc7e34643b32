use super::types::{EventClass, PushEvent, RegistrationError};
use crate::domain::error::PushError;
use crate::domain::notification::notification_from_payload;
use crate::platform::Platform;
use crate::ports::{EventCallback, SubscriptionHandle};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// Tracks at most one transport subscription per event class.
///
/// Registering a class that already holds a subscription replaces the tracked
/// handle without removing the old one, so the earlier handler stays attached
/// to the transport and can no longer be removed through the registry.
pub struct EventListenerRegistry {
    platform: Platform,
    slots: RefCell<HashMap<EventClass, Box<dyn SubscriptionHandle>>>,
}

impl EventListenerRegistry {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            slots: RefCell::new(HashMap::new()),
        }
    }

    pub fn add_event_listener<H>(&self, event: &str, handler: H) -> Result<(), PushError>
    where
        H: Fn(PushEvent) + 'static,
    {
        let class: EventClass = event.parse()?;
        let transport = self.platform.transport()?;

        let callback = dispatch_to(class, self.platform.clone(), handler);
        let handle = transport.add_listener(class.channel(), callback)?;
        self.platform
            .logger()
            .log(&format!("Subscribed `{class}` to {}", class.channel()));

        if self.slots.borrow_mut().insert(class, handle).is_some() {
            self.platform.logger().warn(&format!(
                "Replaced the `{class}` listener; the previous subscription is still attached"
            ));
        }
        Ok(())
    }

    pub fn remove_event_listener(&self, event: &str) -> Result<(), PushError> {
        let class: EventClass = event.parse()?;

        let Some(handle) = self.slots.borrow_mut().remove(&class) else {
            return Ok(());
        };
        handle.remove();
        self.platform
            .logger()
            .log(&format!("Unsubscribed `{class}` from {}", class.channel()));
        Ok(())
    }

    pub fn is_subscribed(&self, class: EventClass) -> bool {
        self.slots.borrow().contains_key(&class)
    }
}

fn dispatch_to<H>(class: EventClass, platform: Platform, handler: H) -> EventCallback
where
    H: Fn(PushEvent) + 'static,
{
    match class {
        EventClass::Notification | EventClass::LocalNotification => {
            Box::new(move |payload: Value| {
                let notification = notification_from_payload(&payload).with_platform(platform.clone());
                handler(PushEvent::Notification(notification));
            })
        }
        EventClass::Register => Box::new(move |payload: Value| {
            let token = payload.get("deviceToken").and_then(Value::as_str);
            if token.is_none() {
                platform
                    .logger()
                    .warn("Registration event without a device token");
            }
            handler(PushEvent::Register(token.map(str::to_owned)));
        }),
        EventClass::RegistrationError => Box::new(move |payload: Value| {
            handler(PushEvent::RegistrationError(RegistrationError::new(payload)));
        }),
    }
}
