use crate::domain::error::PushError;
use crate::domain::notification::Notification;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DEVICE_NOTIF_EVENT: &str = "remoteNotificationReceived";
pub const NOTIF_REGISTER_EVENT: &str = "remoteNotificationsRegistered";
pub const NOTIF_REGISTRATION_ERROR_EVENT: &str = "remoteNotificationRegistrationError";
pub const DEVICE_LOCAL_NOTIF_EVENT: &str = "localNotificationReceived";

/// The four event classes an application can listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventClass {
    Notification,
    LocalNotification,
    Register,
    RegistrationError,
}

impl EventClass {
    pub const ALL: [EventClass; 4] = [
        EventClass::Notification,
        EventClass::LocalNotification,
        EventClass::Register,
        EventClass::RegistrationError,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventClass::Notification => "notification",
            EventClass::LocalNotification => "localNotification",
            EventClass::Register => "register",
            EventClass::RegistrationError => "registrationError",
        }
    }

    /// Name of the transport channel carrying this class of event.
    pub const fn channel(self) -> &'static str {
        match self {
            EventClass::Notification => DEVICE_NOTIF_EVENT,
            EventClass::LocalNotification => DEVICE_LOCAL_NOTIF_EVENT,
            EventClass::Register => NOTIF_REGISTER_EVENT,
            EventClass::RegistrationError => NOTIF_REGISTRATION_ERROR_EVENT,
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventClass {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| {
                PushError::invalid_argument(
                    "PushNotificationIOS only supports `notification`, `register`, \
                     `registrationError`, and `localNotification` events",
                )
            })
    }
}

/// Payload of a failed remote-notification registration, kept as the bridge sent it.
///
/// The bridge normally fills `message`, `code` and `details`; the accessors return
/// `None` for entries that are missing or of another type.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct RegistrationError(Value);

impl RegistrationError {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    pub fn code(&self) -> Option<i64> {
        self.0.get("code").and_then(Value::as_i64)
    }

    pub fn details(&self) -> Option<&Value> {
        self.0.get("details")
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }
}

/// What an application handler receives.
#[derive(Debug)]
pub enum PushEvent {
    /// `notification` and `localNotification` events.
    Notification(Notification),
    /// Hex-encoded device token from a `register` event; `None` when the bridge sent none.
    Register(Option<String>),
    RegistrationError(RegistrationError),
}
