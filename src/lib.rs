//! Normalization and dispatch layer between a native push-notification bridge
//! and application code.
//!
//! Raw remote and local payloads become one [`Notification`] value, outbound
//! requests and permission prompts are normalized before they reach the bridge,
//! and application handlers are tracked per event class.

#[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub use domain::error::PushError;
pub use domain::events::{EventClass, EventListenerRegistry, PushEvent, RegistrationError};
pub use domain::notification::{
    notification_from_payload, Alert, DeliveredNotification, FetchResult, Notification,
};
pub use domain::permissions::{AuthorizationStatus, PermissionRequest, Permissions};
pub use domain::request::{
    FireDate, LocalNotificationDetails, NotificationAction, NotificationCategory,
    NotificationRequest, RepeatsComponent,
};
pub use facades::native::PushNotificationClient;
pub use platform::Platform;
