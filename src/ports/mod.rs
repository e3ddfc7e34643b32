/// Ports module - Defines the interfaces (traits) between the notification domain
/// and the platform that actually delivers, schedules, and authorizes notifications.
///
/// The domain layer only shapes data crossing the boundary; every side effect goes
/// through one of these traits so the same logic runs against the JS native module
/// in the browser/webview and against an in-process transport on native targets.

pub mod logger;
pub mod transport;

pub use logger::LoggerPort;
pub use transport::{EventCallback, SubscriptionHandle, TransportPort};
