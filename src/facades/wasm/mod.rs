pub mod client;
pub mod notification;

pub use client::PushNotificationIOS;
pub use notification::PushNotificationHandle;
