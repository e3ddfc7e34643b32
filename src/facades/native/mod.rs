pub mod client;

pub use client::PushNotificationClient;
