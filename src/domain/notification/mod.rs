pub mod completion;
pub mod factory;
pub mod types;

pub use factory::{notification_from_payload, APS_KEY};
pub use types::{Alert, DeliveredNotification, FetchResult, Notification};
