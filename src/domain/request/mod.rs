pub mod builder;
pub mod types;

pub use builder::{build_notification_request, fire_date_to_wire};
pub use types::{
    ActionOptions, FireDate, LocalNotificationDetails, NotificationAction, NotificationCategory,
    NotificationRequest, OutboundRequest, RepeatInterval, RepeatsComponent, TextInputOptions,
};
