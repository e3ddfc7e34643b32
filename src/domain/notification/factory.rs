use super::types::{Alert, Notification};
use serde_json::{Map, Value};
use std::cell::Cell;

/// Key of the platform push metadata dictionary in remote payloads.
pub const APS_KEY: &str = "aps";

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn integer_field(map: &Map<String, Value>, key: &str) -> Option<i64> {
    map.get(key).and_then(Value::as_i64)
}

fn alert_field(map: &Map<String, Value>, key: &str) -> Option<Alert> {
    match map.get(key)? {
        Value::String(text) => Some(Alert::Text(text.clone())),
        Value::Object(fields) => Some(Alert::Structured(fields.clone())),
        _ => None,
    }
}

fn content_available_field(map: &Map<String, Value>) -> Option<u8> {
    map.get("content-available")
        .and_then(Value::as_u64)
        .and_then(|value| u8::try_from(value).ok())
}

/// Builds a [`Notification`] from the raw payload handed over by the transport.
///
/// `remote: true` selects the `aps` branch: known metadata comes out of the `aps`
/// dictionary and every other top-level key lands in `data`. Anything else is
/// read as a flat local notification with `userInfo` as its data.
pub fn notification_from_payload(payload: &Value) -> Notification {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let is_remote = fields
        .get("remote")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let mut notification = Notification {
        is_remote,
        notification_id: None,
        alert: None,
        title: None,
        subtitle: None,
        sound: None,
        category: None,
        thread_id: None,
        badge_count: None,
        content_available: None,
        fire_date: None,
        data: Map::new(),
        action_identifier: string_field(fields, "actionIdentifier"),
        user_text: string_field(fields, "userText"),
        completion_called: Cell::new(false),
        platform: None,
    };

    if is_remote {
        read_remote_fields(&mut notification, fields);
    } else {
        read_local_fields(&mut notification, fields);
    }

    notification
}

fn read_remote_fields(notification: &mut Notification, fields: &Map<String, Value>) {
    notification.notification_id = string_field(fields, "notificationId");

    if let Some(aps) = fields.get(APS_KEY).and_then(Value::as_object) {
        notification.alert = alert_field(aps, "alert");
        notification.title = string_field(aps, "alertTitle");
        notification.subtitle = string_field(aps, "subtitle");
        notification.sound = string_field(aps, "sound");
        notification.badge_count = integer_field(aps, "badge");
        notification.category = string_field(aps, "category");
        notification.content_available = content_available_field(aps);
        notification.thread_id = string_field(aps, "thread-id");
        notification.fire_date = string_field(aps, "fireDate");
    }

    notification.data = fields
        .iter()
        .filter(|(key, _)| key.as_str() != APS_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
}

fn read_local_fields(notification: &mut Notification, fields: &Map<String, Value>) {
    // `applicationIconBadgeNumber` and `soundName` are the legacy local-notification names.
    notification.badge_count =
        integer_field(fields, "badge").or_else(|| integer_field(fields, "applicationIconBadgeNumber"));
    notification.sound =
        string_field(fields, "sound").or_else(|| string_field(fields, "soundName"));
    notification.alert = string_field(fields, "body").map(Alert::Text);
    notification.title = string_field(fields, "title");
    notification.subtitle = string_field(fields, "subtitle");
    notification.thread_id = string_field(fields, "thread-id");
    notification.category = string_field(fields, "category");
    notification.fire_date = string_field(fields, "fireDate");
    notification.data = fields
        .get("userInfo")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
}
