use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// When a scheduled notification fires.
#[derive(Debug, Clone, PartialEq)]
pub enum FireDate {
    /// Forwarded as an ISO-8601 string with millisecond precision.
    Date(DateTime<Utc>),
    /// Already serialized by the caller; forwarded verbatim.
    Text(String),
}

impl From<DateTime<Utc>> for FireDate {
    fn from(date: DateTime<Utc>) -> Self {
        FireDate::Date(date)
    }
}

impl From<String> for FireDate {
    fn from(text: String) -> Self {
        FireDate::Text(text)
    }
}

impl From<&str> for FireDate {
    fn from(text: &str) -> Self {
        FireDate::Text(text.to_owned())
    }
}

/// Date components honored when a scheduled notification repeats.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepeatsComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<bool>,
}

/// Notification request as assembled by the caller.
///
/// Decoding from a wire record leaves `fire_date` unset; dates are attached by
/// whoever knows how the caller expressed them.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    pub badge: Option<i64>,
    pub sound: Option<String>,
    pub category: Option<String>,
    pub thread_id: Option<String>,
    #[serde(skip)]
    pub fire_date: Option<FireDate>,
    pub repeats: Option<bool>,
    pub repeats_component: Option<RepeatsComponent>,
    pub is_silent: Option<bool>,
    pub is_critical: Option<bool>,
    /// Between 0.0 (silent) and 1.0 (full volume).
    pub critical_sound_volume: Option<f64>,
    pub user_info: Option<Map<String, Value>>,
}

impl NotificationRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Wire form of a [`NotificationRequest`] handed to the transport.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutboundRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeats: Option<bool>,
    #[serde(default)]
    pub repeats_component: RepeatsComponent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_sound_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_required: Option<bool>,
}

/// Text input attached to an action; the typed text comes back as `userText`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextInputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ActionOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_input: Option<TextInputOptions>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NotificationCategory {
    pub id: String,
    pub actions: Vec<NotificationAction>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Details for the legacy present/schedule local notification calls.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocalNotificationDetails {
    pub alert_body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_icon_badge_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_silent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<RepeatInterval>,
}
