use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::PushError;

/// The `alert` entry of the `aps` dictionary, kept exactly as received.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Alert {
    Text(String),
    /// `title`, `subtitle`, `body` plus any localization keys the sender included.
    Structured(Map<String, Value>),
}

impl Alert {
    /// String entry of a structured alert. Plain text alerts have no entries.
    pub fn entry(&self, key: &str) -> Option<&str> {
        match self {
            Alert::Text(_) => None,
            Alert::Structured(fields) => fields.get(key).and_then(Value::as_str),
        }
    }
}

/// Result reported back to the platform when background fetch work completes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FetchResult {
    #[serde(rename = "UIBackgroundFetchResultNewData")]
    NewData,
    #[serde(rename = "UIBackgroundFetchResultNoData")]
    NoData,
    #[serde(rename = "UIBackgroundFetchResultFailed")]
    ResultFailed,
}

impl FetchResult {
    pub const fn as_str(self) -> &'static str {
        match self {
            FetchResult::NewData => "UIBackgroundFetchResultNewData",
            FetchResult::NoData => "UIBackgroundFetchResultNoData",
            FetchResult::ResultFailed => "UIBackgroundFetchResultFailed",
        }
    }
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchResult {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UIBackgroundFetchResultNewData" => Ok(FetchResult::NewData),
            "UIBackgroundFetchResultNoData" => Ok(FetchResult::NoData),
            "UIBackgroundFetchResultFailed" => Ok(FetchResult::ResultFailed),
            other => Err(PushError::invalid_argument(format!(
                "Unknown fetch result `{other}`"
            ))),
        }
    }
}

/// A notification that has been shown in Notification Center.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveredNotification {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Map<String, Value>>,
    #[serde(
        default,
        rename = "thread-id",
        skip_serializing_if = "Option::is_none"
    )]
    pub thread_id: Option<String>,
}

/// Uniform view over a remote or local notification payload.
///
/// Built by [`super::notification_from_payload`]. Every field is fixed at
/// construction except the completion flag, which flips at most once.
pub struct Notification {
    pub(crate) is_remote: bool,
    pub(crate) notification_id: Option<String>,
    pub(crate) alert: Option<Alert>,
    pub(crate) title: Option<String>,
    pub(crate) subtitle: Option<String>,
    pub(crate) sound: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) thread_id: Option<String>,
    pub(crate) badge_count: Option<i64>,
    pub(crate) content_available: Option<u8>,
    pub(crate) fire_date: Option<String>,
    pub(crate) data: Map<String, Value>,
    pub(crate) action_identifier: Option<String>,
    pub(crate) user_text: Option<String>,
    pub(crate) completion_called: Cell<bool>,
    pub(crate) platform: Option<Platform>,
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("is_remote", &self.is_remote)
            .field("notification_id", &self.notification_id)
            .field("alert", &self.alert)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("sound", &self.sound)
            .field("category", &self.category)
            .field("thread_id", &self.thread_id)
            .field("badge_count", &self.badge_count)
            .field("content_available", &self.content_available)
            .field("fire_date", &self.fire_date)
            .field("data", &self.data)
            .field("action_identifier", &self.action_identifier)
            .field("user_text", &self.user_text)
            .field("completion_called", &self.completion_called.get())
            .finish_non_exhaustive()
    }
}

impl Notification {
    /// Attaches the platform whose transport receives the fetch completion.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn is_remote(&self) -> bool {
        self.is_remote
    }

    pub fn notification_id(&self) -> Option<&str> {
        self.notification_id.as_deref()
    }

    /// Main message: the structured alert's body, or the plain alert text.
    pub fn message(&self) -> Option<&str> {
        match self.alert.as_ref()? {
            Alert::Text(text) => Some(text),
            alert @ Alert::Structured(_) => alert.entry("body"),
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        match &self.alert {
            Some(alert @ Alert::Structured(_)) => alert.entry("title"),
            _ => self.title.as_deref(),
        }
    }

    pub fn subtitle(&self) -> Option<&str> {
        match &self.alert {
            Some(alert @ Alert::Structured(_)) => alert.entry("subtitle"),
            _ => self.subtitle.as_deref(),
        }
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn content_available(&self) -> Option<u8> {
        self.content_available
    }

    pub fn badge_count(&self) -> Option<i64> {
        self.badge_count
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn fire_date(&self) -> Option<&str> {
        self.fire_date.as_deref()
    }

    /// Id of the action button the user picked, if the notification was opened through one.
    pub fn action_identifier(&self) -> Option<&str> {
        self.action_identifier.as_deref()
    }

    /// Text typed by the user for a text-input action.
    pub fn user_text(&self) -> Option<&str> {
        self.user_text.as_deref()
    }

    pub fn completion_called(&self) -> bool {
        self.completion_called.get()
    }
}
