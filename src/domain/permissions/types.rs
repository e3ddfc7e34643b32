use serde::{Deserialize, Serialize};

use crate::domain::error::PushError;

/// Platform authorization state, serialized as its integer wire value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum AuthorizationStatus {
    NotDetermined = 0,
    Denied = 1,
    Authorized = 2,
    Provisional = 3,
}

impl TryFrom<u8> for AuthorizationStatus {
    type Error = PushError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AuthorizationStatus::NotDetermined),
            1 => Ok(AuthorizationStatus::Denied),
            2 => Ok(AuthorizationStatus::Authorized),
            3 => Ok(AuthorizationStatus::Provisional),
            other => Err(PushError::invalid_argument(format!(
                "Unknown authorization status {other}"
            ))),
        }
    }
}

impl From<AuthorizationStatus> for u8 {
    fn from(status: AuthorizationStatus) -> Self {
        status as u8
    }
}

/// Subset of permissions a caller asks for. Unset flags count as not requested.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionRequest {
    #[serde(default)]
    pub alert: Option<bool>,
    #[serde(default)]
    pub badge: Option<bool>,
    #[serde(default)]
    pub sound: Option<bool>,
    #[serde(default)]
    pub critical: Option<bool>,
}

/// Flags actually sent to the platform permission prompt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RequestedPermissions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
}

/// Permissions currently granted by the platform.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub alert: bool,
    #[serde(default)]
    pub badge: bool,
    #[serde(default)]
    pub sound: bool,
    #[serde(default)]
    pub critical: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_center: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_status: Option<AuthorizationStatus>,
}
