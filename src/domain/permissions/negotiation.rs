use super::types::{PermissionRequest, RequestedPermissions};

/// Default prompt: alert, badge and sound, no critical alerts.
pub const DEFAULT_PERMISSIONS: RequestedPermissions = RequestedPermissions {
    alert: true,
    badge: true,
    sound: true,
    critical: None,
};

/// Resolves the flags to request from the platform.
///
/// Without a request every default applies. With one, each flag is exactly what
/// the request says and anything unset is `false`; defaults are not merged in.
pub fn negotiate_permissions(requested: Option<&PermissionRequest>) -> RequestedPermissions {
    match requested {
        None => DEFAULT_PERMISSIONS,
        Some(request) => RequestedPermissions {
            alert: request.alert.unwrap_or(false),
            badge: request.badge.unwrap_or(false),
            sound: request.sound.unwrap_or(false),
            critical: Some(request.critical.unwrap_or(false)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::permissions::{AuthorizationStatus, Permissions};
    use serde_json::json;

    #[test]
    fn test_defaults_without_request() {
        let requested = negotiate_permissions(None);

        assert_eq!(
            serde_json::to_value(requested).unwrap(),
            json!({"alert": true, "badge": true, "sound": true})
        );
    }

    #[test]
    fn test_partial_request_disables_unset_flags() {
        let request = PermissionRequest {
            badge: Some(true),
            ..PermissionRequest::default()
        };

        let requested = negotiate_permissions(Some(&request));

        assert_eq!(
            serde_json::to_value(requested).unwrap(),
            json!({"alert": false, "badge": true, "sound": false, "critical": false})
        );
    }

    #[test]
    fn test_empty_request_disables_everything() {
        let requested = negotiate_permissions(Some(&PermissionRequest::default()));

        assert!(!requested.alert);
        assert!(!requested.badge);
        assert!(!requested.sound);
        assert_eq!(requested.critical, Some(false));
    }

    #[test]
    fn test_granted_permissions_decode_wire_record() {
        let permissions: Permissions = serde_json::from_value(json!({
            "alert": true,
            "badge": false,
            "sound": true,
            "critical": false,
            "lockScreen": true,
            "notificationCenter": true,
            "authorizationStatus": 3
        }))
        .unwrap();

        assert!(permissions.alert);
        assert_eq!(permissions.lock_screen, Some(true));
        assert_eq!(
            permissions.authorization_status,
            Some(AuthorizationStatus::Provisional)
        );
    }

    #[test]
    fn test_unknown_authorization_status_is_rejected() {
        let decoded = serde_json::from_value::<Permissions>(json!({"authorizationStatus": 7}));
        assert!(decoded.is_err());
    }
}
