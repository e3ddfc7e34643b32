use super::types::{FireDate, NotificationRequest, OutboundRequest};
use chrono::SecondsFormat;

/// Renders a fire date the way the notification center expects it.
pub fn fire_date_to_wire(fire_date: FireDate) -> String {
    match fire_date {
        FireDate::Date(date) => date.to_rfc3339_opts(SecondsFormat::Millis, true),
        FireDate::Text(text) => text,
    }
}

/// Normalizes a request for the transport.
///
/// Structured dates become ISO-8601 strings, a missing fire date stays absent
/// (immediate delivery) and `repeatsComponent` is always present. `repeats`
/// without a fire date is forwarded as-is; the platform decides what it means.
pub fn build_notification_request(request: NotificationRequest) -> OutboundRequest {
    OutboundRequest {
        id: request.id,
        title: request.title,
        subtitle: request.subtitle,
        body: request.body,
        badge: request.badge,
        sound: request.sound,
        category: request.category,
        thread_id: request.thread_id,
        fire_date: request.fire_date.map(fire_date_to_wire),
        repeats: request.repeats,
        repeats_component: request.repeats_component.unwrap_or_default(),
        is_silent: request.is_silent,
        is_critical: request.is_critical,
        critical_sound_volume: request.critical_sound_volume,
        user_info: request.user_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::RepeatsComponent;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_structured_fire_date_becomes_iso_string() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap();
        let mut request = NotificationRequest::new("x");
        request.body = Some("hi".to_string());
        request.fire_date = Some(FireDate::Date(date));

        let outbound = build_notification_request(request);

        assert_eq!(outbound.fire_date.as_deref(), Some("2024-03-09T08:30:00.000Z"));
        assert_eq!(
            serde_json::to_value(&outbound).unwrap(),
            json!({
                "id": "x",
                "body": "hi",
                "fireDate": "2024-03-09T08:30:00.000Z",
                "repeatsComponent": {}
            })
        );
    }

    #[test]
    fn test_string_fire_date_is_forwarded_verbatim() {
        let mut request = NotificationRequest::new("x");
        request.fire_date = Some(FireDate::from("2030-01-01T00:00:00Z"));

        let outbound = build_notification_request(request);

        assert_eq!(outbound.fire_date.as_deref(), Some("2030-01-01T00:00:00Z"));
    }

    #[test]
    fn test_missing_fire_date_is_not_serialized() {
        let outbound = build_notification_request(NotificationRequest::new("now"));
        let wire = serde_json::to_value(&outbound).unwrap();

        assert!(wire.get("fireDate").is_none());
        assert_eq!(wire.get("repeatsComponent"), Some(&json!({})));
    }

    #[test]
    fn test_repeats_component_is_kept() {
        let mut request = NotificationRequest::new("daily");
        request.repeats = Some(true);
        request.repeats_component = Some(RepeatsComponent {
            hour: Some(true),
            minute: Some(true),
            ..RepeatsComponent::default()
        });

        let wire = serde_json::to_value(build_notification_request(request)).unwrap();

        assert_eq!(wire["repeats"], json!(true));
        assert_eq!(wire["repeatsComponent"], json!({"hour": true, "minute": true}));
    }

    #[test]
    fn test_repeats_without_fire_date_is_not_rejected() {
        let mut request = NotificationRequest::new("loose");
        request.repeats = Some(true);

        let outbound = build_notification_request(request);

        assert_eq!(outbound.repeats, Some(true));
        assert_eq!(outbound.fire_date, None);
    }

    #[test]
    fn test_wire_field_names() {
        let mut request = NotificationRequest::new("critical");
        request.thread_id = Some("t".to_string());
        request.is_critical = Some(true);
        request.critical_sound_volume = Some(0.5);
        request.is_silent = Some(false);

        let wire = serde_json::to_value(build_notification_request(request)).unwrap();

        assert_eq!(wire["threadId"], json!("t"));
        assert_eq!(wire["isCritical"], json!(true));
        assert_eq!(wire["criticalSoundVolume"], json!(0.5));
        assert_eq!(wire["isSilent"], json!(false));
    }
}
