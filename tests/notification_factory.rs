use pushbridge::adapters::native::LoopbackTransport;
use pushbridge::{notification_from_payload, Alert, FetchResult, Platform};
use serde_json::json;
use std::rc::Rc;

#[test]
fn remote_payload_scenario() {
    let notification = notification_from_payload(&json!({
        "remote": true,
        "notificationId": "abc",
        "aps": {
            "alert": "Hi",
            "badge": 3,
            "sound": "default",
            "category": "C",
            "content-available": 1
        }
    }));

    assert!(notification.is_remote());
    assert_eq!(notification.message(), Some("Hi"));
    assert_eq!(notification.alert(), Some(&Alert::Text("Hi".to_string())));
    assert_eq!(notification.badge_count(), Some(3));
    assert_eq!(notification.category(), Some("C"));
    assert_eq!(notification.content_available(), Some(1));
}

#[test]
fn finish_twice_completes_once_with_first_result() {
    let transport = Rc::new(LoopbackTransport::new());
    let notification = notification_from_payload(&json!({
        "remote": true,
        "notificationId": "abc",
        "aps": {"alert": "Hi"}
    }))
    .with_platform(Platform::with_transport(transport.clone()));

    notification.finish(FetchResult::NewData).unwrap();
    notification.finish(FetchResult::NoData).unwrap();

    assert_eq!(
        transport.finished(),
        vec![("abc".to_string(), FetchResult::NewData)]
    );
}

#[test]
fn local_payload_scenario() {
    let notification = notification_from_payload(&json!({
        "remote": false,
        "title": "T",
        "body": "B",
        "badge": 1,
        "soundName": "s.caf",
        "userInfo": {"k": 1}
    }));

    assert_eq!(notification.title(), Some("T"));
    assert_eq!(notification.message(), Some("B"));
    assert_eq!(notification.badge_count(), Some(1));
    assert_eq!(notification.sound(), Some("s.caf"));
    assert_eq!(
        serde_json::Value::Object(notification.data().clone()),
        json!({"k": 1})
    );
}

#[test]
fn structured_alert_wins_over_flat_fields() {
    let notification = notification_from_payload(&json!({
        "remote": true,
        "aps": {
            "alert": {"title": "T", "subtitle": "Su", "body": "B"},
            "alertTitle": "flat",
            "subtitle": "flat"
        }
    }));

    assert_eq!(notification.title(), Some("T"));
    assert_eq!(notification.subtitle(), Some("Su"));
    assert_eq!(notification.message(), Some("B"));
}

#[test]
fn finish_on_local_notification_never_reaches_transport() {
    let transport = Rc::new(LoopbackTransport::new());
    let notification = notification_from_payload(&json!({"remote": false, "body": "B"}))
        .with_platform(Platform::with_transport(transport.clone()));

    notification.finish(FetchResult::NewData).unwrap();
    notification.finish(FetchResult::ResultFailed).unwrap();

    assert!(transport.calls().is_empty());
}

#[test]
fn fetch_result_wire_values() {
    assert_eq!(FetchResult::NewData.as_str(), "UIBackgroundFetchResultNewData");
    assert_eq!(FetchResult::NoData.as_str(), "UIBackgroundFetchResultNoData");
    assert_eq!(
        FetchResult::ResultFailed.as_str(),
        "UIBackgroundFetchResultFailed"
    );
    assert_eq!(
        "UIBackgroundFetchResultNoData".parse::<FetchResult>(),
        Ok(FetchResult::NoData)
    );
    assert!("NoData".parse::<FetchResult>().is_err());
}
