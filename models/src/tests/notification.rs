use crate::{AppNotification, ErrorFormat, NotificationStatus};

use serde_json::json;

#[test]
fn given_camel_case_payload_when_deserialized_then_maps_fields() {
    let payload = json!({
        "id": 7,
        "title": "Brief approved",
        "description": null,
        "type": "brief",
        "status": "unread",
        "src": "",
        "createdAt": "2026-10-18T09:00:00Z",
        "updatedAt": "2026-10-18T09:00:00Z",
        "group": "briefs",
        "cta": "View",
        "redirectPath": "/briefs/7"
    });

    let notification: AppNotification = serde_json::from_value(payload).unwrap();

    assert_eq!(notification.kind, "brief");
    assert_eq!(notification.redirect_path, "/briefs/7");
    assert!(notification.is_unread());
}

/// **BUG THIS CATCHES**: A new status added server-side must not break the whole list.
#[test]
fn given_unknown_status_when_deserialized_then_maps_to_unknown() {
    let status: NotificationStatus = serde_json::from_value(json!("archived")).unwrap();
    assert_eq!(status, NotificationStatus::Unknown);
}

#[test]
fn given_content_types_when_mapping_error_format_then_only_html_is_html() {
    assert_eq!(
        ErrorFormat::from_content_type(Some("text/html; charset=utf-8")),
        ErrorFormat::Html
    );
    assert_eq!(
        ErrorFormat::from_content_type(Some("application/json")),
        ErrorFormat::Text
    );
    assert_eq!(ErrorFormat::from_content_type(None), ErrorFormat::Text);
}
