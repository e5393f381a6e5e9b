use crate::commands::addresses::render_view;
use crate::commands::notifications::render_notifications;

use client_core::delivery_addresses::{AddressRow, ScreenView};
use client_core::notifications::NotificationListItem;

use models::{AppNotification, NotificationStatus};

fn item(id: u64, status: NotificationStatus) -> NotificationListItem {
    NotificationListItem {
        key: id,
        date: "3 hours ago".to_string(),
        notification: AppNotification {
            id,
            title: format!("Brief #{id} updated"),
            description: None,
            kind: "brief".to_string(),
            status,
            src: String::new(),
            created_at: "2024-05-01T09:00:00Z".to_string(),
            updated_at: "2024-05-01T09:00:00Z".to_string(),
            group: String::new(),
            cta: String::new(),
            redirect_path: String::new(),
        },
    }
}

#[test]
fn given_notifications_when_rendered_then_unread_starred_and_counted() {
    let items = [item(1, NotificationStatus::Unread), item(2, NotificationStatus::Read)];

    let output = render_notifications(&items, 1);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("* #1"));
    assert!(lines[0].ends_with("Brief #1 updated"));
    assert!(lines[1].starts_with("  #2"));
    assert_eq!(lines[2], "1 unread");
}

#[test]
fn given_no_notifications_when_rendered_then_placeholder() {
    assert_eq!(render_notifications(&[], 0), "No notifications.");
}

#[test]
fn given_address_rows_when_rendered_then_default_marked() {
    let view = ScreenView::List(vec![
        AddressRow {
            id: 1,
            street: "42 Main Street, Apt 3B".to_string(),
            city: "Springfield, IL 62704".to_string(),
            is_default: true,
        },
        AddressRow {
            id: 2,
            street: "7 Oak Avenue".to_string(),
            city: "Chicago, IL 60601".to_string(),
            is_default: false,
        },
    ]);

    assert_eq!(
        render_view(&view),
        "#1 42 Main Street, Apt 3B (default)\n    Springfield, IL 62704\n#2 7 Oak Avenue\n    Chicago, IL 60601"
    );
    assert_eq!(render_view(&ScreenView::Empty), "No saved addresses.");
}
