use crate::notifications::selectors::{
    is_notifications_list_loading, notifications_list, relative_date, unread_notifications_number,
};
use crate::notifications::{NotificationsAction, NotificationsState};
use crate::store::AppState;

use models::{AppNotification, NotificationStatus};

use chrono::{DateTime, TimeDelta, Utc};

fn notification(id: u64, status: NotificationStatus, created_at: &str) -> AppNotification {
    AppNotification {
        id,
        title: format!("Notification {id}"),
        description: None,
        kind: "brief".to_string(),
        status,
        src: String::new(),
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
        group: String::new(),
        cta: String::new(),
        redirect_path: String::new(),
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

// ============================================
// REDUCER
// ============================================

#[test]
fn given_fetch_lifecycle_when_applied_then_loading_flag_follows() {
    let mut state = NotificationsState::default();

    state.apply(NotificationsAction::FetchRequest);
    assert!(state.is_loading);

    state.apply(NotificationsAction::FetchSuccess(vec![notification(
        1,
        NotificationStatus::Unread,
        "2024-05-01T11:00:00Z",
    )]));
    assert!(!state.is_loading);
    assert_eq!(state.notifications_list.len(), 1);

    state.apply(NotificationsAction::FetchRequest);
    state.apply(NotificationsAction::FetchFailure("HTTP 500".to_string()));
    assert!(!state.is_loading);
    assert_eq!(state.notifications_list.len(), 1, "Failure keeps the old list");
}

/// **VALUE**: "Mark all read" flips every item locally once the server confirms.
#[test]
fn given_update_success_when_applied_then_every_item_is_read() {
    let mut state = NotificationsState {
        notifications_list: vec![
            notification(1, NotificationStatus::Unread, "2024-05-01T11:00:00Z"),
            notification(2, NotificationStatus::Unread, "2024-05-01T10:00:00Z"),
        ],
        update_error: Some("previous".to_string()),
        ..NotificationsState::default()
    };

    state.apply(NotificationsAction::UpdateRequest(vec![1, 2]));
    state.apply(NotificationsAction::UpdateSuccess);

    assert!(state.notifications_list.iter().all(|n| !n.is_unread()));
    assert_eq!(state.update_error, None);
}

#[test]
fn given_update_failure_when_applied_then_error_is_kept_and_items_unchanged() {
    let mut state = NotificationsState {
        notifications_list: vec![notification(
            1,
            NotificationStatus::Unread,
            "2024-05-01T11:00:00Z",
        )],
        ..NotificationsState::default()
    };

    state.apply(NotificationsAction::UpdateFailure("Nope".to_string()));

    assert_eq!(state.update_error.as_deref(), Some("Nope"));
    assert!(state.notifications_list[0].is_unread());
}

// ============================================
// SELECTORS
// ============================================

#[test]
fn given_mixed_statuses_when_counting_unread_then_only_unread_counted() {
    let mut state = AppState::default();
    state.notifications.notifications_list = vec![
        notification(1, NotificationStatus::Unread, "2024-05-01T11:00:00Z"),
        notification(2, NotificationStatus::Read, "2024-05-01T11:00:00Z"),
        notification(3, NotificationStatus::Unknown, "2024-05-01T11:00:00Z"),
        notification(4, NotificationStatus::Unread, "2024-05-01T11:00:00Z"),
    ];

    assert_eq!(unread_notifications_number(&state), 2);
    assert!(!is_notifications_list_loading(&state));
}

#[test]
fn given_notifications_when_listed_then_keyed_by_id_with_relative_dates() {
    let mut state = AppState::default();
    state.notifications.notifications_list = vec![
        notification(7, NotificationStatus::Unread, "2024-05-01T09:00:00Z"),
        notification(9, NotificationStatus::Read, "2024-04-28T12:00:00Z"),
    ];

    let items = notifications_list(&state, now());

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].key, 7);
    assert_eq!(items[0].date, "3 hours ago");
    assert_eq!(items[1].key, 9);
    assert_eq!(items[1].date, "3 days ago");
}

#[test]
fn given_various_ages_when_humanized_then_rough_age_rendered() {
    let cases = [
        (TimeDelta::zero(), "now"),
        (TimeDelta::minutes(5), "5 minutes ago"),
        (TimeDelta::hours(3), "3 hours ago"),
        (TimeDelta::days(3), "3 days ago"),
    ];

    for (age, expected) in cases {
        let created = (now() - age).to_rfc3339();
        assert_eq!(relative_date(&created, now()), expected, "age {age:?}");
    }
}

/// **VALUE**: Timestamps written with a local offset humanize like their UTC equivalent.
///
/// **BUG THIS CATCHES**: Would catch a parser that only accepts `Z`/`+00:00` and falls
/// back to printing the raw timestamp for every other offset.
#[test]
fn given_timestamp_with_offset_when_humanized_then_same_as_utc_instant() {
    // GIVEN: The same instant written in UTC and in UTC+2
    let utc = "2024-05-01T09:00:00Z";
    let offset = "2024-05-01T11:00:00+02:00";

    // WHEN / THEN
    assert_eq!(relative_date(utc, now()), "3 hours ago");
    assert_eq!(relative_date(offset, now()), "3 hours ago");
}

#[test]
fn given_future_or_invalid_timestamp_when_humanized_then_handled() {
    assert_eq!(
        relative_date("2024-05-01T12:00:30Z", now()),
        "now",
        "Clock skew clamps to zero"
    );
    assert_eq!(relative_date("yesterday", now()), "yesterday");
}
