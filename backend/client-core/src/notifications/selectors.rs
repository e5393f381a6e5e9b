use crate::store::AppState;

use models::AppNotification;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_humanize::HumanTime;

/// Notification row as rendered in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationListItem {
    pub key: u64,
    /// Relative creation time, e.g. "3 hours ago".
    pub date: String,
    pub notification: AppNotification,
}

pub fn is_notifications_list_loading(state: &AppState) -> bool {
    state.notifications.is_loading
}

pub fn notifications_list(state: &AppState, now: DateTime<Utc>) -> Vec<NotificationListItem> {
    state
        .notifications
        .notifications_list
        .iter()
        .map(|notification| NotificationListItem {
            key: notification.id,
            date: relative_date(&notification.created_at, now),
            notification: notification.clone(),
        })
        .collect()
}

pub fn unread_notifications_number(state: &AppState) -> usize {
    state
        .notifications
        .notifications_list
        .iter()
        .filter(|notification| notification.is_unread())
        .count()
}

/// Humanized age of an RFC 3339 timestamp, e.g. "3 hours ago".
///
/// Any UTC offset is accepted. Unparseable input is returned as-is.
pub fn relative_date(timestamp: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(created_at) => {
            // Clock skew can put creation slightly in the future.
            let age = (created_at.with_timezone(&Utc) - now).min(TimeDelta::zero());
            HumanTime::from(age).to_string()
        }
        Err(_) => timestamp.to_string(),
    }
}
