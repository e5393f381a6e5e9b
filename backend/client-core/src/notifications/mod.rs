//! In-app notifications: list, unread badge and "mark all read".

pub mod actions;
pub mod reducer;
pub mod selectors;

pub use actions::{NotificationsAction, fetch_notifications_list, update_notifications_status};
pub use reducer::NotificationsState;
pub use selectors::NotificationListItem;

pub const NOTIFICATIONS_LIST_ENDPOINT: &str = "notifications";
pub const NOTIFICATIONS_UPDATE_STATUS_ENDPOINT: &str = "notifications/status";
