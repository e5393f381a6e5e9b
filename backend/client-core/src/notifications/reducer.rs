use crate::notifications::NotificationsAction;

use models::{AppNotification, NotificationStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub notifications_list: Vec<AppNotification>,
    pub is_loading: bool,
    pub update_error: Option<String>,
}

impl NotificationsState {
    pub fn apply(&mut self, action: NotificationsAction) {
        match action {
            NotificationsAction::FetchRequest => {
                self.is_loading = true;
            }
            NotificationsAction::FetchSuccess(list) => {
                self.notifications_list = list;
                self.is_loading = false;
            }
            NotificationsAction::FetchFailure(_) => {
                self.is_loading = false;
            }
            // Marking read happens in the background; the list stays interactive.
            NotificationsAction::UpdateRequest(_) => {
                self.is_loading = false;
            }
            NotificationsAction::UpdateSuccess => {
                self.is_loading = false;
                self.update_error = None;
                for notification in &mut self.notifications_list {
                    notification.status = NotificationStatus::Read;
                }
            }
            NotificationsAction::UpdateFailure(error) => {
                self.is_loading = false;
                self.update_error = Some(error);
            }
        }
    }
}
