use crate::api_client::{ApiClient, extract, get_response_error_message};
use crate::capabilities::Dispatcher;
use crate::error::ApiClientError;
use crate::interceptor::RequestOptions;
use crate::notifications::{NOTIFICATIONS_LIST_ENDPOINT, NOTIFICATIONS_UPDATE_STATUS_ENDPOINT};

use models::AppNotification;

use log::{info, warn};
use serde_json::json;

const RESULTS_POINTER: &str = "/data/content/results";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationsAction {
    FetchRequest,
    FetchSuccess(Vec<AppNotification>),
    FetchFailure(String),
    UpdateRequest(Vec<u64>),
    UpdateSuccess,
    UpdateFailure(String),
}

impl NotificationsAction {
    pub fn kind(&self) -> &'static str {
        match self {
            NotificationsAction::FetchRequest => "notifications/fetchRequest",
            NotificationsAction::FetchSuccess(_) => "notifications/fetchSuccess",
            NotificationsAction::FetchFailure(_) => "notifications/fetchFailure",
            NotificationsAction::UpdateRequest(_) => "notifications/updateRequest",
            NotificationsAction::UpdateSuccess => "notifications/updateSuccess",
            NotificationsAction::UpdateFailure(_) => "notifications/updateFailure",
        }
    }
}

/// Load the notification list into the store.
///
/// # Errors
///
/// Returns the client error after dispatching
/// [`NotificationsAction::FetchFailure`], so the loading flag never sticks.
pub async fn fetch_notifications_list(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
) -> Result<Vec<AppNotification>, ApiClientError> {
    dispatcher.dispatch(NotificationsAction::FetchRequest.into());

    let result = client
        .get(NOTIFICATIONS_LIST_ENDPOINT, RequestOptions::default())
        .await
        .and_then(|outcome| extract::<Vec<AppNotification>>(&outcome, RESULTS_POINTER));

    match result {
        Ok(list) => {
            info!("Fetched {} notifications", list.len());
            dispatcher.dispatch(NotificationsAction::FetchSuccess(list.clone()).into());
            Ok(list)
        }
        Err(e) => {
            warn!("Failed to fetch notifications: {e}");
            dispatcher.dispatch(NotificationsAction::FetchFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}

/// Mark the given notifications as read.
///
/// Only a `200 OK` counts as success; any other resolved status leaves the
/// list untouched.
pub async fn update_notifications_status(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    ids: &[u64],
) -> Result<(), ApiClientError> {
    dispatcher.dispatch(NotificationsAction::UpdateRequest(ids.to_vec()).into());

    let body = json!({ "ids": ids });
    match client
        .patch(NOTIFICATIONS_UPDATE_STATUS_ENDPOINT, &body, RequestOptions::default())
        .await
    {
        Ok(outcome) => {
            if outcome.status.0 == 200 {
                dispatcher.dispatch(NotificationsAction::UpdateSuccess.into());
            }
            Ok(())
        }
        Err(e) => {
            warn!("Failed to update notification status: {e}");
            dispatcher
                .dispatch(NotificationsAction::UpdateFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}
