use serde::{Deserialize, Serialize};

/// Read state of an in-app notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
    #[serde(other)]
    Unknown,
}

/// In-app notification as returned by `GET notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppNotification {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: NotificationStatus,
    #[serde(default)]
    pub src: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub redirect_path: String,
}

impl AppNotification {
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}
