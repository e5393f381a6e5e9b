use crate::capabilities::Notifier;

use models::{NotificationEvent, NotificationKind};

use log::{error, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Writes notifications to the log. Used by the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: NotificationEvent) {
        match (event.kind, event.description) {
            (NotificationKind::Success, _) => info!("{}", event.message),
            (NotificationKind::Error, Some(description)) => {
                error!("{}: {}", event.message, description)
            }
            (NotificationKind::Error, None) => warn!("{}", event.message),
        }
    }
}

/// Forwards notifications to a UI task draining the receiver.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: UnboundedSender<NotificationEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<NotificationEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, event: NotificationEvent) {
        if let Err(e) = self.sender.send(event) {
            warn!("Notification dropped, no receiver: {}", e.0.message);
        }
    }
}
