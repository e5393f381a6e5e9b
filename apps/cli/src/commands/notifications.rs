use crate::cli::NotificationsCommand;
use crate::context::CliContext;
use crate::error::CliError;

use client_core::notifications::selectors::{notifications_list, unread_notifications_number};
use client_core::notifications::{
    NotificationListItem, fetch_notifications_list, update_notifications_status,
};

use chrono::Utc;

pub async fn run(
    command: NotificationsCommand,
    ctx: &CliContext,
    json: bool,
) -> Result<String, CliError> {
    match command {
        NotificationsCommand::List => list(ctx, json).await,
        NotificationsCommand::Read { ids } => read(ctx, ids).await,
    }
}

async fn list(ctx: &CliContext, json: bool) -> Result<String, CliError> {
    fetch_notifications_list(&ctx.client, &ctx.store).await?;

    let state = ctx.store.state();
    if json {
        return Ok(serde_json::to_string_pretty(
            &state.notifications.notifications_list,
        )?);
    }

    let items = notifications_list(&state, Utc::now());
    Ok(render_notifications(&items, unread_notifications_number(&state)))
}

async fn read(ctx: &CliContext, ids: Vec<u64>) -> Result<String, CliError> {
    let ids = if ids.is_empty() {
        fetch_notifications_list(&ctx.client, &ctx.store)
            .await?
            .iter()
            .filter(|notification| notification.is_unread())
            .map(|notification| notification.id)
            .collect()
    } else {
        ids
    };

    if ids.is_empty() {
        return Ok("Nothing to mark as read.".to_string());
    }

    update_notifications_status(&ctx.client, &ctx.store, &ids).await?;
    Ok(format!("Marked {} notification(s) as read.", ids.len()))
}

/// One line per notification, unread ones starred, then the unread count.
pub fn render_notifications(items: &[NotificationListItem], unread: usize) -> String {
    if items.is_empty() {
        return "No notifications.".to_string();
    }

    let mut lines: Vec<String> = items
        .iter()
        .map(|item| {
            let marker = if item.notification.is_unread() { "*" } else { " " };
            format!(
                "{marker} #{:<6} {:<18} {}",
                item.key, item.date, item.notification.title
            )
        })
        .collect();

    lines.push(format!("{unread} unread"));
    lines.join("\n")
}
