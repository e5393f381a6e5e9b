//! Subcommand handlers.
//!
//! Each handler returns the text to print on stdout. Side effects the
//! response classifier performed during the call (session expiry, stored
//! server errors) are turned into errors here so the exit code reflects them.

pub mod addresses;
pub mod coupon;
pub mod notifications;
pub mod session;

use crate::cli::Commands;
use crate::context::CliContext;
use crate::error::CliError;

use models::ErrorFormat;

use log::debug;

const HTML_ERROR_MESSAGE: &str = "The server returned an error page";

pub async fn run(command: Commands, ctx: &CliContext, json: bool) -> Result<String, CliError> {
    let result = match command {
        Commands::Login { token } => return session::login(ctx, &token),
        Commands::Logout => return session::logout(ctx),
        Commands::Notifications(command) => {
            ctx.require_session()?;
            notifications::run(command, ctx, json).await
        }
        Commands::Addresses(command) => {
            ctx.require_session()?;
            addresses::run(command, ctx, json).await
        }
        Commands::Coupon(command) => {
            ctx.require_session()?;
            coupon::run(command, ctx, json).await
        }
    };

    settle(ctx, result)
}

/// Fold classifier side effects into the command result.
fn settle(ctx: &CliContext, result: Result<String, CliError>) -> Result<String, CliError> {
    if ctx.session_expired() {
        return Err(CliError::cli(
            "Session expired. Sign in again with `storefront login <token>`.",
        ));
    }

    if let Some(server_error) = ctx.store.select(|state| state.core.server_error.clone()) {
        debug!("Server error recorded during command: {:?}", server_error.format);
        let message = match server_error.format {
            ErrorFormat::Html => HTML_ERROR_MESSAGE.to_string(),
            ErrorFormat::Text => server_error.message,
        };
        return Err(CliError::core(message));
    }

    result
}
