use crate::context::CliContext;
use crate::error::CliError;

use client_core::capabilities::{CredentialStorage, Dispatcher};
use client_core::store::CoreAction;

use common::RedactedAccessToken;

use log::info;

pub fn login(ctx: &CliContext, token: &str) -> Result<String, CliError> {
    let token = RedactedAccessToken::new(token.trim());
    if token.is_empty() {
        return Err(CliError::validation("Access token cannot be empty"));
    }

    ctx.credentials
        .set_item(&ctx.config.session.access_token_key, token.as_str())?;
    ctx.store.dispatch(CoreAction::LoginSuccess.into());

    info!("Access token stored in {}", ctx.credentials.path().display());
    Ok("Signed in.".to_string())
}

pub fn logout(ctx: &CliContext) -> Result<String, CliError> {
    ctx.credentials
        .remove_item(&ctx.config.session.access_token_key)?;
    ctx.store.dispatch(CoreAction::LogoutSuccess.into());

    Ok("Signed out.".to_string())
}
