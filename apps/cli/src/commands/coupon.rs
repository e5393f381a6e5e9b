use crate::cli::CouponCommand;
use crate::context::CliContext;
use crate::error::CliError;

use client_core::coupon::{CouponForm, fetch_cart, fetch_coupons};

pub async fn run(command: CouponCommand, ctx: &CliContext, json: bool) -> Result<String, CliError> {
    match command {
        CouponCommand::List => {
            let coupons = fetch_coupons(&ctx.client, &ctx.store).await?;
            if json {
                return Ok(serde_json::to_string_pretty(&coupons)?);
            }

            let options = CouponForm::options(&coupons);
            if options.is_empty() {
                return Ok("No coupons available.".to_string());
            }
            Ok(options
                .iter()
                .map(|option| option.label.clone())
                .collect::<Vec<_>>()
                .join("\n"))
        }
        CouponCommand::Apply { brief_id, code } => apply(ctx, &brief_id, code).await,
    }
}

async fn apply(ctx: &CliContext, brief_id: &str, code: String) -> Result<String, CliError> {
    let cart = fetch_cart(&ctx.client, &ctx.store, brief_id).await?;
    if let Some(applied) = cart.applied_coupon() {
        return Err(CliError::validation(format!(
            "Coupon {applied} is already applied to brief {brief_id}"
        )));
    }

    let mut form = CouponForm::new(brief_id);
    form.input(code.trim());

    let refreshed = form
        .apply(&ctx.client, &ctx.store, &cart)
        .await?
        .ok_or_else(|| CliError::validation("Coupon code cannot be empty"))?;

    match CouponForm::badge(&refreshed) {
        Some(badge) => Ok(format!("{}: {badge}", form.input_value(&refreshed))),
        None => Err(CliError::cli(format!(
            "Coupon {} was not applied to brief {brief_id}",
            form.code()
        ))),
    }
}
