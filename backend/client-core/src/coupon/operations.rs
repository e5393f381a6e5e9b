use crate::api_client::{ApiClient, extract, get_response_error_message};
use crate::capabilities::Dispatcher;
use crate::coupon::{BriefAction, CART_ENDPOINT, COUPONS_ENDPOINT, ReferralAction};
use crate::error::ApiClientError;
use crate::interceptor::RequestOptions;

use models::{Cart, Coupon};

use log::warn;

const DATA_POINTER: &str = "/data";

pub async fn fetch_coupons(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
) -> Result<Vec<Coupon>, ApiClientError> {
    dispatcher.dispatch(ReferralAction::FetchCouponsRequest.into());

    let result = client
        .get(COUPONS_ENDPOINT, RequestOptions::default())
        .await
        .and_then(|outcome| extract::<Vec<Coupon>>(&outcome, DATA_POINTER));

    match result {
        Ok(coupons) => {
            dispatcher.dispatch(ReferralAction::FetchCouponsSuccess(coupons.clone()).into());
            Ok(coupons)
        }
        Err(e) => {
            warn!("Failed to fetch coupons: {e}");
            dispatcher
                .dispatch(ReferralAction::FetchCouponsFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}

pub async fn fetch_cart(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    brief_id: &str,
) -> Result<Cart, ApiClientError> {
    dispatcher.dispatch(BriefAction::FetchCartRequest.into());

    let path = format!("{CART_ENDPOINT}/{brief_id}");
    let result = client
        .get(&path, RequestOptions::default())
        .await
        .and_then(|outcome| extract::<Cart>(&outcome, DATA_POINTER));

    match result {
        Ok(cart) => {
            dispatcher.dispatch(BriefAction::FetchCartSuccess(cart.clone()).into());
            Ok(cart)
        }
        Err(e) => {
            warn!("Failed to fetch cart for brief {brief_id}: {e}");
            dispatcher.dispatch(BriefAction::FetchCartFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}

pub async fn add_to_cart(
    client: &ApiClient,
    dispatcher: &dyn Dispatcher,
    cart: &Cart,
) -> Result<(), ApiClientError> {
    dispatcher.dispatch(BriefAction::AddToCartRequest.into());

    let body = serde_json::to_value(cart)?;
    match client.post(CART_ENDPOINT, &body, RequestOptions::default()).await {
        Ok(_) => {
            dispatcher.dispatch(BriefAction::AddToCartSuccess.into());
            Ok(())
        }
        Err(e) => {
            warn!("Failed to update cart: {e}");
            dispatcher.dispatch(BriefAction::AddToCartFailure(get_response_error_message(&e)).into());
            Err(e)
        }
    }
}
