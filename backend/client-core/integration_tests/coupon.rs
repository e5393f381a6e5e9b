use crate::helpers::Harness;

use client_core::coupon::{CouponForm, fetch_cart, fetch_coupons};

use models::NotificationEvent;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Applying a coupon posts the cart with the code and reloads it.
///
/// **BUG THIS CATCHES**: Would catch `additional` being dropped from the resubmitted
/// cart, which erases the brief's extra options server-side.
#[tokio::test]
async fn given_typed_code_when_applied_then_cart_posted_and_reloaded() {
    // GIVEN: A cart without coupon and a server accepting the code
    let mut harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/briefs/cart/b-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"briefId": "b-42", "additional": {"rush": true}, "couponCode": "WELCOME5"}
        })))
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/briefs/cart"))
        .and(body_json(json!({
            "briefId": "b-42",
            "additional": {"rush": true},
            "couponCode": "WELCOME5"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"message": "Coupon applied"}})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let current = models::Cart {
        brief_id: Some("b-42".to_string()),
        additional: json!({"rush": true}),
        coupon_code: None,
    };
    let mut form = CouponForm::new("b-42");
    form.input("WELCOME5");

    // WHEN
    let refreshed = form
        .apply(&harness.client, &harness.store, &current)
        .await
        .expect("apply succeeds")
        .expect("code was set");

    // THEN
    assert_eq!(refreshed.applied_coupon(), Some("WELCOME5"));
    assert_eq!(CouponForm::badge(&refreshed), Some("5% Discount Applied"));
    assert_eq!(harness.store.state().brief.cart, refreshed);
    assert_eq!(
        harness.drain_notifications(),
        vec![NotificationEvent::success("Coupon applied")]
    );
}

#[tokio::test]
async fn given_empty_code_when_applied_then_no_request() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.server)
        .await;

    let result = CouponForm::new("b-1")
        .apply(&harness.client, &harness.store, &models::Cart::default())
        .await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn given_rejected_coupon_when_applied_then_cart_error_recorded() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/briefs/cart"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": {"message": "Coupon expired"}})),
        )
        .mount(&harness.server)
        .await;

    let mut form = CouponForm::new("b-1");
    form.input("OLD");
    // 400 is a residual error: it resolves, so the apply continues to the refetch.
    Mock::given(method("GET"))
        .and(path("/api/v1/briefs/cart/b-1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&harness.server)
        .await;

    let result = form
        .apply(&harness.client, &harness.store, &models::Cart::default())
        .await;

    assert!(result.is_err());
    let state = harness.store.state();
    assert!(!state.brief.is_cart_loading);
    assert!(state.brief.cart_error.is_some());
}

#[tokio::test]
async fn given_coupon_list_when_fetched_then_options_built() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/referral/coupons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"couponCode": "WELCOME5"}, {"couponCode": "FRIEND5"}]
        })))
        .mount(&harness.server)
        .await;

    let coupons = fetch_coupons(&harness.client, &harness.store).await.unwrap();
    let options = CouponForm::options(&coupons);

    assert_eq!(options.len(), 2);
    assert_eq!(harness.store.state().referral.coupons, coupons);
    assert!(CouponForm::show_select(&models::Cart::default(), &options));

    let missing = fetch_cart(&harness.client, &harness.store, "nope").await;
    assert!(missing.is_err());
}
