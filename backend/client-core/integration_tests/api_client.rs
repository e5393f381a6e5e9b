//! End-to-end classification through a real HTTP exchange.

use crate::helpers::{Harness, START_ROUTE, TEST_ACCESS_TOKEN};

use client_core::api_client::{ApiClient, TIMEOUT_MESSAGE, get_response_error_message};
use client_core::capabilities::CredentialStorage;
use client_core::config::AppConfig;
use client_core::error::ApiClientError;
use client_core::interceptor::{OutcomeCategory, RequestOptions};
use client_core::{ACCESS_TOKEN_STORAGE_KEY, SIGN_IN_ROUTE};

use models::{ErrorFormat, NotificationEvent};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Requests carry the stored token and success messages reach the user.
#[tokio::test]
async fn given_stored_token_when_request_succeeds_then_bearer_sent_and_message_shown() {
    // GIVEN: An endpoint that only answers authorized requests
    let mut harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/briefs/cart"))
        .and(header("authorization", format!("Bearer {TEST_ACCESS_TOKEN}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"message": "Cart updated"}})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    // WHEN
    let outcome = harness
        .client
        .post("briefs/cart", &json!({}), RequestOptions::default())
        .await
        .expect("success passes through");

    // THEN
    assert_eq!(outcome.status.0, 200);
    assert_eq!(
        harness.drain_notifications(),
        vec![NotificationEvent::success("Cart updated")]
    );
}

#[tokio::test]
async fn given_server_fault_when_requested_then_rejected_with_status_notification() {
    let mut harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Traceback ..."))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .get("notifications", RequestOptions::default())
        .await;

    let error = result.expect_err("server faults propagate");
    assert_eq!(error.category(), Some(OutcomeCategory::ServerFault));
    assert_eq!(error.status_code(), Some(500));
    assert_eq!(
        harness.drain_notifications(),
        vec![NotificationEvent::error("500").with_description("Something went wrong.")]
    );
    assert_eq!(harness.store.state().core.server_error, None);
}

/// **VALUE**: An expired session is torn down end to end.
///
/// **BUG THIS CATCHES**: Would catch the classifier removing a different storage key than
/// the client reads the token from, leaving the stale token in place.
#[tokio::test]
async fn given_expired_token_when_requested_then_signed_out_and_redirected() {
    // GIVEN
    let mut harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user/delivery-addresses"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "Token expired"}})),
        )
        .mount(&harness.server)
        .await;

    // WHEN
    let result = harness
        .client
        .get("user/delivery-addresses", RequestOptions::default())
        .await;

    // THEN
    let error = result.expect_err("auth failures propagate");
    assert_eq!(error.category(), Some(OutcomeCategory::AuthExpired));
    assert_eq!(
        harness
            .credentials
            .get_item(ACCESS_TOKEN_STORAGE_KEY)
            .unwrap(),
        None
    );
    assert!(!harness.store.state().core.is_authenticated);
    assert_eq!(harness.history.entries(), vec![START_ROUTE, SIGN_IN_ROUTE]);
    assert_eq!(
        harness.drain_notifications(),
        vec![NotificationEvent::error("Token expired")]
    );
}

#[tokio::test]
async fn given_skip_error_when_unauthorized_then_session_kept() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/check-password"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .post(
            "auth/check-password",
            &json!({"password": "wrong"}),
            RequestOptions::skip_error(),
        )
        .await;

    assert_eq!(
        result.expect_err("still rejected").category(),
        Some(OutcomeCategory::Suppressed)
    );
    assert!(harness.credentials.contains(ACCESS_TOKEN_STORAGE_KEY));
    assert_eq!(harness.history.current().as_deref(), Some(START_ROUTE));
}

/// **VALUE**: Residual failures resolve and land in the global error slice.
#[tokio::test]
async fn given_422_json_when_requested_then_resolved_with_text_server_error() {
    let harness = Harness::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/user/delivery-addresses/4"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"message": "Invalid field"})))
        .mount(&harness.server)
        .await;

    let outcome = harness
        .client
        .patch(
            "user/delivery-addresses/4",
            &json!({"city": ""}),
            RequestOptions::default(),
        )
        .await
        .expect("residual errors resolve");

    assert_eq!(outcome.status.0, 422);
    let server_error = harness.store.state().core.server_error.expect("stored");
    assert_eq!(server_error.message, "Invalid field");
    assert_eq!(server_error.format, ErrorFormat::Text);
}

#[tokio::test]
async fn given_html_error_page_when_requested_then_stored_as_html() {
    let harness = Harness::start().await;
    let page = "<html><body><h1>Conflict</h1></body></html>";
    Mock::given(method("GET"))
        .and(path("/api/v1/referral/coupons"))
        .respond_with(ResponseTemplate::new(409).set_body_raw(page, "text/html; charset=utf-8"))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .get("referral/coupons", RequestOptions::default())
        .await;

    assert!(result.is_ok());
    let server_error = harness.store.state().core.server_error.expect("stored");
    assert_eq!(server_error.message, page);
    assert_eq!(server_error.format, ErrorFormat::Html);
}

#[tokio::test]
async fn given_expected_status_when_requested_then_no_global_error() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/briefs/cart/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&harness.server)
        .await;

    let result = harness
        .client
        .get("briefs/cart/missing", RequestOptions::expecting([404]))
        .await;

    assert!(matches!(
        result,
        Err(ApiClientError::Rejected {
            category: OutcomeCategory::Suppressed,
            ..
        })
    ));
    assert_eq!(harness.store.state().core.server_error, None);
}

/// **VALUE**: Transport failures never reach the classifier.
#[tokio::test]
async fn given_unreachable_server_when_requested_then_http_error_without_side_effects() {
    // GIVEN: A client pointing at a port nothing listens on
    let mut harness = Harness::start().await;
    let client = ApiClient::new(
        "http://127.0.0.1:1/api/v1",
        harness.client.classifier().clone(),
        Arc::new(harness.credentials.clone()),
    )
    .expect("Failed to build client");

    // WHEN
    let result = client.get("notifications", RequestOptions::default()).await;

    // THEN
    assert!(matches!(result, Err(ApiClientError::Http { .. })));
    assert!(harness.drain_notifications().is_empty());
    assert!(harness.credentials.contains(ACCESS_TOKEN_STORAGE_KEY));
}

/// **VALUE**: A slow server ends in a timeout the user can act on.
///
/// **BUG THIS CATCHES**: Would catch the configured timeout being ignored, or the
/// timeout being reported as a raw transport error string.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_timeout_error_with_retry_message() {
    // GIVEN: A 1 second client timeout and a server answering after 3 seconds
    let mut harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/notifications"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&harness.server)
        .await;

    let mut config = AppConfig::default();
    config.api.base_url = format!("{}/api/v1", harness.server.uri());
    config.api.timeout_secs = 1;
    let client = ApiClient::from_config(
        &config,
        harness.client.classifier().clone(),
        Arc::new(harness.credentials.clone()),
    )
    .expect("Failed to build client");

    // WHEN
    let error = client
        .get("notifications", RequestOptions::default())
        .await
        .unwrap_err();

    // THEN: Timeout flagged, fixed message, classifier untouched
    assert!(error.is_timeout());
    assert_eq!(get_response_error_message(&error), TIMEOUT_MESSAGE);
    assert!(harness.drain_notifications().is_empty());
}
