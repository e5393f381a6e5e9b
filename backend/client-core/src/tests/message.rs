use crate::interceptor::ExchangeOutcome;
use crate::interceptor::message::{
    baseline_error_message, is_present, residual_error_message, success_message,
};

use serde_json::json;

/// **VALUE**: Empty values count as absent, matching how the API signals "no message".
///
/// **BUG THIS CATCHES**: Would catch `0` or `false` being rendered as a toast text.
#[test]
fn given_falsy_values_when_checked_then_not_present() {
    for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
        assert!(!is_present(&value), "{value} should be absent");
    }

    for value in [json!(true), json!(1), json!("x"), json!([]), json!({})] {
        assert!(is_present(&value), "{value} should be present");
    }
}

#[test]
fn given_non_string_success_message_when_extracted_then_rendered_as_json() {
    let outcome = ExchangeOutcome::new(200).with_body(json!({"data": {"message": 42}}));

    assert_eq!(success_message(&outcome).as_deref(), Some("42"));
}

#[test]
fn given_no_error_message_when_building_baseline_then_falls_back_to_status() {
    let outcome = ExchangeOutcome::new(404).with_body(json!({"error": {"message": ""}}));

    assert_eq!(baseline_error_message(&outcome), "HTTP 404 Not Found");
}

/// **VALUE**: Residual messages prefer `message`, then the body, then the status.
///
/// **BUG THIS CATCHES**: Would catch an empty `message` winning over the body, leaving a
/// blank error banner.
#[test]
fn given_empty_bare_message_when_building_residual_then_uses_serialized_body() {
    // GIVEN: A body whose message is empty
    let outcome = ExchangeOutcome::new(422).with_body(json!({"message": ""}));

    // WHEN
    let message = residual_error_message(&outcome);

    // THEN: Compact JSON of the whole body
    assert_eq!(message, r#"{"message":""}"#);
}

#[test]
fn given_bare_message_when_building_residual_then_uses_it() {
    let outcome = ExchangeOutcome::new(409).with_body(json!({"message": "Duplicate"}));

    assert_eq!(residual_error_message(&outcome), "Duplicate");
}

#[test]
fn given_empty_string_body_when_building_residual_then_uses_status() {
    let outcome = ExchangeOutcome::new(409).with_body(json!(""));

    assert_eq!(residual_error_message(&outcome), "HTTP 409 Conflict");
}
