use crate::error::CliError;

use client_core::error::ApiClientError;
use client_core::interceptor::{ExchangeOutcome, OutcomeCategory};

use serde_json::json;

/// **VALUE**: API failures reach the terminal as the server's message.
///
/// **BUG THIS CATCHES**: Would catch the conversion using the error's Display, which
/// prints "Rejected Error: HTTP 404 ..." plus a source location to end users.
#[test]
fn given_rejected_api_error_when_converted_then_message_is_server_text() {
    // GIVEN
    let error = ApiClientError::rejected(
        OutcomeCategory::Suppressed,
        ExchangeOutcome::new(404).with_body(json!({"error": {"message": "Brief not found"}})),
    );

    // WHEN
    let cli_error = CliError::from(error);

    // THEN
    assert!(matches!(cli_error, CliError::Core { .. }));
    assert_eq!(cli_error.message(), "Brief not found");
}

#[test]
fn given_cli_error_when_displayed_then_includes_location() {
    let error = CliError::validation("Access token cannot be empty");

    let display = error.to_string();

    assert!(display.starts_with("Validation Error: Access token cannot be empty ["));
    assert!(display.contains("error.rs"));
}
