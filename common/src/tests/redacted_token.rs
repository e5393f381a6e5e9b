use crate::RedactedAccessToken;

/// **VALUE**: Verifies the token value never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: Requests are logged at debug level. A token leaking into the
/// log file is a session hijack waiting to happen.
#[test]
fn given_token_when_formatted_then_value_is_redacted() {
    let token = RedactedAccessToken::new("eyJhbGciOiJIUzI1NiJ9.secret");

    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    assert!(!debug.contains("secret"));
    assert!(!display.contains("secret"));
    assert_eq!(token.as_str(), "eyJhbGciOiJIUzI1NiJ9.secret");
}

#[test]
fn given_token_when_serialized_then_returns_error() {
    let token = RedactedAccessToken::new("abc");

    let result = serde_json::to_string(&token);

    let message = result.expect_err("Serialization must be refused").to_string();
    assert!(message.contains("RedactedAccessToken refuses to serialize"));
    assert!(!message.contains("abc"));
}

#[test]
fn given_token_when_bearer_then_prefixes_scheme() {
    let token = RedactedAccessToken::new("abc");
    assert_eq!(token.bearer(), "Bearer abc");
}

#[test]
fn given_whitespace_token_when_is_empty_then_true() {
    assert!(RedactedAccessToken::new("   ").is_empty());
    assert!(!RedactedAccessToken::new("t").is_empty());
}
