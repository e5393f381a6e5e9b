//! Message extraction from API bodies.
//!
//! The upstream API puts user-facing text in a few conventional places:
//! `data.message` on success, `error.message` on failure and a bare
//! `message` on unstructured errors. A field counts as absent when it is
//! missing or holds an empty value (`null`, `false`, `0`, `""`), so every
//! lookup here falls through on both.

use crate::interceptor::ExchangeOutcome;

use serde_json::Value;

const SUCCESS_MESSAGE_POINTER: &str = "/data/message";
const ERROR_MESSAGE_POINTER: &str = "/error/message";
const BARE_MESSAGE_POINTER: &str = "/message";

pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings verbatim, everything else as compact JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn message_at(outcome: &ExchangeOutcome, pointer: &str) -> Option<String> {
    outcome
        .pointer(pointer)
        .filter(|value| is_present(value))
        .map(render)
}

/// `data.message` of a successful exchange.
pub fn success_message(outcome: &ExchangeOutcome) -> Option<String> {
    message_at(outcome, SUCCESS_MESSAGE_POINTER)
}

/// `error.message` of a failed exchange, or the status reason when the API
/// sent none.
pub fn baseline_error_message(outcome: &ExchangeOutcome) -> String {
    message_at(outcome, ERROR_MESSAGE_POINTER).unwrap_or_else(|| outcome.to_string())
}

/// Message stored for an uncategorized failure.
///
/// Tries, in order: `body.message`, the serialized body, the rendered
/// outcome. The first non-empty candidate wins.
pub fn residual_error_message(outcome: &ExchangeOutcome) -> String {
    let candidates = [
        message_at(outcome, BARE_MESSAGE_POINTER),
        serialized_body(outcome),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|message| !message.is_empty())
        .unwrap_or_else(|| outcome.to_string())
}

/// Text bodies (HTML pages, plain errors) are already serialized.
fn serialized_body(outcome: &ExchangeOutcome) -> Option<String> {
    outcome.body.as_ref().map(render)
}
