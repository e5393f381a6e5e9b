use crate::api_client::get_response_error_message;
use crate::error::ApiClientError;

use models::ModelError;

use std::collections::BTreeMap;

use serde_json::Value;

/// Form fields of the delivery address form, in display order.
pub const FORM_FIELDS: &[&str] = &[
    "street_name",
    "ap_suite",
    "house_number",
    "city",
    "postal_code",
    "state",
    "default",
];

/// What the screen should show after a failed call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrorReport {
    /// First message per form field.
    pub field_errors: BTreeMap<String, String>,
    /// Snackbar text, when the error could not be pinned to a field.
    pub message: Option<String>,
}

impl ApiErrorReport {
    pub fn from_validation(errors: &[ModelError]) -> Self {
        let mut field_errors = BTreeMap::new();
        for error in errors {
            field_errors
                .entry(error.field().to_string())
                .or_insert_with(|| error.message().to_string());
        }

        Self {
            field_errors,
            message: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty() && self.message.is_none()
    }
}

/// Split a failed call into per-field messages and a snackbar message.
///
/// Field errors are read from `{"field": ["msg", ...]}` either at the top of
/// the body or under `errors`. Only `form_fields` are considered; without
/// any match the whole error goes to the snackbar.
pub fn handle_api_error(error: &ApiClientError, form_fields: &[&str]) -> ApiErrorReport {
    let field_errors = error
        .outcome()
        .and_then(|outcome| outcome.body.as_ref())
        .map(|body| collect_field_errors(body, form_fields))
        .unwrap_or_default();

    let message = if field_errors.is_empty() {
        Some(get_response_error_message(error))
    } else {
        None
    };

    ApiErrorReport {
        field_errors,
        message,
    }
}

fn collect_field_errors(body: &Value, form_fields: &[&str]) -> BTreeMap<String, String> {
    let source = match body.get("errors") {
        Some(errors @ Value::Object(_)) => errors,
        _ => body,
    };

    form_fields
        .iter()
        .filter_map(|field| {
            let message = match source.get(*field)? {
                Value::String(text) => Some(text.clone()),
                Value::Array(items) => items.iter().find_map(|item| item.as_str().map(String::from)),
                _ => None,
            }?;
            Some((field.to_string(), message))
        })
        .collect()
}
