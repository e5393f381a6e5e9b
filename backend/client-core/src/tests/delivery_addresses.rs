use crate::delivery_addresses::errors::{ApiErrorReport, FORM_FIELDS, handle_api_error};
use crate::delivery_addresses::{DeliveryAddressesAction, DeliveryAddressesState, Mutation};
use crate::error::ApiClientError;
use crate::interceptor::{ExchangeOutcome, OutcomeCategory};

use models::{DeliveryAddress, DeliveryAddressDraftBuilder};

use serde_json::json;

fn address(id: u64, default: bool) -> DeliveryAddress {
    DeliveryAddress {
        id,
        street_name: "Main Street".to_string(),
        ap_suite: String::new(),
        house_number: id.to_string(),
        city: "Springfield".to_string(),
        postal_code: "62704".to_string(),
        state: "IL".to_string(),
        default,
    }
}

fn rejected(body: serde_json::Value) -> ApiClientError {
    ApiClientError::rejected(
        OutcomeCategory::BenignRedirect,
        ExchangeOutcome::new(300).with_body(body),
    )
}

// ============================================
// REDUCER
// ============================================

/// **VALUE**: At most one address is the default after an upsert.
///
/// **BUG THIS CATCHES**: Would catch the old default staying flagged until the refetch,
/// showing two "Default" badges.
#[test]
fn given_new_default_when_upserted_then_previous_default_is_cleared() {
    let mut state = DeliveryAddressesState::default();
    state.apply(DeliveryAddressesAction::FetchSuccess(vec![
        address(1, true),
        address(2, false),
    ]));

    state.apply(DeliveryAddressesAction::Upserted(address(2, true)));

    let defaults: Vec<u64> = state
        .addresses
        .iter()
        .filter(|a| a.default)
        .map(|a| a.id)
        .collect();
    assert_eq!(defaults, vec![2]);
}

#[test]
fn given_unknown_id_when_upserted_then_appended() {
    let mut state = DeliveryAddressesState::default();

    state.apply(DeliveryAddressesAction::Upserted(address(5, false)));

    assert_eq!(state.addresses, vec![address(5, false)]);
}

#[test]
fn given_overlapping_mutations_when_finished_then_tracked_independently() {
    let mut state = DeliveryAddressesState::default();

    state.apply(DeliveryAddressesAction::MutationStarted(Mutation::Update));
    state.apply(DeliveryAddressesAction::MutationStarted(Mutation::Update));
    state.apply(DeliveryAddressesAction::MutationStarted(Mutation::Delete));
    state.apply(DeliveryAddressesAction::MutationFinished(Mutation::Update));

    assert!(state.is_mutating(Mutation::Update), "One update still running");
    assert!(state.is_mutating(Mutation::Delete));
    assert!(!state.is_mutating(Mutation::Create));
}

#[test]
fn given_removed_id_when_applied_then_address_dropped() {
    let mut state = DeliveryAddressesState::default();
    state.apply(DeliveryAddressesAction::FetchSuccess(vec![
        address(1, false),
        address(2, false),
    ]));

    state.apply(DeliveryAddressesAction::Removed(1));

    assert_eq!(state.addresses, vec![address(2, false)]);
}

// ============================================
// API ERROR MAPPING
// ============================================

#[test]
fn given_field_errors_under_errors_key_when_handled_then_mapped_to_form_fields() {
    // GIVEN: A validation body nesting field errors under `errors`
    let error = rejected(json!({
        "errors": {
            "postal_code": ["Invalid postal code", "Too short"],
            "city": "Unknown city",
            "unrelated": ["ignored"]
        }
    }));

    // WHEN
    let report = handle_api_error(&error, FORM_FIELDS);

    // THEN: First message per known field, no snackbar
    assert_eq!(report.field_errors.len(), 2);
    assert_eq!(report.field_errors["postal_code"], "Invalid postal code");
    assert_eq!(report.field_errors["city"], "Unknown city");
    assert_eq!(report.message, None);
}

#[test]
fn given_top_level_field_errors_when_handled_then_mapped() {
    let error = rejected(json!({"street_name": ["Required"]}));

    let report = handle_api_error(&error, FORM_FIELDS);

    assert_eq!(report.field_errors["street_name"], "Required");
}

#[test]
fn given_no_field_errors_when_handled_then_message_goes_to_snackbar() {
    let error = rejected(json!({"error": {"message": "Address limit reached"}}));

    let report = handle_api_error(&error, FORM_FIELDS);

    assert!(report.field_errors.is_empty());
    assert_eq!(report.message.as_deref(), Some("Address limit reached"));
}

#[test]
fn given_transport_error_when_handled_then_snackbar_has_error_text() {
    let error = ApiClientError::unexpected_payload("missing /data");

    let report = handle_api_error(&error, FORM_FIELDS);

    let message = report.message.expect("snackbar message");
    assert!(message.contains("missing /data"));
}

#[test]
fn given_validation_errors_when_reported_then_first_message_per_field() {
    let errors = DeliveryAddressDraftBuilder::default()
        .with_postal_code("abc")
        .validate();

    let report = ApiErrorReport::from_validation(&errors);

    assert!(!report.is_empty());
    assert_eq!(report.field_errors["street_name"], "This field is required");
    assert!(report.field_errors.contains_key("postal_code"));
    assert_eq!(report.message, None);
}
