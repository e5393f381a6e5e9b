use crate::{DeliveryAddressDraftBuilder, ModelError, PlaceDetails};

fn valid_builder() -> DeliveryAddressDraftBuilder {
    DeliveryAddressDraftBuilder::default()
        .with_street_name("Main Street")
        .with_house_number("42")
        .with_city("Springfield")
        .with_postal_code("62704")
        .with_state("IL")
}

/// **VALUE**: Verifies a complete form builds into a trimmed draft.
///
/// **BUG THIS CATCHES**: Would catch if trimming is dropped and stray whitespace from
/// text inputs gets sent to the API.
#[test]
fn given_complete_form_when_building_then_returns_trimmed_draft() {
    // GIVEN: A valid form with padded input
    let builder = valid_builder().with_city("  Springfield ").with_ap_suite(" 3B ");

    // WHEN: Building
    let draft = builder.build().expect("valid form should build");

    // THEN: Values are trimmed, optional suite kept
    assert_eq!(draft.city, "Springfield");
    assert_eq!(draft.ap_suite, "3B");
    assert!(!draft.default);
}

#[test]
fn given_missing_street_when_building_then_returns_validation_error_for_street() {
    let result = valid_builder().with_street_name("   ").build();

    match result {
        Err(ModelError::Validation { field, message, .. }) => {
            assert_eq!(field, "street_name");
            assert_eq!(message, "This field is required");
        }
        Ok(_) => panic!("Blank street must be rejected"),
    }
}

#[test]
fn given_bad_postal_code_when_building_then_returns_postal_code_error() {
    let err = valid_builder().with_postal_code("1234").build().unwrap_err();

    assert_eq!(err.field(), "postal_code");
    assert!(err.message().contains("1234"));
}

#[test]
fn given_zip_plus_four_when_building_then_accepts() {
    assert!(valid_builder().with_postal_code("62704-1234").build().is_ok());
}

/// **VALUE**: Nine digit codes are accepted with or without the hyphen.
///
/// **BUG THIS CATCHES**: Would catch a pattern that requires the hyphen and rejects
/// ZIP+4 codes pasted as a single number.
#[test]
fn given_nine_digit_postal_code_without_hyphen_when_building_then_accepts() {
    assert!(valid_builder().with_postal_code("627041234").build().is_ok());

    for invalid in ["6270412", "62704-12345", "62704--1234"] {
        let err = valid_builder().with_postal_code(invalid).build().unwrap_err();
        assert_eq!(err.field(), "postal_code", "{invalid}");
    }
}

#[test]
fn given_unknown_state_when_building_then_returns_state_error() {
    let err = valid_builder().with_state("XX").build().unwrap_err();
    assert_eq!(err.field(), "state");
}

/// **VALUE**: The form shows every invalid field at once, not just the first.
#[test]
fn given_empty_form_when_validating_then_reports_every_required_field() {
    let errors = DeliveryAddressDraftBuilder::default().validate();

    let fields: Vec<&str> = errors.iter().map(ModelError::field).collect();
    assert_eq!(
        fields,
        vec!["street_name", "house_number", "city", "postal_code", "state"]
    );
}

/// **VALUE**: Place lookups only override the state when it maps to a known code.
///
/// **WHY THIS MATTERS**: Lookup providers sometimes return full names or foreign regions.
/// Writing those into the picker would leave it on a value it cannot display.
#[test]
fn given_place_with_unknown_state_when_applied_then_keeps_current_state() {
    // GIVEN: A form with a selected state, and a lookup result with an unknown region
    let details = PlaceDetails {
        street_name: "Elm Street".to_string(),
        house_number: "7".to_string(),
        city: "Toronto".to_string(),
        postcode: "M5V".to_string(),
        state: "Ontario".to_string(),
    };

    // WHEN: Applying the lookup
    let builder = valid_builder().apply_place_details(&details);

    // THEN: Text fields are replaced, state is kept
    assert_eq!(builder.street_name(), "Elm Street");
    assert_eq!(builder.city(), "Toronto");
    assert_eq!(builder.postal_code(), "M5V");
    assert_eq!(builder.state(), "IL");
}

#[test]
fn given_place_with_known_state_when_applied_then_selects_state() {
    let details = PlaceDetails {
        state: "TX".to_string(),
        ..PlaceDetails::default()
    };

    let builder = DeliveryAddressDraftBuilder::default().apply_place_details(&details);

    assert_eq!(builder.state(), "TX");
}
