use crate::{DeliveryAddress, format_delivery_address};

fn address(ap_suite: &str) -> DeliveryAddress {
    DeliveryAddress {
        id: 1,
        street_name: "Main Street".to_string(),
        ap_suite: ap_suite.to_string(),
        house_number: "42".to_string(),
        city: "Springfield".to_string(),
        postal_code: "62704".to_string(),
        state: "IL".to_string(),
        default: false,
    }
}

#[test]
fn given_address_with_suite_when_formatted_then_suite_follows_street() {
    let formatted = format_delivery_address(&address("Apt 3B"));

    assert_eq!(formatted.street, "42 Main Street, Apt 3B");
    assert_eq!(formatted.city, "Springfield, IL 62704");
}

#[test]
fn given_address_without_suite_when_formatted_then_no_trailing_separator() {
    let formatted = format_delivery_address(&address(""));
    assert_eq!(formatted.street, "42 Main Street");
}
