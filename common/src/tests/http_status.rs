use crate::HttpStatusCode;

#[test]
fn given_five_hundred_and_above_when_checked_then_is_server_fault() {
    assert!(HttpStatusCode(500).is_server_fault());
    assert!(HttpStatusCode(503).is_server_fault());
    // Non-standard codes above the 5xx range still count.
    assert!(HttpStatusCode(600).is_server_fault());
    assert!(!HttpStatusCode(499).is_server_fault());
}

#[test]
fn given_401_or_403_when_checked_then_is_auth_failure() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
    assert!(!HttpStatusCode(400).is_auth_failure());
}

/// **VALUE**: Pins the inclusive 300 boundary.
///
/// **BUG THIS CATCHES**: An off-by-one (`< 300`) would start storing 300 responses as
/// global errors.
#[test]
fn given_boundary_codes_when_checked_then_300_is_inside_redirect_boundary() {
    assert!(HttpStatusCode(280).is_within_redirect_boundary());
    assert!(HttpStatusCode(300).is_within_redirect_boundary());
    assert!(!HttpStatusCode(301).is_within_redirect_boundary());
}

#[test]
fn given_known_and_unknown_codes_when_reason_phrase_then_only_known_resolve() {
    assert_eq!(HttpStatusCode(404).reason_phrase(), Some("Not Found"));
    assert_eq!(HttpStatusCode(422).reason_phrase(), Some("Unprocessable Entity"));
    assert_eq!(HttpStatusCode(299).reason_phrase(), None);
}
