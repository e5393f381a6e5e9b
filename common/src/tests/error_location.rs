use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an ErrorLocation. If it
/// stops capturing accurate data, all error messages lose their debugging value.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Creating ErrorLocation from the current position
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(location.line > 0, "Should capture line number");
    assert!(location.column > 0, "Should capture column number");
    assert!(!location.file.is_empty(), "Should capture file path");
}

#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation {
        file: "src/interceptor/mod.rs",
        line: 42,
        column: 7,
    };

    assert_eq!(location.to_string(), "[src/interceptor/mod.rs:42:7]");
}

#[track_caller]
fn raise() -> ErrorLocation {
    ErrorLocation::caller()
}

/// **VALUE**: `caller()` reports the outermost tracked call site.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from `caller()`,
/// which would pin every error to error_location.rs.
#[test]
fn given_tracked_helper_when_caller_used_then_points_at_call_site() {
    let location = raise();

    assert!(location.file.ends_with("error_location.rs"));
    assert!(location.file.contains("tests"));
}
