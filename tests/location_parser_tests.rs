use mutagrade::types::{GraderError, LocationRange};

#[test]
fn single_line_spec_collapses_to_one_line_interval() {
    let range = LocationRange::parse("a/b.ts:10").expect("parse single-line range");

    assert_eq!(range.file_name, "a/b.ts");
    assert_eq!(range.start_line, 10);
    assert_eq!(range.end_line, 10);
}

#[test]
fn dashed_line_spec_parses_to_interval() {
    let range = LocationRange::parse("a/b.ts:10-20").expect("parse interval range");

    assert_eq!(range.file_name, "a/b.ts");
    assert_eq!(range.start_line, 10);
    assert_eq!(range.end_line, 20);
}

#[test]
fn column_qualified_location_is_unsupported() {
    let err = LocationRange::parse("a/b.ts:10:2").expect_err("two colons must fail");

    assert_eq!(
        err,
        GraderError::UnsupportedLocationFormat {
            location: "a/b.ts:10:2".to_string(),
        }
    );
}

#[test]
fn location_without_line_spec_is_unsupported() {
    let err = LocationRange::parse("a/b.ts").expect_err("missing line spec must fail");

    assert!(matches!(err, GraderError::UnsupportedLocationFormat { .. }));
}

#[test]
fn non_numeric_line_spec_is_unsupported() {
    for bad in ["a/b.ts:x", "a/b.ts:10-", "a/b.ts:-20", "a/b.ts:"] {
        let err = LocationRange::parse(bad).expect_err("malformed line spec must fail");
        assert!(
            matches!(err, GraderError::UnsupportedLocationFormat { .. }),
            "`{bad}` should be rejected"
        );
    }
}

#[test]
fn interval_is_inclusive_on_both_ends() {
    let range = LocationRange::parse("foo.ts:10-20").expect("parse");

    assert!(!range.contains_line(9));
    assert!(range.contains_line(10));
    assert!(range.contains_line(15));
    assert!(range.contains_line(20));
    assert!(!range.contains_line(21));
}

#[test]
fn path_matching_is_substring_containment() {
    let range = LocationRange::parse("foo.ts:1-5").expect("parse");

    assert!(range.matches_path("foo.ts"));
    assert!(range.matches_path("workspace/src/foo.ts"));
    assert!(!range.matches_path("workspace/src/bar.ts"));
}

#[test]
fn display_round_trips_both_spellings() {
    for spelling in ["foo.ts:7", "foo.ts:7-9"] {
        let range = LocationRange::parse(spelling).expect("parse");
        assert_eq!(range.to_string(), spelling);
    }
}
