use ckit_ops::{OpsError, text};

#[test]
fn concat_and_repeat() {
    assert_eq!(text::concat("Hello", "World"), "HelloWorld");
    assert_eq!(text::concat("", "x"), "x");
    assert_eq!(text::repeat("a", 3), "aaa");
    assert_eq!(text::repeat("ab", 0), "");
    assert_eq!(text::repeat("ab", -2), "");
}

#[test]
fn slice_clamps_at_the_edges() {
    assert_eq!(text::slice("abcdef", 1, 4).unwrap(), "bcd");
    assert_eq!(text::slice("abcdef", -3, 2).unwrap(), "ab");
    assert_eq!(text::slice("abc", 0, 10).unwrap(), "abc");
    assert_eq!(text::slice("abc", 3, 3).unwrap(), "");
}

#[test]
fn slice_rejects_out_of_order_bounds() {
    assert!(matches!(text::slice("abcdef", 4, 2), Err(OpsError::InvalidRange { start: 4, end: 2 })));
    // A negative end is not clamped, so it stays below the clamped start.
    assert!(matches!(text::slice("abc", 0, -1), Err(OpsError::InvalidRange { .. })));
    // Start beyond the length is not clamped down either.
    assert!(matches!(text::slice("abc", 5, 10), Err(OpsError::InvalidRange { .. })));
}

#[test]
fn slice_operates_on_bytes() {
    // "é" occupies bytes 1..3; cutting through it is an error.
    assert!(matches!(text::slice("héllo", 1, 2), Err(OpsError::NotCharBoundary { start: 1, end: 2 })));
    assert_eq!(text::slice("héllo", 1, 3).unwrap(), "é");
}

#[test]
fn case_mapping() {
    assert_eq!(text::to_upper("abc"), "ABC");
    assert_eq!(text::to_lower("XYZ"), "xyz");
    assert_eq!(text::to_upper("straße"), "STRASSE");
}

#[test]
fn contains_substring() {
    assert!(text::contains("banana", "na"));
    assert!(!text::contains("banana", "xy"));
    assert!(text::contains("banana", ""));
}

#[test]
fn split_on_literal_separator() {
    assert_eq!(text::split("a,b,c", ","), ["a", "b", "c"]);
    assert_eq!(text::split("a,,c", ","), ["a", "", "c"]);
    assert_eq!(text::split("", ","), [""]);
}

#[test]
fn split_with_empty_separator_follows_std() {
    assert_eq!(text::split("abc", ""), ["", "a", "b", "c", ""]);
}
