//! Integration tests for named character reference lookup.

use bramble_html::tokenizer::named_character_references::{
    EntityMatcher, NAMED_REFERENCES, resolve,
};

/// Feed `input` until the matcher stops and return the longest match.
fn longest_match(input: &str) -> Option<(&'static str, usize)> {
    let mut matcher = EntityMatcher::new();
    let mut stopped = false;
    for c in input.chars() {
        if !matcher.feed(c) {
            stopped = true;
            break;
        }
    }
    if !stopped {
        matcher.finish();
    }
    matcher.candidate().map(|found| (found.name(), found.length))
}

#[test]
fn test_lookup_common_entities() {
    assert_eq!(resolve("amp;"), Some("&"));
    assert_eq!(resolve("lt;"), Some("<"));
    assert_eq!(resolve("gt;"), Some(">"));
    assert_eq!(resolve("quot;"), Some("\""));
    assert_eq!(resolve("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(resolve("amp"), Some("&"));
    assert_eq!(resolve("lt"), Some("<"));
    assert_eq!(resolve("copy"), Some("\u{00A9}"));
    assert_eq!(resolve("notin"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(resolve("notarealentity;"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn test_table_is_sorted() {
    assert_eq!(NAMED_REFERENCES.len(), 2231);
    assert!(
        NAMED_REFERENCES
            .windows(2)
            .all(|pair| pair[0].0.as_bytes() < pair[1].0.as_bytes())
    );
}

#[test]
fn test_multi_code_point_values() {
    assert_eq!(resolve("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
}

#[test]
fn test_longest_prefix_matching() {
    assert_eq!(longest_match("notin;"), Some(("notin;", 6)));
    assert_eq!(longest_match("notit;"), Some(("not", 3)));
    assert_eq!(longest_match("ampx"), Some(("amp", 3)));
    assert_eq!(longest_match("amp;"), Some(("amp;", 4)));
    assert_eq!(longest_match("xyz"), None);
}

#[test]
fn test_matcher_stops_consuming() {
    let mut matcher = EntityMatcher::new();
    assert!(matcher.feed('a'));
    assert!(matcher.feed('m'));
    assert!(matcher.feed('p'));
    assert!(!matcher.feed('x'));
    assert!(matcher.is_exhausted());
    assert_eq!(matcher.consumed(), 3);
    assert!(!matcher.feed('p'));
}
