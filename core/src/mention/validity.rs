// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DelimiterSet, has_whitespace_run_longer_than};

/// Decides whether `content` (the text typed after a prefix) can still be part of a
/// mention.
///
/// - No `delimiter_set` means there are no restrictions, so `content` is always valid.
/// - `max_space_count_allowed == 0`: `content` is invalid if it contains any member of
///   `delimiter_set`.
/// - `max_space_count_allowed > 0`: runs of whitespace class characters up to this
///   length are tolerated, even if the delimiter set contains whitespace. `content` is
///   invalid if it has a longer run, or if it contains a member of `delimiter_set` that
///   is not in the whitespace class (eg: `.` or a newline).
///
/// ```
/// use r3bl_mention::{DelimiterSet, is_valid};
///
/// let ws = DelimiterSet::whitespace();
/// assert!(is_valid("john", Some(&ws), 0));
/// assert!(!is_valid("john doe", Some(&ws), 0));
/// assert!(is_valid("john  doe", Some(&ws), 2));
/// assert!(!is_valid("john   doe", Some(&ws), 2));
/// assert!(is_valid("anything at all", None, 0));
/// ```
#[must_use]
pub fn is_valid(
    content: &str,
    delimiter_set: Option<&DelimiterSet>,
    max_space_count_allowed: usize,
) -> bool {
    let Some(delimiter_set) = delimiter_set else {
        return true;
    };

    if max_space_count_allowed > 0 {
        if has_whitespace_run_longer_than(content, max_space_count_allowed) {
            return false;
        }
        return !delimiter_set.subtracting_whitespace().is_in(content);
    }

    !delimiter_set.is_in(content)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("nathan", 0, true; "no delimiter")]
    #[test_case("", 0, true; "empty content")]
    #[test_case("nat han", 0, false; "space with no tolerance")]
    #[test_case("nat han", 1, true; "single space tolerated")]
    #[test_case("john  doe", 2, true; "run at threshold")]
    #[test_case("john   doe", 2, false; "run over threshold")]
    #[test_case("john doe.", 2, false; "non whitespace delimiter still counts")]
    #[test_case("john\ndoe", 2, false; "newline is not tolerated")]
    #[test_case("john\tdoe", 1, true; "tab is tolerated")]
    fn test_is_valid(content: &str, max: usize, expected: bool) {
        let set = DelimiterSet::whitespace_and_newlines().union(&DelimiterSet::from("."));
        assert_eq!(is_valid(content, Some(&set), max), expected);
    }

    #[test]
    fn test_no_delimiter_set_is_always_valid() {
        assert!(is_valid("a      b\n.", None, 0));
        assert!(is_valid("a      b\n.", None, 1));
    }

    #[test]
    fn test_whitespace_run_checked_even_without_whitespace_delimiters() {
        // Tolerance caps the run length, whether or not the set lists whitespace.
        let set = DelimiterSet::from(".");
        assert!(!is_valid("a  b", Some(&set), 1));
        assert!(is_valid("a  b", Some(&set), 0));
    }
}
