// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Whitespace class used by the scanner: every character in the Unicode "separator"
/// general category (`Zs`, `Zl`, `Zp`) plus the horizontal tab. Line feed and carriage
/// return are **not** in this class.
///
/// ```
/// use r3bl_mention::is_whitespace_class;
///
/// assert!(is_whitespace_class(' '));
/// assert!(is_whitespace_class('\t'));
/// assert!(is_whitespace_class('\u{00A0}')); // No-break space.
/// assert!(!is_whitespace_class('\n'));
/// assert!(!is_whitespace_class('a'));
/// ```
#[must_use]
pub const fn is_whitespace_class(ch: char) -> bool {
    matches!(
        ch,
        // Horizontal tab.
        '\u{0009}'
        // Zs.
        | '\u{0020}'
        | '\u{00A0}'
        | '\u{1680}'
        | '\u{2000}'..='\u{200A}'
        | '\u{202F}'
        | '\u{205F}'
        | '\u{3000}'
        // Zl.
        | '\u{2028}'
        // Zp.
        | '\u{2029}'
    )
}

/// Returns `true` if `text` contains a contiguous run of [`is_whitespace_class`]
/// characters whose length is strictly greater than `count`. The scan is linear and
/// stops as soon as the threshold is crossed.
///
/// ```
/// use r3bl_mention::has_whitespace_run_longer_than;
///
/// assert!(!has_whitespace_run_longer_than("john  doe", 2));
/// assert!(has_whitespace_run_longer_than("john   doe", 2));
/// assert!(!has_whitespace_run_longer_than("", 0));
/// ```
#[must_use]
pub fn has_whitespace_run_longer_than(text: &str, count: usize) -> bool {
    let mut run_len = 0_usize;
    for ch in text.chars() {
        if is_whitespace_class(ch) {
            run_len += 1;
            if run_len > count {
                return true;
            }
        } else {
            run_len = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", 0, false; "empty text")]
    #[test_case("abc", 0, false; "no whitespace")]
    #[test_case("a b", 0, true; "single space over zero")]
    #[test_case("a b", 1, false; "single space at one")]
    #[test_case("a  b", 1, true; "two spaces over one")]
    #[test_case("a \t b", 2, true; "mixed space and tab")]
    #[test_case("a \t b", 3, false; "mixed run at threshold")]
    #[test_case("a \u{00A0}b", 1, true; "no break space counts")]
    #[test_case("a\u{3000}\u{3000}b", 1, true; "ideographic space counts")]
    #[test_case("a\n\nb", 0, false; "newlines are not whitespace class")]
    #[test_case("a \n b", 1, false; "newline resets the run")]
    #[test_case("a b c d", 1, false; "many short runs")]
    fn test_has_whitespace_run_longer_than(text: &str, count: usize, expected: bool) {
        assert_eq!(has_whitespace_run_longer_than(text, count), expected);
    }

    #[test]
    fn test_threshold_boundary_for_many_counts() {
        for count in 0..8 {
            let exact = format!("x{}y", " ".repeat(count));
            let one_more = format!("x{}y", " ".repeat(count + 1));
            assert!(!has_whitespace_run_longer_than(&exact, count), "{count}");
            assert!(has_whitespace_run_longer_than(&one_more, count), "{count}");
        }
    }

    #[test]
    fn test_every_separator_is_whitespace_class() {
        let separators = [
            '\u{0009}', '\u{0020}', '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2005}',
            '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
        ];
        for ch in separators {
            assert!(is_whitespace_class(ch), "{ch:?}");
        }
        for ch in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{200B}', '_'] {
            assert!(!is_whitespace_class(ch), "{ch:?}");
        }
    }
}
