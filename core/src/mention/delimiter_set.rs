// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeSet,
          fmt::{Display, Formatter}};

use serde::{Deserialize, Serialize};

use super::is_whitespace_class;

/// Characters that end a mention. If one of these shows up in the text typed after the
/// prefix, then the text is no longer a mention.
///
/// It serializes as a plain string whose characters are the members, so a JSON config
/// can say `"global_delimiter_set": " \n.,"`.
///
/// ```
/// use r3bl_mention::DelimiterSet;
///
/// let set = DelimiterSet::from(" .,");
/// assert!(set.contains(' '));
/// assert!(set.contains(','));
/// assert!(!set.contains('@'));
///
/// let reduced = set.subtracting_whitespace();
/// assert!(!reduced.contains(' '));
/// assert!(reduced.contains('.'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DelimiterSet {
    chars: BTreeSet<char>,
}

/// Code points that the whitespace class covers, see [`is_whitespace_class`].
const WHITESPACE_CHARS: &[char] = &[
    '\u{0009}', '\u{0020}', '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}',
    '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}',
    '\u{200A}', '\u{2028}', '\u{2029}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// Line breaking control characters that are not in the whitespace class.
const NEWLINE_CHARS: &[char] = &['\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}'];

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                              Constructors                                   │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl DelimiterSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// The whitespace class: Unicode separators (`Zs`, `Zl`, `Zp`) plus tab.
    #[must_use]
    pub fn whitespace() -> Self { WHITESPACE_CHARS.iter().copied().collect() }

    /// [`Self::whitespace`] plus line feed, vertical tab, form feed, carriage return and
    /// next line.
    #[must_use]
    pub fn whitespace_and_newlines() -> Self {
        WHITESPACE_CHARS
            .iter()
            .chain(NEWLINE_CHARS.iter())
            .copied()
            .collect()
    }
}

impl FromIterator<char> for DelimiterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for DelimiterSet {
    fn from(chars: &str) -> Self { chars.chars().collect() }
}

impl From<String> for DelimiterSet {
    fn from(chars: String) -> Self { Self::from(chars.as_str()) }
}

impl From<DelimiterSet> for String {
    fn from(set: DelimiterSet) -> Self { set.chars.into_iter().collect() }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                               Operations                                    │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl DelimiterSet {
    #[must_use]
    pub fn contains(&self, ch: char) -> bool { self.chars.contains(&ch) }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    pub fn chars(&self) -> impl Iterator<Item = char> { self.chars.iter().copied() }

    pub fn insert(&mut self, ch: char) -> bool { self.chars.insert(ch) }

    /// Returns `true` if any character of `text` is a member of this set.
    #[must_use]
    pub fn is_in(&self, text: &str) -> bool { text.chars().any(|ch| self.contains(ch)) }

    /// A copy of this set without any member of the whitespace class. Newlines survive.
    #[must_use]
    pub fn subtracting_whitespace(&self) -> Self {
        self.chars().filter(|ch| !is_whitespace_class(*ch)).collect()
    }

    #[must_use]
    pub fn union(&self, other: &DelimiterSet) -> Self {
        self.chars.union(&other.chars).copied().collect()
    }
}

impl Display for DelimiterSet {
    /// Shows each member escaped, eg: `{' ', '\n', '.'}` is shown as `" \n."`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"")?;
        for ch in &self.chars {
            write!(f, "{}", ch.escape_default())?;
        }
        write!(f, "\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_presets() {
        let ws = DelimiterSet::whitespace();
        assert!(ws.contains(' '));
        assert!(ws.contains('\t'));
        assert!(ws.contains('\u{3000}'));
        assert!(!ws.contains('\n'));
        assert!(ws.chars().all(is_whitespace_class));

        let ws_nl = DelimiterSet::whitespace_and_newlines();
        assert!(ws_nl.contains('\n'));
        assert!(ws_nl.contains('\r'));
        assert_eq2!(ws_nl.len(), ws.len() + NEWLINE_CHARS.len());
    }

    #[test]
    fn test_subtracting_whitespace() {
        let set = DelimiterSet::whitespace_and_newlines().union(&DelimiterSet::from(".,"));
        let reduced = set.subtracting_whitespace();
        assert_eq2!(reduced, DelimiterSet::from("\n\u{000B}\u{000C}\r\u{0085}.,"));
        assert!(DelimiterSet::whitespace().subtracting_whitespace().is_empty());
    }

    #[test]
    fn test_is_in() {
        let set = DelimiterSet::from(" .");
        assert!(set.is_in("a.b"));
        assert!(!set.is_in("ab"));
        assert!(!set.is_in(""));
        assert!(!DelimiterSet::new().is_in("a b"));
    }

    #[test]
    fn test_serde_as_string() {
        let set = DelimiterSet::from(". ");
        let json = serde_json::to_string(&set).unwrap();
        assert_eq2!(json, r#"" .""#);

        let parsed: DelimiterSet = serde_json::from_str(r#"" \n""#).unwrap();
        assert!(parsed.contains(' '));
        assert!(parsed.contains('\n'));
        assert_eq2!(parsed.len(), 2);
    }

    #[test]
    fn test_display_escapes() {
        let set = DelimiterSet::from("\n.");
        assert_eq2!(format!("{set}"), r#""\n.""#);
    }
}
