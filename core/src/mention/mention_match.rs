// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{InlineString, Utf16Range};

/// A mention that ends at the caret.
///
/// - `prefix`: the trigger that matched, eg: `@`.
/// - `word`: the prefix plus everything typed after it, up to the caret, eg: `@nat`.
/// - `range`: where `word` lives in the text, in UTF-16 code units. Slicing the text with
///   it (see [`Utf16Range::slice_of`]) gives back `word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionMatch {
    pub prefix: InlineString,
    pub word: String,
    pub range: Utf16Range,
}

impl MentionMatch {
    /// The text after the prefix, eg: `nat` for `@nat`. This is what an autocomplete
    /// popover filters its suggestions with.
    #[must_use]
    pub fn query(&self) -> &str {
        self.word
            .strip_prefix(self.prefix.as_str())
            .unwrap_or(&self.word)
    }
}

impl Display for MentionMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {:?} {}", self.prefix.as_str(), self.word, self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, utf16_range};

    fn fixture() -> MentionMatch {
        MentionMatch {
            prefix: "@".into(),
            word: "@nathan".to_string(),
            range: utf16_range(6, 7),
        }
    }

    #[test]
    fn test_query_and_display() {
        let it = fixture();
        assert_eq2!(it.query(), "nathan");
        assert_eq2!(format!("{it}"), r#""@" "@nathan" [6, 13)"#);
    }

    #[test]
    fn test_serialize_to_json() {
        let json = serde_json::to_string(&fixture()).unwrap();
        assert_eq2!(
            json,
            r#"{"prefix":"@","word":"@nathan","range":{"start":6,"len":7}}"#
        );
    }
}
