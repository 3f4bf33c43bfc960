// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use r3bl_mention::{InlineString, MentionMatch};

pub const NO_MATCH_MSG: &str = "no match";

pub const DEFAULT_PREFIX: &str = "@";

#[must_use]
pub fn match_found_msg(it: &MentionMatch) -> InlineString {
    let mut acc = InlineString::new();
    _ = write!(
        acc,
        "prefix: {:?}, word: {:?}, range: {}",
        it.prefix.as_str(),
        it.word,
        it.range
    );
    acc
}

#[must_use]
pub fn no_text_msg() -> &'static str {
    "No text to scan. Provide it as an argument, or use --stdin."
}

#[cfg(test)]
mod tests {
    use r3bl_mention::utf16_range;

    use super::*;

    #[test]
    fn test_match_found_msg() {
        let it = MentionMatch {
            prefix: "@".into(),
            word: "@bo".to_string(),
            range: utf16_range(3, 3),
        };
        pretty_assertions::assert_eq!(
            match_found_msg(&it).as_str(),
            r#"prefix: "@", word: "@bo", range: [3, 6)"#
        );
    }
}
