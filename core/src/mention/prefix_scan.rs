/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use super::{DEBUG_MENTION_SCAN, DelimiterSet, MentionMatch, is_valid};
use crate::{GCStringRef, InlineVec, SegIndex, SegWidth, Utf16Index, call_if_true,
            seg_index};

/// Finds the mention for a single `prefix` that ends at `caret_end`.
///
/// 1. Only the graphemes before `caret_end` (the "leading text") are searched. An offset
///    past the end of `text` is clamped, and an offset that falls inside a grapheme
///    cluster excludes that cluster.
/// 2. The last occurrence of the first grapheme of `prefix` anchors the match. Each
///    following grapheme of `prefix` must have its last occurrence exactly one position
///    after the previous one. There is no backtracking to earlier occurrences, so in
///    `"@@x"` the prefix `"@@"` is not found (the last `@` is at index 1 for both).
/// 3. The word runs from the anchor to the caret, and the text after the prefix has to
///    pass [`is_valid`].
///
/// Returns [`None`] for an empty prefix, or when nothing matches.
///
/// ```
/// use r3bl_mention::{DelimiterSet, find_match, utf16_range};
///
/// let text = "Hello @nathan how are";
/// let ws = DelimiterSet::whitespace();
///
/// let it = find_match(text, 13, "@", Some(&ws), 0).unwrap();
/// assert_eq!(it.word, "@nathan");
/// assert_eq!(it.range, utf16_range(6, 7));
///
/// // With the caret at the end, the word would contain spaces.
/// assert_eq!(find_match(text, text.len(), "@", Some(&ws), 0), None);
/// ```
#[must_use]
pub fn find_match(
    text: &str,
    caret_end: impl Into<Utf16Index>,
    prefix: &str,
    delimiter_set: Option<&DelimiterSet>,
    max_space_count_allowed: usize,
) -> Option<MentionMatch> {
    let gcs = GCStringRef::new(text);
    let leading_width = gcs.seg_width_at_utf16_index(caret_end.into());
    find_match_in(
        &gcs,
        leading_width,
        prefix,
        delimiter_set,
        max_space_count_allowed,
    )
}

/// Same as [`find_match`], but over text that is already segmented, and a caret that
/// is already converted into a count of leading graphemes.
#[must_use]
pub fn find_match_in(
    gcs: &GCStringRef<'_>,
    leading_width: SegWidth,
    prefix: &str,
    delimiter_set: Option<&DelimiterSet>,
    max_space_count_allowed: usize,
) -> Option<MentionMatch> {
    let prefix_gcs = GCStringRef::new(prefix);
    if prefix_gcs.is_empty() {
        return None;
    }

    let start = locate_prefix(gcs, leading_width, &prefix_gcs)?;
    let content_start = seg_index(start.as_usize() + prefix_gcs.len().as_usize());
    let content = gcs.str_between(content_start, leading_width);

    if !is_valid(content, delimiter_set, max_space_count_allowed) {
        call_if_true!(DEBUG_MENTION_SCAN, {
            tracing::debug!(
                message = "🔎 find_match_in -> rejected",
                prefix = ?prefix,
                content = ?content,
            );
        });
        return None;
    }

    let it = MentionMatch {
        prefix: prefix.into(),
        word: gcs.str_between(start, leading_width).to_string(),
        range: gcs.utf16_range_between(start, leading_width),
    };

    call_if_true!(DEBUG_MENTION_SCAN, {
        tracing::debug!(
            message = "🔎 find_match_in -> found",
            mention = %it,
        );
    });

    Some(it)
}

/// Segment index where `prefix_gcs` starts in the leading text, using the "last
/// occurrence, then adjacency" rule.
fn locate_prefix(
    gcs: &GCStringRef<'_>,
    leading_width: SegWidth,
    prefix_gcs: &GCStringRef<'_>,
) -> Option<SegIndex> {
    let needles: InlineVec<&str> = prefix_gcs
        .segments()
        .iter()
        .map(|seg| seg.get_str(prefix_gcs.as_str()))
        .collect();

    let (first, rest) = needles.split_first()?;
    let anchor = gcs.rfind_seg(first, leading_width)?;

    let mut previous = anchor;
    for needle in rest {
        let found = gcs.rfind_seg(needle, leading_width)?;
        if found != previous.next() {
            return None;
        }
        previous = found;
    }

    Some(anchor)
}
