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

use std::collections::HashMap;

use super::{DEBUG_MENTION_SCAN, DelimiterSet, MentionMatch, find_match_in};
use crate::{GCStringRef, Utf16Index, call_if_true};

/// Runs [`super::find_match`] for every prefix and returns the most recent match, ie: the
/// one whose range starts last. If two matches start at the same offset, the one whose
/// prefix comes first in `prefixes` wins.
///
/// The delimiter set for a prefix is its entry in `delimiter_sets`, or else
/// `global_delimiter_set`. A prefix that has neither is skipped.
///
/// ```
/// use r3bl_mention::{DelimiterSet, find_best_match};
///
/// let text = "Hi @alice and #bob";
/// let ws = DelimiterSet::whitespace();
/// let it = find_best_match(text, text.len(), &["@", "#"], None, Some(&ws), 0).unwrap();
/// assert_eq!(it.word, "#bob");
/// ```
#[must_use]
pub fn find_best_match<P: AsRef<str>>(
    text: &str,
    caret_end: impl Into<Utf16Index>,
    prefixes: &[P],
    delimiter_sets: Option<&HashMap<String, DelimiterSet>>,
    global_delimiter_set: Option<&DelimiterSet>,
    max_space_count_allowed: usize,
) -> Option<MentionMatch> {
    if prefixes.is_empty() {
        return None;
    }

    // Segment the text once, and share it across all the prefixes.
    let gcs = GCStringRef::new(text);
    let leading_width = gcs.seg_width_at_utf16_index(caret_end.into());

    let mut best: Option<MentionMatch> = None;

    for prefix in prefixes {
        let prefix = prefix.as_ref();

        let Some(delimiter_set) =
            resolve_delimiter_set(prefix, delimiter_sets, global_delimiter_set)
        else {
            call_if_true!(DEBUG_MENTION_SCAN, {
                tracing::debug!(
                    message = "🔎 find_best_match -> skipped, no delimiter set",
                    prefix = ?prefix,
                );
            });
            continue;
        };

        let Some(candidate) = find_match_in(
            &gcs,
            leading_width,
            prefix,
            Some(delimiter_set),
            max_space_count_allowed,
        ) else {
            continue;
        };

        // Strictly greater, so that on a tie the earlier prefix is kept.
        let is_better = best
            .as_ref()
            .is_none_or(|it| candidate.range.start > it.range.start);
        if is_better {
            best = Some(candidate);
        }
    }

    best
}

/// Per prefix delimiter set, falling back to the global one.
#[must_use]
pub fn resolve_delimiter_set<'a>(
    prefix: &str,
    delimiter_sets: Option<&'a HashMap<String, DelimiterSet>>,
    global_delimiter_set: Option<&'a DelimiterSet>,
) -> Option<&'a DelimiterSet> {
    delimiter_sets
        .and_then(|map| map.get(prefix))
        .or(global_delimiter_set)
}
