/*
 *   Copyright (c) 2025-2026 R3BL LLC
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

use super::segment_builder::{build_segments_for_str, calculate_utf16_len};
use crate::{Seg, SegIndex, SegWidth, SegmentArray, Utf16Index, Utf16Len, Utf16Range,
            seg_width, utf16_range};

/// Grapheme cluster view of a borrowed string.
///
/// # Ownership Model
///
/// - **String data**: Borrowed (`&'a str`), the host owns the text buffer and this
///   crate never mutates or copies it.
/// - **Segment metadata**: Owned ([`SegmentArray`]), computed once per query and shared
///   by every prefix that is scanned in that query.
///
/// # Example Usage
///
/// ```rust
/// use r3bl_mention::{GCStringRef, seg_index, seg_width, utf16_index};
///
/// let gcs = GCStringRef::new("Hi 😃 @bob");
/// assert_eq!(gcs.len(), seg_width(9));
/// assert_eq!(*gcs.utf16_len(), 10);
///
/// // Caret right after the emoji (UTF-16 offset 5) => 4 whole graphemes before it.
/// assert_eq!(gcs.seg_width_at_utf16_index(utf16_index(5)), seg_width(4));
///
/// // Caret in the middle of the emoji's surrogate pair => the emoji is excluded.
/// assert_eq!(gcs.seg_width_at_utf16_index(utf16_index(4)), seg_width(3));
///
/// assert_eq!(gcs.rfind_seg("@", gcs.len()), Some(seg_index(5)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GCStringRef<'a> {
    /// Borrowed string content (does NOT own the string data).
    string: &'a str,
    /// Owned segment array, computed from the borrowed string.
    segments: SegmentArray,
    /// Total UTF-16 length (computed from segments).
    utf16_len: Utf16Len,
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                              Constructors                                   │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl<'a> GCStringRef<'a> {
    #[must_use]
    pub fn new(string: &'a str) -> Self {
        let segments = build_segments_for_str(string);
        let utf16_len = calculate_utf16_len(&segments);
        Self {
            string,
            segments,
            utf16_len,
        }
    }
}

impl<'a> From<&'a str> for GCStringRef<'a> {
    fn from(string: &'a str) -> Self { Self::new(string) }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                                Accessors                                    │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl<'a> GCStringRef<'a> {
    #[must_use]
    pub fn as_str(&self) -> &'a str { self.string }

    #[must_use]
    pub fn segments(&self) -> &SegmentArray { &self.segments }

    /// Number of grapheme clusters.
    #[must_use]
    pub fn len(&self) -> SegWidth { seg_width(self.segments.len()) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    #[must_use]
    pub fn utf16_len(&self) -> Utf16Len { self.utf16_len }

    #[must_use]
    pub fn get(&self, index: SegIndex) -> Option<&Seg> { self.segments.get(index.as_usize()) }

    /// Get the string slice for the grapheme cluster at `index`.
    #[must_use]
    pub fn get_str(&self, index: SegIndex) -> Option<&'a str> {
        self.get(index).map(|seg| seg.get_str(self.string))
    }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                               Conversions                                   │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl<'a> GCStringRef<'a> {
    /// Number of whole grapheme clusters that end at or before the given UTF-16 offset.
    ///
    /// - An offset past the end of the string is clamped to the end.
    /// - An offset that lands inside a grapheme cluster (eg: between the two halves of a
    ///   surrogate pair, or between a base character and its combining mark) floors to
    ///   the start of that cluster, so the cluster is not counted.
    #[must_use]
    pub fn seg_width_at_utf16_index(&self, offset: Utf16Index) -> SegWidth {
        // Segment end offsets are strictly increasing, so a binary search works.
        let count = self
            .segments
            .partition_point(|seg| seg.end_utf16_index() <= offset);
        seg_width(count)
    }

    /// Byte index where the segment at `index` starts. An index equal to [`Self::len`]
    /// maps to the end of the string.
    #[must_use]
    pub fn byte_index_of(&self, index: SegIndex) -> usize {
        self.get(index)
            .map_or(self.string.len(), |seg| seg.start_byte_index)
    }

    /// UTF-16 offset where the segment at `index` starts. An index equal to
    /// [`Self::len`] maps to the end of the string.
    #[must_use]
    pub fn utf16_index_of(&self, index: SegIndex) -> Utf16Index {
        self.get(index)
            .map_or(self.utf16_len.into(), |seg| seg.start_utf16_index)
    }

    /// String slice covering the segments in `[start, end)`. Empty if the run is empty.
    #[must_use]
    pub fn str_between(&self, start: SegIndex, end: SegWidth) -> &'a str {
        let end = end.min(self.len());
        if start.as_usize() >= end.as_usize() {
            return "";
        }
        let start_byte_index = self.byte_index_of(start);
        let end_byte_index = self.byte_index_of(SegIndex(end.as_usize()));
        &self.string[start_byte_index..end_byte_index]
    }

    /// UTF-16 range covering the segments in `[start, end)`.
    #[must_use]
    pub fn utf16_range_between(&self, start: SegIndex, end: SegWidth) -> Utf16Range {
        let end = end.min(self.len());
        let start_utf16_index = self.utf16_index_of(start);
        if start.as_usize() >= end.as_usize() {
            return utf16_range(start_utf16_index, 0);
        }
        let end_utf16_index = self.utf16_index_of(SegIndex(end.as_usize()));
        utf16_range(start_utf16_index, *end_utf16_index - *start_utf16_index)
    }
}

// ╭─────────────────────────────────────────────────────────────────────────────╮
// │                                 Search                                      │
// ╰─────────────────────────────────────────────────────────────────────────────╯

impl GCStringRef<'_> {
    /// Index of the last grapheme cluster in `[0, within)` that is exactly equal to
    /// `needle`. The comparison is per grapheme cluster, so `"e"` does not match the
    /// first half of a decomposed `"e\u{301}"`.
    #[must_use]
    pub fn rfind_seg(&self, needle: &str, within: SegWidth) -> Option<SegIndex> {
        let within = within.min(self.len()).as_usize();
        self.segments[..within]
            .iter()
            .rev()
            .find(|seg| seg.get_str(self.string) == needle)
            .map(|seg| seg.seg_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, seg_index, utf16_index, utf16_len};

    const TEST_STRING: &str = "Hi 😃 📦 🙏🏽 @bob.";

    #[test]
    fn test_counts() {
        let gcs = GCStringRef::new(TEST_STRING);
        assert_eq2!(gcs.as_str(), TEST_STRING);
        assert_eq2!(gcs.len(), seg_width(14));
        assert_eq2!(gcs.utf16_len(), utf16_len(TEST_STRING.encode_utf16().count()));
        assert!(!gcs.is_empty());
        assert!(GCStringRef::new("").is_empty());
    }

    #[test]
    fn test_get_str() {
        let gcs = GCStringRef::new(TEST_STRING);
        assert_eq2!(gcs.get_str(seg_index(0)), Some("H"));
        assert_eq2!(gcs.get_str(seg_index(3)), Some("😃"));
        assert_eq2!(gcs.get_str(seg_index(7)), Some("🙏🏽"));
        assert_eq2!(gcs.get_str(seg_index(14)), None);
    }

    #[test]
    fn test_seg_width_at_utf16_index() {
        let gcs = GCStringRef::new(TEST_STRING);
        // "H" "i" " " => 3 units, then 😃 spans [3, 5).
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(0)), seg_width(0));
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(3)), seg_width(3));
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(4)), seg_width(3));
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(5)), seg_width(4));
        // 🙏🏽 spans [9, 13).
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(12)), seg_width(7));
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(13)), seg_width(8));
        // Past the end clamps.
        assert_eq2!(gcs.seg_width_at_utf16_index(utf16_index(1_000)), gcs.len());
    }

    #[test]
    fn test_str_and_range_between() {
        let gcs = GCStringRef::new(TEST_STRING);
        let at = gcs.rfind_seg("@", gcs.len()).unwrap();
        assert_eq2!(at, seg_index(9));

        let end = seg_width(13);
        assert_eq2!(gcs.str_between(at, end), "@bob");
        let range = gcs.utf16_range_between(at, end);
        assert_eq2!(range.start, utf16_index(14));
        assert_eq2!(range.len, utf16_len(4));
        assert_eq2!(range.slice_of(TEST_STRING).as_deref(), Some("@bob"));

        // Empty runs.
        assert_eq2!(gcs.str_between(at, seg_width(9)), "");
        assert_eq2!(gcs.utf16_range_between(at, seg_width(9)).len, utf16_len(0));
    }

    #[test]
    fn test_rfind_seg_respects_upper_bound() {
        let gcs = GCStringRef::new("@a @b");
        assert_eq2!(gcs.rfind_seg("@", gcs.len()), Some(seg_index(3)));
        assert_eq2!(gcs.rfind_seg("@", seg_width(3)), Some(seg_index(0)));
        assert_eq2!(gcs.rfind_seg("@", seg_width(0)), None);
        assert_eq2!(gcs.rfind_seg("#", gcs.len()), None);
    }

    #[test]
    fn test_rfind_seg_is_grapheme_exact() {
        let gcs = GCStringRef::new("e\u{301}");
        assert_eq2!(gcs.rfind_seg("e", gcs.len()), None);
        assert_eq2!(gcs.rfind_seg("e\u{301}", gcs.len()), Some(seg_index(0)));
    }
}
