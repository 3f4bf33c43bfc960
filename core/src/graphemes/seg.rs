/*
 *   Copyright (c) 2024-2026 R3BL LLC
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

use super::{SegIndex, Utf16Index, Utf16Len};

/// `Seg` represents a grapheme cluster segment within a [`super::GCStringRef`].
///
/// This struct is the bridge between the three types of indices used by the scanner.
/// Each `Seg` contains all the information needed to convert between byte indices (used
/// to slice the Rust `&str`), [`SegIndex`] (used by the matching logic), and
/// [`Utf16Index`] (used to talk to the host text widget).
///
/// A Unicode "grapheme" is a user-perceived character.
/// - The single letter "A" (U+0041) is a grapheme cluster consisting of one code point,
///   one byte, and one UTF-16 code unit.
/// - The `😀` emoji is a single grapheme cluster and a single code point, but it takes 4
///   bytes and 2 UTF-16 code units (a surrogate pair).
/// - The `🙏🏽` emoji is an amalgamation of two code points `'🙏' + '🏽'`, so it takes 8
///   bytes and 4 UTF-16 code units, but it is still a single grapheme cluster.
///
/// If you use [`str::chars()`] to walk `🙏🏽` you get two separate [char]s, and a range
/// that ends between them would split the emoji. This is why positions are tracked per
/// grapheme cluster, using [`unicode_segmentation::UnicodeSegmentation`].
///
/// # Performance, memory latency, access, allocation
///
/// This struct does not allocate anything and is [Copy]. The [`super::GCStringRef`]
/// borrows the string, and this struct is a "view" into one grapheme cluster of it.
///
/// ## Example
///
/// ```
/// use r3bl_mention::{GCStringRef, seg_index, utf16_index, utf16_len};
///
/// let gcs = GCStringRef::new("📦🙏🏽");
/// let seg = gcs.get(seg_index(1)).unwrap();
/// assert_eq!(seg.start_byte_index, 4);
/// assert_eq!(seg.end_byte_index, 12);
/// assert_eq!(seg.start_utf16_index, utf16_index(2));
/// assert_eq!(seg.utf16_len, utf16_len(4));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct Seg {
    /// The start index (bytes), in the string slice used to generate the
    /// [`super::GCStringRef`] that this grapheme cluster represents.
    pub start_byte_index: usize,

    /// The end index (bytes, exclusive), in the string slice used to generate the
    /// [`super::GCStringRef`] that this grapheme cluster represents.
    pub end_byte_index: usize,

    /// The index of this entry in the segment array.
    pub seg_index: SegIndex,

    /// UTF-16 offset (in the original string slice) at which this grapheme cluster
    /// starts.
    pub start_utf16_index: Utf16Index,

    /// Number of UTF-16 code units this grapheme cluster occupies. This is 1 for most
    /// text, 2 for astral plane characters like emoji, and more for compound clusters.
    pub utf16_len: Utf16Len,
}

impl Seg {
    /// Get the string slice for the grapheme cluster segment.
    #[must_use]
    pub fn get_str<'a>(&self, string: &'a str) -> &'a str {
        &string[self.start_byte_index..self.end_byte_index]
    }

    /// Exclusive UTF-16 end offset of this grapheme cluster.
    #[must_use]
    pub fn end_utf16_index(&self) -> Utf16Index { self.start_utf16_index + self.utf16_len }

    #[must_use]
    pub fn bytes_size(&self) -> usize { self.end_byte_index - self.start_byte_index }
}
