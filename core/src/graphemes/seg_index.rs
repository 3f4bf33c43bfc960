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

use std::ops::{Deref, DerefMut};

/// Represents a grapheme segment index inside of [`super::GCStringRef`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegIndex(pub usize);

pub fn seg_index(arg_seg_index: impl Into<SegIndex>) -> SegIndex { arg_seg_index.into() }

mod seg_index_impl_block {
    use super::{Deref, DerefMut, SegIndex, SegWidth, seg_width};

    impl SegIndex {
        /// Converts the segment index to a width, by adding 1.
        #[must_use]
        pub fn convert_to_seg_width(&self) -> SegWidth { seg_width(self.0 + 1) }

        /// The index of the segment right after this one. Used when checking that the
        /// graphemes of a prefix are contiguous.
        #[must_use]
        pub fn next(&self) -> SegIndex { SegIndex(self.0 + 1) }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for SegIndex {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for SegIndex {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<usize> for SegIndex {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<SegWidth> for SegIndex {
        fn from(other: SegWidth) -> Self { other.convert_to_seg_index() }
    }
}

/// Represents a count of the number of grapheme segments inside of
/// [`super::GCStringRef`]. The width is max index (zero based) + 1. It is also used as
/// the exclusive upper bound of a run of segments, eg: the leading text in front of a
/// caret.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegWidth(pub usize);

pub fn seg_width(arg_seg_width: impl Into<SegWidth>) -> SegWidth { arg_seg_width.into() }

mod seg_width_impl_block {
    use super::{Deref, DerefMut, SegIndex, SegWidth, seg_index};

    impl SegWidth {
        /// Converts the width to a segment index, by subtracting 1. A width of 0 saturates
        /// to index 0.
        #[must_use]
        pub fn convert_to_seg_index(&self) -> SegIndex { seg_index(self.0.saturating_sub(1)) }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for SegWidth {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl DerefMut for SegWidth {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
    }

    impl From<usize> for SegWidth {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<SegIndex> for SegWidth {
        fn from(other: SegIndex) -> Self { other.convert_to_seg_width() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seg_index_conversions() {
        let index = seg_index(0);
        let width = index.convert_to_seg_width();
        assert_eq!(width, seg_width(1));
        let index = width.convert_to_seg_index();
        assert_eq!(index, seg_index(0));
    }

    #[test]
    fn seg_width_zero_saturates() {
        let width = seg_width(0);
        assert!(width.is_zero());
        assert_eq!(width.convert_to_seg_index(), seg_index(0));
    }

    #[test]
    fn seg_index_next() {
        assert_eq!(seg_index(4).next(), seg_index(5));
    }
}
