// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-16 code unit offsets. Host text widgets (and most UI text range conventions)
//! describe carets and selections in UTF-16 code units, so every range that leaves this
//! crate is expressed in these units.
//!
//! | Character | UTF-8 bytes | UTF-16 code units | Grapheme clusters |
//! | --------- | ----------- | ----------------- | ----------------- |
//! | `H`       | 1           | 1                 | 1                 |
//! | `é`       | 2           | 1                 | 1                 |
//! | `😃`      | 4           | 2                 | 1                 |
//! | `🙏🏽`      | 8           | 4                 | 1                 |

use std::{fmt::{Display, Formatter},
          ops::{Deref, Range}};

use serde::{Deserialize, Serialize};

/// Offset into a string, counted in UTF-16 code units.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Utf16Index(pub usize);

pub fn utf16_index(arg: impl Into<Utf16Index>) -> Utf16Index { arg.into() }

/// Number of UTF-16 code units.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Utf16Len(pub usize);

pub fn utf16_len(arg: impl Into<Utf16Len>) -> Utf16Len { arg.into() }

mod utf16_index_impl_block {
    use super::{Deref, Utf16Index, Utf16Len};

    impl Utf16Index {
        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Utf16Len {
        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for Utf16Index {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl Deref for Utf16Len {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl From<usize> for Utf16Index {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<usize> for Utf16Len {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl From<Utf16Len> for Utf16Index {
        /// The offset right after `len` code units, eg: the end of a string.
        fn from(it: Utf16Len) -> Self { Self(it.0) }
    }

    impl std::ops::Add<Utf16Len> for Utf16Index {
        type Output = Utf16Index;
        fn add(self, rhs: Utf16Len) -> Self::Output { Utf16Index(self.0 + rhs.0) }
    }

    impl std::ops::AddAssign<Utf16Len> for Utf16Len {
        fn add_assign(&mut self, rhs: Utf16Len) { self.0 += rhs.0; }
    }
}

/// A `(location, length)` pair in UTF-16 code units, which is the shape of a text range
/// in most UI toolkits. The range is half open: `[start, start + len)`.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Utf16Range {
    pub start: Utf16Index,
    pub len: Utf16Len,
}

pub fn utf16_range(start: impl Into<Utf16Index>, len: impl Into<Utf16Len>) -> Utf16Range {
    Utf16Range {
        start: start.into(),
        len: len.into(),
    }
}

impl Utf16Range {
    /// Exclusive end offset.
    #[must_use]
    pub fn end(&self) -> Utf16Index { self.start + self.len }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len.0 == 0 }

    #[must_use]
    pub fn as_range(&self) -> Range<usize> { self.start.0..self.end().0 }

    /// Cut this range out of `text`, by re-encoding `text` as UTF-16. Returns [`None`] if
    /// the range runs past the end of `text`, or if it splits a surrogate pair.
    ///
    /// ```
    /// use r3bl_mention::utf16_range;
    ///
    /// let text = "😃 @bob";
    /// assert_eq!(utf16_range(3, 4).slice_of(text).as_deref(), Some("@bob"));
    /// assert_eq!(utf16_range(1, 2).slice_of(text), None);
    /// ```
    #[must_use]
    pub fn slice_of(&self, text: &str) -> Option<String> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let slice = units.get(self.as_range())?;
        String::from_utf16(slice).ok()
    }
}

impl Display for Utf16Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.0, self.end().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_range_end_and_display() {
        let range = utf16_range(6, 7);
        assert_eq2!(range.end(), utf16_index(13));
        assert_eq2!(range.as_range(), 6..13);
        assert_eq2!(format!("{range}"), "[6, 13)");
        assert!(!range.is_empty());
        assert!(utf16_range(3, 0).is_empty());
    }

    #[test]
    fn test_slice_of_past_the_end() {
        assert_eq2!(utf16_range(2, 10).slice_of("abc"), None);
        assert_eq2!(utf16_range(3, 0).slice_of("abc").as_deref(), Some(""));
    }

    #[test]
    fn test_serde_shape() {
        let range = utf16_range(6, 7);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq2!(json, r#"{"start":6,"len":7}"#);
    }
}
