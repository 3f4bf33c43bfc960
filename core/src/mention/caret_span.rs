// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::{Utf16Index, utf16_index};

/// The caret (or selection) of the host text widget, as a half open range of UTF-16
/// offsets `[start, end)`. A collapsed caret has `start == end`. Only [`Self::end`]
/// anchors a scan.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaretSpan {
    pub start: Utf16Index,
    pub end: Utf16Index,
}

/// Creates a [`CaretSpan`]. The bounds are swapped if `start` is after `end`, which is
/// what a backwards selection looks like in some hosts.
pub fn caret_span(start: impl Into<Utf16Index>, end: impl Into<Utf16Index>) -> CaretSpan {
    let start = start.into();
    let end = end.into();
    CaretSpan {
        start: start.min(end),
        end: start.max(end),
    }
}

impl CaretSpan {
    /// A caret with no selection, at `at`.
    pub fn collapsed(at: impl Into<Utf16Index>) -> Self {
        let at = at.into();
        caret_span(at, at)
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool { self.start == self.end }
}

impl From<Range<usize>> for CaretSpan {
    fn from(range: Range<usize>) -> Self {
        caret_span(utf16_index(range.start), utf16_index(range.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_caret_span_normalizes_bounds() {
        let it = caret_span(9, 4);
        assert_eq2!(it.start, utf16_index(4));
        assert_eq2!(it.end, utf16_index(9));
        assert!(!it.is_collapsed());
    }

    #[test]
    fn test_collapsed_and_from_range() {
        assert!(CaretSpan::collapsed(3).is_collapsed());
        assert_eq2!(CaretSpan::from(2..5), caret_span(2, 5));
    }
}
