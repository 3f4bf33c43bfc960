// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Segment building utilities for grapheme clusters.
//!
//! See the [module docs](crate::graphemes) for information about grapheme clusters and
//! the three types of indices used in this crate.

use unicode_segmentation::UnicodeSegmentation;

use crate::{Seg, SegmentArray, Utf16Len, seg_index, utf16_index, utf16_len};

/// Build grapheme cluster segments for any string slice.
///
/// This function analyzes a UTF-8 string and creates a segment for each grapheme
/// cluster (user-perceived character). It includes an ASCII fast path, since most text
/// that flows through a mention scanner is plain ASCII.
#[must_use]
pub fn build_segments_for_str(input: &str) -> SegmentArray {
    // ASCII fast path.
    if input.is_ascii() {
        return build_ascii_segments(input);
    }

    let mut segments = SegmentArray::new();
    let mut byte_offset = 0;
    let mut utf16_offset = 0;

    for (seg_idx, grapheme) in input.graphemes(true).enumerate() {
        let bytes_size = grapheme.len();
        let units = grapheme.encode_utf16().count();

        segments.push(Seg {
            start_byte_index: byte_offset,
            end_byte_index: byte_offset + bytes_size,
            seg_index: seg_index(seg_idx),
            start_utf16_index: utf16_index(utf16_offset),
            utf16_len: utf16_len(units),
        });

        byte_offset += bytes_size;
        utf16_offset += units;
    }

    segments
}

/// Build segments for ASCII-only strings (optimized path).
///
/// ASCII characters are always 1 byte and 1 UTF-16 code unit. Note that `"\r\n"` is a
/// single grapheme cluster, so it can't take this path blindly.
fn build_ascii_segments(input: &str) -> SegmentArray {
    if input.contains("\r\n") {
        return input
            .grapheme_indices(true)
            .enumerate()
            .map(|(seg_idx, (byte_offset, grapheme))| Seg {
                start_byte_index: byte_offset,
                end_byte_index: byte_offset + grapheme.len(),
                seg_index: seg_index(seg_idx),
                start_utf16_index: utf16_index(byte_offset),
                utf16_len: utf16_len(grapheme.len()),
            })
            .collect();
    }

    let mut segments = SegmentArray::with_capacity(input.len());

    for i in 0..input.len() {
        segments.push(Seg {
            start_byte_index: i,
            end_byte_index: i + 1,
            seg_index: seg_index(i),
            start_utf16_index: utf16_index(i),
            utf16_len: utf16_len(1),
        });
    }

    segments
}

/// Calculate total UTF-16 length from segments.
#[must_use]
pub fn calculate_utf16_len(segments: &SegmentArray) -> Utf16Len {
    segments
        .last()
        .map_or(/* None */ utf16_len(0), /* Some */ |seg| {
            utf16_len(seg.end_utf16_index().as_usize())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_build_segments_ascii() {
        let input = "Hello";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 5);
        assert_eq2!(calculate_utf16_len(&segments), utf16_len(5));

        // Check first segment 'H'.
        let seg = &segments[0];
        assert_eq2!(seg.start_byte_index, 0);
        assert_eq2!(seg.end_byte_index, 1);
        assert_eq2!(seg.start_utf16_index, utf16_index(0));
        assert_eq2!(seg.utf16_len, utf16_len(1));
    }

    #[test]
    fn test_build_segments_ascii_crlf() {
        let input = "a\r\nb";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 3);
        assert_eq2!(segments[1].get_str(input), "\r\n");
        assert_eq2!(segments[1].utf16_len, utf16_len(2));
        assert_eq2!(segments[2].seg_index, seg_index(2));
        assert_eq2!(segments[2].start_utf16_index, utf16_index(3));
        assert_eq2!(calculate_utf16_len(&segments), utf16_len(4));
    }

    #[test]
    fn test_build_segments_emoji() {
        let input = "H😀!";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 3);
        assert_eq2!(calculate_utf16_len(&segments), utf16_len(4)); // H(1) + 😀(2) + !(1)

        // Check emoji segment.
        let emoji_seg = &segments[1];
        assert_eq2!(emoji_seg.start_byte_index, 1);
        assert_eq2!(emoji_seg.end_byte_index, 5); // 4 bytes
        assert_eq2!(emoji_seg.start_utf16_index, utf16_index(1));
        assert_eq2!(emoji_seg.utf16_len, utf16_len(2));

        // Check the segment after the emoji.
        assert_eq2!(segments[2].start_utf16_index, utf16_index(3));
    }

    #[test]
    fn test_build_segments_jumbo_emoji() {
        let input = "🙏🏽"; // Folded hands with skin tone.
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 1);
        assert_eq2!(segments[0].bytes_size(), 8);
        assert_eq2!(segments[0].utf16_len, utf16_len(4));
    }

    #[test]
    fn test_build_segments_combining_mark() {
        let input = "e\u{301}x"; // Decomposed "é" followed by "x".
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 2);
        assert_eq2!(segments[0].get_str(input), "e\u{301}");
        assert_eq2!(segments[0].utf16_len, utf16_len(2));
        assert_eq2!(segments[1].start_utf16_index, utf16_index(2));
    }

    #[test]
    fn test_build_segments_empty() {
        let segments = build_segments_for_str("");
        assert!(segments.is_empty());
        assert_eq2!(calculate_utf16_len(&segments), utf16_len(0));
    }
}
