/*
 *   Copyright (c) 2022-2026 R3BL LLC
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

//! Rust uses `UTF-8` to represent text in [String]. `UTF-8` is a variable width encoding,
//! so each character can take up a different number of bytes, between 1 and 4. Text
//! widgets on most UI platforms use `UTF-16` instead, and describe the caret and
//! selections in `UTF-16` code units. And users think in neither: they think in
//! grapheme clusters, aka user-perceived characters.
//!
//! | Character | Byte size | UTF-16 code units | Grapheme cluster count | Compound |
//! | --------- | --------- | ----------------- | ---------------------- | -------- |
//! | `H`       | 1         | 1                 | 1                      | No       |
//! | `😃`      | 4         | 2                 | 1                      | No       |
//! | `📦`      | 4         | 2                 | 1                      | No       |
//! | `🙏🏽`      | 8         | 4                 | 1                      | Yes      |
//!
//! Here are examples of compound grapheme clusters.
//!
//! ```text
//! 🏽 + 🙏 = 🙏🏽
//! 🏾‍ + 👨 + 🤝‍ + 👨 +  🏿 = 👨🏾‍🤝‍👨🏿
//! ```
//!
//! A mention scanner has to juggle all three:
//!
//! 1. The caret arrives from the host as a `UTF-16` offset ([`Utf16Index`]).
//! 2. The matching logic walks the text one grapheme cluster at a time ([`SegIndex`],
//!    [`SegWidth`]), so that a prefix can never match half of an emoji, and a reported
//!    range can never end in the middle of one.
//! 3. The matched word is sliced out of the Rust `&str` using byte indices, and its range
//!    is reported back to the host as a [`Utf16Range`].
//!
//! [`GCStringRef`] does this bookkeeping. It is built once per query using the
//! [`unicode-segmentation`](https://crates.io/crates/unicode-segmentation) crate, and
//! each of its [`Seg`]s carries the byte range, the segment index, and the `UTF-16`
//! offset and length of one grapheme cluster.
//!
//! Docs:
//!
//! - [Grapheme clusters](https://medium.com/flutter-community/working-with-unicode-and-grapheme-clusters-in-dart-b054faab5705)
//! - [UTF-8 String](https://doc.rust-lang.org/book/ch08-02-strings.html)
//! - [UTF-16](https://en.wikipedia.org/wiki/UTF-16#Code_points_from_U+010000_to_U+10FFFF)

// Attach sources.
pub mod gc_string_ref;
pub mod seg;
pub mod seg_index;
pub mod segment_builder;
pub mod utf16_index;

// Re-export.
pub use gc_string_ref::*;
pub use seg::*;
pub use seg_index::*;
pub use segment_builder::*;
pub use utf16_index::*;
