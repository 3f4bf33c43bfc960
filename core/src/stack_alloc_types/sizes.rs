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

//! Be very careful when adjusting these tuning parameters. The rule of thumb is that
//! smaller static allocation sizes are better than larger. Huge stack allocations can
//! cause stack overflow errors, and every query segments its text into one of these.

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::Seg;

/// Most trigger prefixes (`@`, `#`, `:`, `/`) are a handful of bytes, so they fit
/// inline.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list that is used for short lists of things. It spills to the heap
/// when it gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Grapheme cluster segments for one string. Short lines (a typical chat message or a
/// single line of an editor) don't touch the heap.
pub type SegmentArray = SmallVec<[Seg; SEGMENT_ARRAY_SIZE]>;
pub const SEGMENT_ARRAY_SIZE: usize = 32;
