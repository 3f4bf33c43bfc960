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

//! # Why?
//!
//! Chat boxes, issue trackers, and code editors all pop up a suggestion list when you
//! type `@` or `#` and then some letters. To do that, the app has to answer one question
//! on every keystroke: "is the user typing a mention right now, and if so, what have they
//! typed so far, and where is it?". This crate answers that question, and nothing else.
//! It does not own the text buffer, or render anything.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Quick start](#quick-start)
//! - [How a match is found](#how-a-match-is-found)
//! - [Unicode](#unicode)
//! - [Logging](#logging)
//! - [Error handling](#error-handling)
//!
//! <!-- /TOC -->
//!
//! # Quick start
//!
//! ```
//! use r3bl_mention::{DelimiterSet, MentionConfig, TextSnapshot, utf16_range};
//!
//! let config = MentionConfig::default()
//!     .with_prefixes(["@", "#"])
//!     .with_global_delimiter_set(DelimiterSet::whitespace_and_newlines());
//!
//! // The host widget provides the text and the caret.
//! let host = TextSnapshot::new("Hi @alice and #bo").with_caret_at_end();
//!
//! let it = config.find_in_host(&host).unwrap();
//! assert_eq!(it.prefix.as_str(), "#");
//! assert_eq!(it.word, "#bo");
//! assert_eq!(it.range, utf16_range(14, 3));
//! ```
//!
//! # How a match is found
//!
//! 1. Only the text before the caret is searched.
//! 2. For each prefix, the last occurrence of its first character anchors the match, and
//!    the rest of the prefix has to follow it directly.
//! 3. The word runs from the prefix to the caret. The part after the prefix must not
//!    contain a delimiter. When `max_space_count_allowed` is more than 0, short runs of
//!    whitespace are tolerated (eg: `@Jane Doe`).
//! 4. The match that starts closest to the caret wins.
//!
//! See [`mod@mention`] for the details.
//!
//! # Unicode
//!
//! Text is scanned one grapheme cluster at a time, so `🙏🏽` is one character, and a
//! prefix or a range never splits it. Offsets at the boundary (caret in, range out) are
//! counted in UTF-16 code units, which is what most UI toolkits use for text ranges. See
//! [`mod@graphemes`].
//!
//! # Logging
//!
//! Logging is **DISABLED** by **default**. Use [`try_initialize_logging_global`] or
//! [`try_initialize_logging_thread_local`] to turn it on, and [`DEBUG_MENTION_SCAN`] to
//! trace every candidate that the scanner looks at.
//!
//! # Error handling
//!
//! Scanning never fails, it returns [`Option`]. Loading a [`MentionConfig`] can fail,
//! and returns a [`CommonResult`], which is a [`miette::Result`].

// Strict error handling in library code only. Tests may use `.unwrap()`.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod decl_macros;
pub mod graphemes;
pub mod log;
pub mod mention;
pub mod stack_alloc_types;

// Re-export.
pub use common::*;
pub use graphemes::*;
pub use log::*;
pub use mention::*;
pub use stack_alloc_types::*;
