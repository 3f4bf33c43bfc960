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

//! Caret anchored mention scanning. Given the text of an editor, the caret, and a list
//! of trigger prefixes (like `@` or `#`), find what the user is typing right now after
//! one of those triggers.
//!
//! ```text
//! Hi @alice and #bo|      <- caret
//!               ╰─╯
//!               prefix `#`, word `#bo`, UTF-16 range [14, 17)
//! ```
//!
//! The layers, leaf first:
//!
//! 1. [`has_whitespace_run_longer_than`], the whitespace run detector.
//! 2. [`is_valid`], which checks the text after a prefix against a [`DelimiterSet`].
//! 3. [`find_match`], which scans for a single prefix.
//! 4. [`find_best_match`], which scans for all the prefixes, and picks the most recent
//!    match.
//! 5. [`MentionConfig`] and [`TextHost`], which bundle the settings, and talk to the
//!    host text widget.
//!
//! None of these fail. When there is no mention at the caret, they return [`None`].

/// Set this to `true` to log every rejected and accepted candidate.
pub const DEBUG_MENTION_SCAN: bool = false;

// Attach sources.
pub mod best_match;
pub mod caret_span;
pub mod delimiter_set;
pub mod mention_config;
pub mod mention_match;
pub mod prefix_scan;
pub mod text_host;
pub mod validity;
pub mod whitespace_run;

// Re-export.
pub use best_match::*;
pub use caret_span::*;
pub use delimiter_set::*;
pub use mention_config::*;
pub use mention_match::*;
pub use prefix_scan::*;
pub use text_host::*;
pub use validity::*;
pub use whitespace_run::*;
