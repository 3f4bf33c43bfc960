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

//! # Why?
//!
//! Before wiring a mention config into an editor, it is handy to poke at it from the
//! shell. The `mention` binary takes some text and a caret, runs the same scan that
//! [`r3bl_mention`] runs inside an app, and prints what it found.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Run the mention binary](#run-the-mention-binary)
//! - [Config files](#config-files)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Run the mention binary
//!
//! ```sh
//! cargo run --bin mention -- "Hi @alice and #bo" -p @ -p '#'
//! # prefix: "#", word: "#bo", range: [14, 17)
//!
//! echo -n "Hello @nathan how are" | cargo run --bin mention -- --stdin --caret 13 --json
//! # {"prefix":"@","word":"@nathan","range":{"start":6,"len":7}}
//! ```
//!
//! When nothing is being typed at the caret, `no match` (or `null` with `--json`) is
//! printed and the exit code is still 0.
//!
//! # Config files
//!
//! `--config` loads a [`r3bl_mention::MentionConfig`] from JSON. The other options are
//! layered on top of it, see [`try_build_config`].
//!
//! ```json
//! {
//!   "prefixes": ["@", "#"],
//!   "delimiter_sets": { "#": " \n." },
//!   "global_delimiter_set": " \n",
//!   "max_space_count_allowed": 1
//! }
//! ```
//!
//! # Logging
//!
//! Pass `-l` to write debug logs to `log.txt` in the current folder.

// Strict error handling in library code only. Tests may use `.unwrap()`.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod mention_cli;

// Re-export.
pub use mention_cli::*;
