/*
 *   Copyright (c) 2023-2026 R3BL LLC
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

use std::io::Read;

use miette::IntoDiagnostic;
use r3bl_mention::{CommonError, CommonErrorType, CommonResult, DelimiterSet, MentionConfig,
                   MentionMatch, TextHost, TextSnapshot};

use super::{CLIArg, MentionOption, ui_str};

/// Reads the text, builds the config, and runs the scan at the caret.
///
/// # Errors
///
/// Returns an error if there is no text, if stdin can't be read, or if the config file
/// can't be loaded.
pub fn try_run(cli_arg: &CLIArg, stdin: impl Read) -> CommonResult<Option<MentionMatch>> {
    let config = try_build_config(&cli_arg.mention_options)?;
    let warning_count = config.validate();

    let host = try_read_text_host(cli_arg, stdin)?;

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🔎 mention: scanning",
        config = ?config,
        caret_span = ?host.caret_span(),
        warning_count = %warning_count,
    );

    let it = config.find_in_host(&host);

    tracing::debug!(message = "🔎 mention: result", result = ?it);

    Ok(it)
}

/// Layers the command line options on top of the config file (or the default config).
///
/// - Prefixes from the command line are added after the ones from the file, skipping
///   duplicates. If there are none at all, [`ui_str::DEFAULT_PREFIX`] is used.
/// - `--delimiters` replaces the global delimiter set.
/// - `--prefix-delimiters` adds or replaces the set for one prefix.
/// - `--max-spaces` replaces the max space count.
/// - If no delimiter set is given anywhere, the global set is
///   [`DelimiterSet::whitespace_and_newlines`].
///
/// # Errors
///
/// Returns an error if the config file can't be loaded.
pub fn try_build_config(options: &MentionOption) -> CommonResult<MentionConfig> {
    let mut config = match &options.config {
        Some(path) => MentionConfig::try_load(path)?,
        None => MentionConfig::default(),
    };

    for prefix in &options.prefixes {
        if !config.prefixes.contains(prefix) {
            config.prefixes.push(prefix.clone());
        }
    }
    if config.prefixes.is_empty() {
        config.prefixes.push(ui_str::DEFAULT_PREFIX.to_string());
    }

    if let Some(chars) = &options.delimiters {
        config.global_delimiter_set = Some(DelimiterSet::from(chars.as_str()));
    }

    for (prefix, chars) in &options.prefix_delimiters {
        config
            .delimiter_sets
            .insert(prefix.clone(), DelimiterSet::from(chars.as_str()));
    }

    if let Some(max_space_count_allowed) = options.max_space_count_allowed {
        config.max_space_count_allowed = max_space_count_allowed;
    }

    if config.global_delimiter_set.is_none() && config.delimiter_sets.is_empty() {
        config.global_delimiter_set = Some(DelimiterSet::whitespace_and_newlines());
    }

    Ok(config)
}

/// The text comes from the positional argument, or from `stdin` when `--stdin` is set.
/// The caret is collapsed at `--caret`, or at the end of the text.
///
/// # Errors
///
/// Returns an error if there is no text, or if `stdin` can't be read.
pub fn try_read_text_host(cli_arg: &CLIArg, mut stdin: impl Read) -> CommonResult<TextSnapshot> {
    let text = match (&cli_arg.text, cli_arg.stdin) {
        (_, true) => {
            let mut acc = String::new();
            stdin.read_to_string(&mut acc).into_diagnostic()?;
            acc
        }
        (Some(text), false) => text.clone(),
        (None, false) => {
            return CommonError::new_error_result(
                CommonErrorType::InvalidArguments,
                ui_str::no_text_msg(),
            );
        }
    };

    let host = TextSnapshot::new(text);
    Ok(match cli_arg.caret {
        Some(caret) => host.with_caret_span(caret..caret),
        None => host.with_caret_at_end(),
    })
}

/// Renders the result for stdout.
///
/// # Errors
///
/// Returns an error if the result can't be serialized to JSON.
pub fn try_format_result(maybe_match: Option<&MentionMatch>, json: bool) -> CommonResult<String> {
    match (maybe_match, json) {
        (Some(it), true) => serde_json::to_string(it).into_diagnostic(),
        (None, true) => Ok("null".to_string()),
        (Some(it), false) => Ok(ui_str::match_found_msg(it).to_string()),
        (None, false) => Ok(ui_str::NO_MATCH_MSG.to_string()),
    }
}
